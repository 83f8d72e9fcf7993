use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::error::ValidationError;
use crate::media::{original_or_title, Media, MediaKind};
use crate::review::ReviewInfo;

/// Everything needed to create a [`Movie`] except its id.
#[derive(Debug, Clone, Default)]
pub struct NewMovie {
    pub title: String,
    pub original_title: String,
    pub genres: Vec<String>,
    pub release_year: i32,
    /// Minutes.
    pub duration: u32,
    pub director: String,
    pub synopsis: String,
    pub cast: Vec<String>,
    pub where_to_watch: Vec<String>,
    pub watched_status: bool,
    pub watch_date: Option<NaiveDate>,
    pub review_info: ReviewInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    movie_id: u64,
    title: String,
    #[serde(default)]
    original_title: String,
    #[serde(default)]
    genres: Vec<String>,
    #[serde(default)]
    release_year: i32,
    #[serde(default)]
    duration: u32,
    #[serde(default)]
    director: String,
    #[serde(default)]
    synopsis: String,
    #[serde(default)]
    cast: Vec<String>,
    #[serde(default)]
    where_to_watch: Vec<String>,
    #[serde(default)]
    watched_status: bool,
    #[serde(default)]
    watch_date: Option<NaiveDate>,
    #[serde(default)]
    review_info: ReviewInfo,
}

impl Movie {
    pub fn new(movie_id: u64, draft: NewMovie) -> Self {
        let original_title = original_or_title(&draft.title, draft.original_title);
        Self {
            movie_id,
            title: draft.title,
            original_title,
            genres: draft.genres,
            release_year: draft.release_year,
            duration: draft.duration,
            director: draft.director,
            synopsis: draft.synopsis,
            cast: draft.cast,
            where_to_watch: draft.where_to_watch,
            watched_status: draft.watched_status,
            watch_date: draft.watch_date,
            review_info: draft.review_info,
        }
    }

    pub fn movie_id(&self) -> u64 {
        self.movie_id
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn director(&self) -> &str {
        &self.director
    }

    pub fn synopsis(&self) -> &str {
        &self.synopsis
    }

    pub fn cast(&self) -> &[String] {
        &self.cast
    }

    pub fn where_to_watch(&self) -> &[String] {
        &self.where_to_watch
    }

    pub fn watched_status(&self) -> bool {
        self.watched_status
    }

    pub fn watch_date(&self) -> Option<NaiveDate> {
        self.watch_date
    }

    pub fn review_info(&self) -> &ReviewInfo {
        &self.review_info
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_original_title(&mut self, original_title: impl Into<String>) {
        self.original_title = original_or_title(&self.title, original_title.into());
    }

    pub fn set_genres(&mut self, genres: &[String]) {
        self.genres = genres.to_vec();
    }

    pub fn set_release_year(&mut self, year: i32) {
        self.release_year = year;
    }

    pub fn set_duration(&mut self, minutes: u32) {
        self.duration = minutes;
    }

    pub fn set_director(&mut self, director: impl Into<String>) {
        self.director = director.into();
    }

    pub fn set_synopsis(&mut self, synopsis: impl Into<String>) {
        self.synopsis = synopsis.into();
    }

    pub fn set_cast(&mut self, cast: &[String]) {
        self.cast = cast.to_vec();
    }

    pub fn set_where_to_watch(&mut self, platforms: &[String]) {
        self.where_to_watch = platforms.to_vec();
    }

    pub fn set_watched_status(&mut self, watched: bool) {
        self.watched_status = watched;
    }

    pub fn set_watch_date(&mut self, watch_date: Option<NaiveDate>) {
        self.watch_date = watch_date;
    }

    pub fn add_review(&mut self, rating: i64, comment: impl Into<String>) -> Result<(), ValidationError> {
        self.review_info.add_review(rating, comment)
    }
}

impl Media for Movie {
    fn kind(&self) -> MediaKind {
        MediaKind::Movie
    }

    fn id(&self) -> u64 {
        self.movie_id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn original_title(&self) -> &str {
        &self.original_title
    }

    fn genres(&self) -> &[String] {
        &self.genres
    }

    fn release_year(&self) -> i32 {
        self.release_year
    }

    fn creator_name(&self) -> &str {
        &self.director
    }

    fn is_consumed(&self) -> bool {
        self.watched_status
    }

    fn has_reviews(&self) -> bool {
        self.review_info.has_reviews()
    }

    fn average_rating(&self) -> f64 {
        self.review_info.average_rating()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn inception() -> Movie {
        Movie::new(
            1,
            NewMovie {
                title: "A Origem".to_string(),
                original_title: "Inception".to_string(),
                genres: strings(&["Sci-Fi", "Thriller"]),
                release_year: 2010,
                duration: 148,
                director: "Christopher Nolan".to_string(),
                synopsis: "A thief steals secrets through dreams.".to_string(),
                cast: strings(&["Leonardo DiCaprio", "Joseph Gordon-Levitt"]),
                where_to_watch: strings(&["Netflix", "Amazon Prime"]),
                watched_status: true,
                watch_date: NaiveDate::from_ymd_opt(2024, 1, 20),
                review_info: ReviewInfo::new(),
            },
        )
    }

    #[test]
    fn test_movie_creation() {
        let movie = inception();
        assert_eq!(movie.title(), "A Origem");
        assert_eq!(movie.original_title(), "Inception");
        assert_eq!(movie.duration(), 148);
        assert_eq!(movie.release_year(), 2010);
        assert_eq!(movie.creator_name(), "Christopher Nolan");
        assert!(movie.is_consumed());
        assert!(movie.watch_date().is_some());
        assert_eq!(movie.where_to_watch(), strings(&["Netflix", "Amazon Prime"]).as_slice());
        assert_eq!(movie.isbn(), None);
    }

    #[test]
    fn test_setters() {
        let mut movie = inception();
        movie.set_original_title("Inception Original");
        movie.set_duration(150);
        movie.set_director("Nolan");
        movie.set_synopsis("New synopsis");
        movie.set_cast(&strings(&["Actor 1", "Actor 2"]));
        movie.set_where_to_watch(&strings(&["Disney+"]));
        movie.set_watched_status(false);

        assert_eq!(movie.original_title(), "Inception Original");
        assert_eq!(movie.duration(), 150);
        assert_eq!(movie.director(), "Nolan");
        assert_eq!(movie.synopsis(), "New synopsis");
        assert_eq!(movie.cast(), strings(&["Actor 1", "Actor 2"]).as_slice());
        assert_eq!(movie.where_to_watch(), strings(&["Disney+"]).as_slice());
        assert!(!movie.watched_status());
    }

    #[test]
    fn test_cast_and_platforms_are_copied() {
        let mut movie = inception();
        let mut cast = strings(&["Elliot Page"]);
        let mut platforms = strings(&["Max"]);
        movie.set_cast(&cast);
        movie.set_where_to_watch(&platforms);
        cast.push("Tom Hardy".to_string());
        platforms.clear();

        assert_eq!(movie.cast(), strings(&["Elliot Page"]).as_slice());
        assert_eq!(movie.where_to_watch(), strings(&["Max"]).as_slice());

        let mut snapshot = movie.cast().to_vec();
        snapshot.push("Cillian Murphy".to_string());
        assert_eq!(movie.cast().len(), 1);
    }

    #[test]
    fn test_add_review() {
        let mut movie = inception();
        movie.add_review(5, "One of the best").unwrap();
        assert_eq!(movie.review_info().average_rating(), 5.0);
        assert!(movie.add_review(6, "").is_err());
        assert_eq!(movie.review_info().review_count(), 1);
    }
}
