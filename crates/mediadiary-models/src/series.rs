use serde::{Deserialize, Serialize};
use crate::error::ValidationError;
use crate::media::{original_or_title, Media, MediaKind};
use crate::review::ReviewInfo;

/// A season of a [`Series`]. Only reachable through its series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Season {
    season_number: u32,
    #[serde(default)]
    episodes: u32,
    #[serde(default)]
    release_year: i32,
    #[serde(default)]
    cast: Vec<String>,
    #[serde(default)]
    review_info: ReviewInfo,
}

impl Season {
    pub fn new(season_number: u32, episodes: u32, release_year: i32, cast: &[String]) -> Self {
        Self {
            season_number,
            episodes,
            release_year,
            cast: cast.to_vec(),
            review_info: ReviewInfo::new(),
        }
    }

    pub fn season_number(&self) -> u32 {
        self.season_number
    }

    pub fn episodes(&self) -> u32 {
        self.episodes
    }

    pub fn release_year(&self) -> i32 {
        self.release_year
    }

    pub fn cast(&self) -> &[String] {
        &self.cast
    }

    pub fn review_info(&self) -> &ReviewInfo {
        &self.review_info
    }

    pub fn set_season_number(&mut self, season_number: u32) {
        self.season_number = season_number;
    }

    pub fn set_episodes(&mut self, episodes: u32) {
        self.episodes = episodes;
    }

    pub fn set_release_year(&mut self, year: i32) {
        self.release_year = year;
    }

    pub fn set_cast(&mut self, cast: &[String]) {
        self.cast = cast.to_vec();
    }

    pub fn add_review(&mut self, rating: i64, comment: impl Into<String>) -> Result<(), ValidationError> {
        self.review_info.add_review(rating, comment)
    }

    pub fn average_rating(&self) -> f64 {
        self.review_info.average_rating()
    }

    pub fn is_rated(&self) -> bool {
        self.review_info.has_reviews()
    }
}

/// Everything needed to create a [`Series`] except its id.
#[derive(Debug, Clone, Default)]
pub struct NewSeries {
    pub title: String,
    pub original_title: String,
    pub creator: String,
    pub genres: Vec<String>,
    pub release_year: i32,
    /// 0 while the series is still running.
    pub end_year: i32,
    pub where_to_watch: Vec<String>,
    pub cast: Vec<String>,
    pub watched_status: bool,
    pub seasons: Vec<Season>,
}

/// A series is rated through its seasons; it carries no review history of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    series_id: u64,
    title: String,
    #[serde(default)]
    original_title: String,
    #[serde(default)]
    creator: String,
    #[serde(default)]
    genres: Vec<String>,
    #[serde(default)]
    release_year: i32,
    #[serde(default)]
    end_year: i32,
    #[serde(default)]
    where_to_watch: Vec<String>,
    #[serde(default)]
    cast: Vec<String>,
    #[serde(default)]
    watched_status: bool,
    #[serde(default)]
    seasons: Vec<Season>,
}

impl Series {
    pub fn new(series_id: u64, draft: NewSeries) -> Self {
        let original_title = original_or_title(&draft.title, draft.original_title);
        Self {
            series_id,
            title: draft.title,
            original_title,
            creator: draft.creator,
            genres: draft.genres,
            release_year: draft.release_year,
            end_year: draft.end_year,
            where_to_watch: draft.where_to_watch,
            cast: draft.cast,
            watched_status: draft.watched_status,
            seasons: draft.seasons,
        }
    }

    pub fn series_id(&self) -> u64 {
        self.series_id
    }

    pub fn creator(&self) -> &str {
        &self.creator
    }

    pub fn end_year(&self) -> i32 {
        self.end_year
    }

    pub fn is_ongoing(&self) -> bool {
        self.end_year == 0
    }

    pub fn where_to_watch(&self) -> &[String] {
        &self.where_to_watch
    }

    pub fn cast(&self) -> &[String] {
        &self.cast
    }

    pub fn watched_status(&self) -> bool {
        self.watched_status
    }

    pub fn seasons(&self) -> &[Season] {
        &self.seasons
    }

    pub fn season(&self, season_number: u32) -> Option<&Season> {
        self.seasons.iter().find(|s| s.season_number == season_number)
    }

    pub fn season_mut(&mut self, season_number: u32) -> Option<&mut Season> {
        self.seasons.iter_mut().find(|s| s.season_number == season_number)
    }

    pub fn add_season(&mut self, season: Season) {
        self.seasons.push(season);
    }

    pub fn set_seasons(&mut self, seasons: &[Season]) {
        self.seasons = seasons.to_vec();
    }

    /// Removes the first season with this number.
    pub fn remove_season(&mut self, season_number: u32) -> Option<Season> {
        let index = self.seasons.iter().position(|s| s.season_number == season_number)?;
        Some(self.seasons.remove(index))
    }

    /// Number of seasons with at least one review.
    pub fn rated_seasons_count(&self) -> usize {
        self.seasons.iter().filter(|s| s.is_rated()).count()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_original_title(&mut self, original_title: impl Into<String>) {
        self.original_title = original_or_title(&self.title, original_title.into());
    }

    pub fn set_creator(&mut self, creator: impl Into<String>) {
        self.creator = creator.into();
    }

    pub fn set_genres(&mut self, genres: &[String]) {
        self.genres = genres.to_vec();
    }

    pub fn set_release_year(&mut self, year: i32) {
        self.release_year = year;
    }

    pub fn set_end_year(&mut self, end_year: i32) {
        self.end_year = end_year;
    }

    pub fn set_where_to_watch(&mut self, platforms: &[String]) {
        self.where_to_watch = platforms.to_vec();
    }

    pub fn set_cast(&mut self, cast: &[String]) {
        self.cast = cast.to_vec();
    }

    pub fn set_watched_status(&mut self, watched: bool) {
        self.watched_status = watched;
    }
}

impl Media for Series {
    fn kind(&self) -> MediaKind {
        MediaKind::Series
    }

    fn id(&self) -> u64 {
        self.series_id
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
        &self.creator
    }

    fn is_consumed(&self) -> bool {
        self.watched_status
    }

    fn has_reviews(&self) -> bool {
        self.seasons.iter().any(Season::is_rated)
    }

    /// Mean of the rated seasons' own averages; unrated seasons are left out
    /// entirely. 0.0 when no season has a review.
    fn average_rating(&self) -> f64 {
        let rated: Vec<f64> = self
            .seasons
            .iter()
            .filter(|s| s.is_rated())
            .map(Season::average_rating)
            .collect();
        if rated.is_empty() {
            return 0.0;
        }
        rated.iter().sum::<f64>() / rated.len() as f64
    }
}
