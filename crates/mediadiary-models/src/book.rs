use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::error::ValidationError;
use crate::media::{original_or_title, Media, MediaKind};
use crate::review::ReviewInfo;

/// Everything needed to create a [`Book`] except its id.
#[derive(Debug, Clone, Default)]
pub struct NewBook {
    pub title: String,
    pub original_title: String,
    pub genres: Vec<String>,
    pub release_year: i32,
    pub author: String,
    pub publisher: String,
    pub isbn: String,
    pub has_copy: bool,
    pub read_status: bool,
    pub read_date: Option<NaiveDate>,
    pub review_info: ReviewInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    book_id: u64,
    title: String,
    #[serde(default)]
    original_title: String,
    #[serde(default)]
    genres: Vec<String>,
    #[serde(default)]
    release_year: i32,
    #[serde(default)]
    author: String,
    #[serde(default)]
    publisher: String,
    #[serde(default)]
    isbn: String,
    #[serde(default)]
    has_copy: bool,
    #[serde(default)]
    read_status: bool,
    #[serde(default)]
    read_date: Option<NaiveDate>,
    #[serde(default)]
    review_info: ReviewInfo,
}

impl Book {
    pub fn new(book_id: u64, draft: NewBook) -> Self {
        let original_title = original_or_title(&draft.title, draft.original_title);
        Self {
            book_id,
            title: draft.title,
            original_title,
            genres: draft.genres,
            release_year: draft.release_year,
            author: draft.author,
            publisher: draft.publisher,
            isbn: draft.isbn,
            has_copy: draft.has_copy,
            read_status: draft.read_status,
            read_date: draft.read_date,
            review_info: draft.review_info,
        }
    }

    pub fn book_id(&self) -> u64 {
        self.book_id
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn publisher(&self) -> &str {
        &self.publisher
    }

    pub fn has_copy(&self) -> bool {
        self.has_copy
    }

    pub fn read_status(&self) -> bool {
        self.read_status
    }

    pub fn read_date(&self) -> Option<NaiveDate> {
        self.read_date
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

    /// Stores a copy; later changes to `genres` on the caller's side are not seen.
    pub fn set_genres(&mut self, genres: &[String]) {
        self.genres = genres.to_vec();
    }

    pub fn set_release_year(&mut self, year: i32) {
        self.release_year = year;
    }

    pub fn set_author(&mut self, author: impl Into<String>) {
        self.author = author.into();
    }

    pub fn set_publisher(&mut self, publisher: impl Into<String>) {
        self.publisher = publisher.into();
    }

    pub fn set_isbn(&mut self, isbn: impl Into<String>) {
        self.isbn = isbn.into();
    }

    pub fn set_has_copy(&mut self, has_copy: bool) {
        self.has_copy = has_copy;
    }

    pub fn set_read_status(&mut self, read_status: bool) {
        self.read_status = read_status;
    }

    pub fn set_read_date(&mut self, read_date: Option<NaiveDate>) {
        self.read_date = read_date;
    }

    pub fn add_review(&mut self, rating: i64, comment: impl Into<String>) -> Result<(), ValidationError> {
        self.review_info.add_review(rating, comment)
    }
}

impl Media for Book {
    fn kind(&self) -> MediaKind {
        MediaKind::Book
    }

    fn id(&self) -> u64 {
        self.book_id
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
        &self.author
    }

    fn isbn(&self) -> Option<&str> {
        Some(&self.isbn)
    }

    fn is_consumed(&self) -> bool {
        self.read_status
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

    fn orient_express() -> Book {
        Book::new(
            1,
            NewBook {
                title: "Assassinato no Expresso do Oriente".to_string(),
                original_title: "Murder on the Orient Express".to_string(),
                genres: vec!["Mystery".to_string(), "Crime".to_string()],
                release_year: 1934,
                author: "Agatha Christie".to_string(),
                publisher: "HarperCollins".to_string(),
                isbn: "978-8595081637".to_string(),
                has_copy: true,
                read_status: true,
                read_date: NaiveDate::from_ymd_opt(2024, 3, 2),
                review_info: ReviewInfo::new(),
            },
        )
    }

    #[test]
    fn test_book_creation() {
        let book = orient_express();
        assert_eq!(book.book_id(), 1);
        assert_eq!(book.title(), "Assassinato no Expresso do Oriente");
        assert_eq!(book.original_title(), "Murder on the Orient Express");
        assert_eq!(book.creator_name(), "Agatha Christie");
        assert_eq!(book.isbn(), Some("978-8595081637"));
        assert!(book.has_copy());
        assert!(book.is_consumed());
        assert_eq!(book.review_info().review_count(), 0);
    }

    #[test]
    fn test_blank_original_title_defaults_to_title() {
        let book = Book::new(
            2,
            NewBook {
                title: "1984".to_string(),
                release_year: 1949,
                ..NewBook::default()
            },
        );
        assert_eq!(book.original_title(), "1984");
    }

    #[test]
    fn test_setters() {
        let mut book = orient_express();
        book.set_author("Dame Agatha Christie");
        book.set_read_status(false);
        book.set_has_copy(false);
        book.set_isbn("1234567890");
        book.set_publisher("Another Publisher");
        book.set_original_title("");

        assert_eq!(book.author(), "Dame Agatha Christie");
        assert!(!book.read_status());
        assert!(!book.has_copy());
        assert_eq!(book.isbn(), Some("1234567890"));
        assert_eq!(book.publisher(), "Another Publisher");
        assert_eq!(book.original_title(), book.title());
    }

    #[test]
    fn test_genres_are_copied_on_set() {
        let mut book = orient_express();
        let mut genres = vec!["Classic".to_string()];
        book.set_genres(&genres);
        genres.push("Thriller".to_string());

        assert_eq!(book.genres(), ["Classic".to_string()]);

        let mut snapshot = book.genres().to_vec();
        snapshot.clear();
        assert_eq!(book.genres().len(), 1);
    }

    #[test]
    fn test_add_review_to_book() {
        let mut book = orient_express();
        book.add_review(4, "Classic mystery").unwrap();
        book.add_review(5, "Holds up on a reread").unwrap();

        assert_eq!(book.review_info().review_count(), 2);
        assert!((book.average_rating() - 4.5).abs() < 1e-9);
        assert_eq!(book.review_info().last_rating(), Some(5));
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let json = r#"{
            "bookId": 7,
            "title": "Dune",
            "releaseYear": 1965,
            "author": "Frank Herbert",
            "readDate": "2023-08-14",
            "shelf": "sci-fi"
        }"#;
        let book: Book = serde_json::from_str(json).unwrap();
        assert_eq!(book.id(), 7);
        assert_eq!(book.read_date(), NaiveDate::from_ymd_opt(2023, 8, 14));
        assert!(book.genres().is_empty());
        assert!(!book.has_reviews());
    }
}
