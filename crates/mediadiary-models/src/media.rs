use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use crate::error::ValidationError;
use crate::{Book, Movie, Series};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Book,
    Movie,
    Series,
}

impl MediaKind {
    pub const ALL: [MediaKind; 3] = [MediaKind::Book, MediaKind::Movie, MediaKind::Series];

    /// Stem of the catalog file this kind is persisted to (`books` -> `books.json`).
    pub fn file_stem(self) -> &'static str {
        match self {
            MediaKind::Book => "books",
            MediaKind::Movie => "movies",
            MediaKind::Series => "series",
        }
    }

    /// Label for the creator field of this kind.
    pub fn creator_label(self) -> &'static str {
        match self {
            MediaKind::Book => "Author",
            MediaKind::Movie => "Director",
            MediaKind::Series => "Creator",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MediaKind::Book => "book",
            MediaKind::Movie => "movie",
            MediaKind::Series => "series",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for MediaKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "book" | "books" => Ok(MediaKind::Book),
            "movie" | "movies" | "film" => Ok(MediaKind::Movie),
            "series" | "show" | "shows" => Ok(MediaKind::Series),
            other => Err(format!("Unknown media kind: {}. Use 'book', 'movie' or 'series'", other)),
        }
    }
}

/// Inclusive range of acceptable release years.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearBounds {
    pub min: i32,
    pub max: i32,
}

impl YearBounds {
    pub fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// `min_year` up to the current year plus `years_ahead`.
    pub fn relative_to_now(min_year: i32, years_ahead: i32) -> Self {
        Self::new(min_year, Utc::now().year() + years_ahead)
    }

    pub fn check(&self, year: i32) -> Result<(), ValidationError> {
        if year < self.min || year > self.max {
            return Err(ValidationError::YearOutOfRange {
                year,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

impl Default for YearBounds {
    fn default() -> Self {
        Self::relative_to_now(0, 5)
    }
}

/// Capabilities shared by every catalog item, used by search, filters and sorting.
pub trait Media {
    fn kind(&self) -> MediaKind;

    /// Per-kind identifier (book id, movie id or series id).
    fn id(&self) -> u64;

    fn title(&self) -> &str;

    fn original_title(&self) -> &str;

    fn genres(&self) -> &[String];

    fn release_year(&self) -> i32;

    /// Author, director or creator depending on the kind.
    fn creator_name(&self) -> &str;

    fn isbn(&self) -> Option<&str> {
        None
    }

    /// Read (books) or watched (movies, series).
    fn is_consumed(&self) -> bool;

    fn has_reviews(&self) -> bool;

    fn average_rating(&self) -> f64;

    /// Required fields present and release year within bounds.
    fn validate(&self, bounds: &YearBounds) -> Result<(), ValidationError> {
        if self.title().trim().is_empty() {
            return Err(ValidationError::BlankField("title"));
        }
        bounds.check(self.release_year())
    }
}

/// A blank original title falls back to the title.
pub(crate) fn original_or_title(title: &str, original_title: String) -> String {
    if original_title.trim().is_empty() {
        title.to_string()
    } else {
        original_title
    }
}

/// Any catalog item, for cross-catalog listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MediaItem {
    Book(Book),
    Movie(Movie),
    Series(Series),
}

macro_rules! dispatch {
    ($self:ident, $item:ident => $body:expr) => {
        match $self {
            MediaItem::Book($item) => $body,
            MediaItem::Movie($item) => $body,
            MediaItem::Series($item) => $body,
        }
    };
}

impl Media for MediaItem {
    fn kind(&self) -> MediaKind {
        dispatch!(self, m => m.kind())
    }

    fn id(&self) -> u64 {
        dispatch!(self, m => m.id())
    }

    fn title(&self) -> &str {
        dispatch!(self, m => m.title())
    }

    fn original_title(&self) -> &str {
        dispatch!(self, m => m.original_title())
    }

    fn genres(&self) -> &[String] {
        dispatch!(self, m => m.genres())
    }

    fn release_year(&self) -> i32 {
        dispatch!(self, m => m.release_year())
    }

    fn creator_name(&self) -> &str {
        dispatch!(self, m => m.creator_name())
    }

    fn isbn(&self) -> Option<&str> {
        dispatch!(self, m => m.isbn())
    }

    fn is_consumed(&self) -> bool {
        dispatch!(self, m => m.is_consumed())
    }

    fn has_reviews(&self) -> bool {
        dispatch!(self, m => m.has_reviews())
    }

    fn average_rating(&self) -> f64 {
        dispatch!(self, m => m.average_rating())
    }
}

impl From<Book> for MediaItem {
    fn from(book: Book) -> Self {
        MediaItem::Book(book)
    }
}

impl From<Movie> for MediaItem {
    fn from(movie: Movie) -> Self {
        MediaItem::Movie(movie)
    }
}

impl From<Series> for MediaItem {
    fn from(series: Series) -> Self {
        MediaItem::Series(series)
    }
}
