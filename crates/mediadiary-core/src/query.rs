// Search, listing filters and rating-based ordering over any `Media` slice.

use mediadiary_models::{Media, ValidationError};
use std::cmp::Ordering;
use std::str::FromStr;
use tracing::{debug, info};

/// Case-insensitive substring search over title, original title, creator,
/// ISBN (books), genres and release year. Blank criteria return everything.
pub fn search<T>(items: &[T], criteria: &str) -> Vec<T>
where
    T: Media + Clone,
{
    let needle = criteria.trim().to_lowercase();
    if needle.is_empty() {
        return items.to_vec();
    }

    let results: Vec<T> = items
        .iter()
        .filter(|item| matches_criteria(*item, &needle))
        .cloned()
        .collect();
    debug!("search '{}': {} of {} entries matched", needle, results.len(), items.len());
    results
}

/// `needle` must already be lowercase.
pub fn matches_criteria<T: Media + ?Sized>(item: &T, needle: &str) -> bool {
    contains_ci(item.title(), needle)
        || contains_ci(item.original_title(), needle)
        || contains_ci(item.creator_name(), needle)
        || item.isbn().map_or(false, |isbn| contains_ci(isbn, needle))
        || item.genres().iter().any(|g| contains_ci(g, needle))
        || item.release_year().to_string().contains(needle)
}

fn contains_ci(haystack: &str, lower_needle: &str) -> bool {
    haystack.to_lowercase().contains(lower_needle)
}

/// Exact case-insensitive title match, then the same on the original title.
pub fn find_by_title<T>(items: &[T], title: &str) -> Option<T>
where
    T: Media + Clone,
{
    let wanted = title.trim().to_lowercase();
    if wanted.is_empty() {
        return None;
    }
    items
        .iter()
        .find(|item| item.title().to_lowercase() == wanted)
        .or_else(|| items.iter().find(|item| item.original_title().to_lowercase() == wanted))
        .cloned()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Catalog insertion order.
    #[default]
    Insertion,
    /// Highest average first; unrated or unconsumed entries last.
    BestFirst,
    /// Unrated or unconsumed entries first, then lowest average first.
    WorstFirst,
}

impl TryFrom<i64> for SortOrder {
    type Error = ValidationError;

    fn try_from(option: i64) -> Result<Self, Self::Error> {
        match option {
            0 => Ok(SortOrder::Insertion),
            1 => Ok(SortOrder::BestFirst),
            2 => Ok(SortOrder::WorstFirst),
            other => Err(ValidationError::InvalidSortOption(other)),
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "0" | "none" | "insertion" => Ok(SortOrder::Insertion),
            "1" | "best" | "best-first" => Ok(SortOrder::BestFirst),
            "2" | "worst" | "worst-first" => Ok(SortOrder::WorstFirst),
            other => Err(format!("Invalid sort order: {}. Use 'none', 'best' or 'worst'", other)),
        }
    }
}

/// Average rating of entries that were consumed and reviewed; `None` otherwise.
fn rating_rank<T: Media>(item: &T) -> Option<f64> {
    if item.is_consumed() && item.has_reviews() {
        Some(item.average_rating())
    } else {
        None
    }
}

/// Stable sort by rating. Entries without a rank never land among the rated ones:
/// they sink below the best in `BestFirst` and sit above the worst in `WorstFirst`.
pub fn sort_by_rating<T: Media>(mut items: Vec<T>, order: SortOrder) -> Vec<T> {
    match order {
        SortOrder::Insertion => {}
        SortOrder::BestFirst => {
            items.sort_by(|a, b| {
                let a = rating_rank(a).unwrap_or(-1.0);
                let b = rating_rank(b).unwrap_or(-1.0);
                b.total_cmp(&a)
            });
        }
        SortOrder::WorstFirst => {
            items.sort_by(|a, b| match (rating_rank(a), rating_rank(b)) {
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Less,
                (Some(_), None) => Ordering::Greater,
                (Some(a), Some(b)) => a.total_cmp(&b),
            });
        }
    }
    items
}

/// Optional genre and year filters for listings. A blank genre or a year of 0
/// disables that filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingFilter {
    pub genre: Option<String>,
    pub year: Option<i32>,
}

impl ListingFilter {
    fn genre_term(&self) -> Option<String> {
        self.genre
            .as_deref()
            .map(|g| g.trim().to_lowercase())
            .filter(|g| !g.is_empty())
    }

    fn year_value(&self) -> Option<i32> {
        self.year.filter(|y| *y != 0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingQuery {
    pub filter: ListingFilter,
    pub sort: SortOrder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterStage {
    Genre,
    Year,
}

#[derive(Debug, Clone)]
pub struct Listing<T> {
    pub items: Vec<T>,
    /// First filter stage that left nothing behind.
    pub emptied_at: Option<FilterStage>,
    /// True when any filter or a non-insertion sort was applied.
    pub narrowed: bool,
}

/// Genre filter, then year filter, then sort. Each stage sees the previous
/// stage's output even when that output is empty.
pub fn list<T>(items: &[T], query: &ListingQuery) -> Listing<T>
where
    T: Media + Clone,
{
    let mut current = items.to_vec();
    let mut emptied_at = None;
    let mut narrowed = query.sort != SortOrder::Insertion;

    if let Some(genre) = query.filter.genre_term() {
        narrowed = true;
        current.retain(|item| item.genres().iter().any(|g| contains_ci(g, &genre)));
        if current.is_empty() {
            info!("No entries found for genre '{}'", genre);
            emptied_at.get_or_insert(FilterStage::Genre);
        }
    }

    if let Some(year) = query.filter.year_value() {
        narrowed = true;
        current.retain(|item| item.release_year() == year);
        if current.is_empty() {
            info!("No entries found for year {}", year);
            emptied_at.get_or_insert(FilterStage::Year);
        }
    }

    Listing {
        items: sort_by_rating(current, query.sort),
        emptied_at,
        narrowed,
    }
}
