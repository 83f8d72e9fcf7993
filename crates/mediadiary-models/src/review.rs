use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::error::ValidationError;

pub const MIN_RATING: u8 = 0;
pub const MAX_RATING: u8 = 5;

/// A score on the 0-5 scale. Out-of-range values are rejected, never clamped,
/// including when read back from disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        Self::try_from(value)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Rating {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value < MIN_RATING as i64 || value > MAX_RATING as i64 {
            return Err(ValidationError::RatingOutOfRange(value));
        }
        Ok(Self(value as u8))
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

/// One rating plus comment. Immutable once appended to a [`ReviewInfo`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    rating: Rating,
    #[serde(default)]
    comment: String,
    created_at: DateTime<Utc>,
}

impl Review {
    pub fn rating(&self) -> u8 {
        self.rating.value()
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Informational only; insertion order decides which review is the latest.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Append-only review history for one entity, with derived statistics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReviewInfo {
    #[serde(default)]
    reviews: Vec<Review>,
}

impl ReviewInfo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a review stamped with the current time.
    pub fn add_review(&mut self, rating: i64, comment: impl Into<String>) -> Result<(), ValidationError> {
        let rating = Rating::new(rating)?;
        self.reviews.push(Review {
            rating,
            comment: comment.into(),
            created_at: Utc::now(),
        });
        Ok(())
    }

    /// Reviews in the order they were appended.
    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    pub fn review_count(&self) -> usize {
        self.reviews.len()
    }

    pub fn has_reviews(&self) -> bool {
        !self.reviews.is_empty()
    }

    /// Arithmetic mean of every rating, or exactly 0.0 when there are none.
    pub fn average_rating(&self) -> f64 {
        if self.reviews.is_empty() {
            return 0.0;
        }
        let total: u32 = self.reviews.iter().map(|r| r.rating() as u32).sum();
        total as f64 / self.reviews.len() as f64
    }

    /// Rating of the most recently appended review.
    pub fn last_rating(&self) -> Option<u8> {
        self.reviews.last().map(Review::rating)
    }

    /// Most recent first, optionally capped at `limit` entries.
    pub fn history(&self, limit: Option<usize>) -> Vec<&Review> {
        let newest_first = self.reviews.iter().rev();
        match limit {
            Some(n) => newest_first.take(n).collect(),
            None => newest_first.collect(),
        }
    }
}
