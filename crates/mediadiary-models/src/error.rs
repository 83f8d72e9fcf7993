use thiserror::Error;

/// Rejected input. Never leaves stored state half-modified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("rating {0} is outside the allowed range 0-5")]
    RatingOutOfRange(i64),

    #[error("year {year} is outside the allowed range {min}-{max}")]
    YearOutOfRange { year: i32, min: i32, max: i32 },

    #[error("{0} must not be blank")]
    BlankField(&'static str),

    #[error("unknown sort option {0} (expected 0, 1 or 2)")]
    InvalidSortOption(i64),
}
