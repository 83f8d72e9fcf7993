pub mod book;
pub mod error;
pub mod media;
pub mod movie;
pub mod review;
pub mod series;

pub use book::{Book, NewBook};
pub use error::ValidationError;
pub use media::{Media, MediaItem, MediaKind, YearBounds};
pub use movie::{Movie, NewMovie};
pub use review::{Rating, Review, ReviewInfo, MAX_RATING, MIN_RATING};
pub use series::{NewSeries, Season, Series};
