pub mod error;
pub mod id_allocator;
pub mod library;
pub mod query;
pub mod store;

pub use error::{CatalogError, PersistenceError};
pub use id_allocator::IdAllocator;
pub use library::{count_by_kind, Library};
pub use query::{FilterStage, Listing, ListingFilter, ListingQuery, SortOrder};
pub use store::{CatalogStore, Record, Reviewable};
