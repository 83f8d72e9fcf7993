use mediadiary_models::{MediaKind, ValidationError};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// A catalog file could not be read or written. Never fatal: loads fall back to an
/// empty catalog and a failed save keeps the in-memory change.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize catalog for {path:?}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to create directory {path:?}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{path:?} holds an id too large to continue numbering from")]
    IdsExhausted { path: PathBuf },
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    #[error("no {kind} with id {id}")]
    NotFound { kind: MediaKind, id: u64 },

    #[error("series {series_id} has no season {season_number}")]
    SeasonNotFound { series_id: u64, season_number: u32 },

    #[error("{kind} entries are not reviewed directly")]
    NotReviewable { kind: MediaKind },

    #[error("no {kind} ids left to assign")]
    IdsExhausted { kind: MediaKind },
}

impl CatalogError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NotFound { .. } | CatalogError::SeasonNotFound { .. })
    }
}
