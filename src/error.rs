use std::path::PathBuf;

use crate::catalog::ItemId;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors of the outer surface (catalog loading, configuration, CLI).
/// The ranking engine itself is infallible.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate item id in catalog: {0}")]
    DuplicateId(ItemId),

    #[error("item not found: {0}")]
    NotFound(ItemId),

    #[error("configuration error: {0}")]
    Config(String),
}
