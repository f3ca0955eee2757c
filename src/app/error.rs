use std::path::PathBuf;
use thiserror::Error;

/// Reasons a path is left out of a collection, or the output could not be saved.
///
/// None of these abort a run; they are gathered in `Collection::failures`.
#[derive(Debug, Error)]
pub enum CollectError {
    #[error("Invalid or nonexistent path: {0}")]
    NotFound(String),

    #[error("Failed to read file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("File content for {0} is not valid UTF-8")]
    InvalidUtf8(String),

    #[error("Error walking entry: {0}")]
    Walk(#[from] ignore::Error),

    #[error("Failed to serialize JSON: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to save JSON to {path:?}: {source}")]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
