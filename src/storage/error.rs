//! Error types for the persistence layer.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Persistence error type.
#[derive(Debug, Error)]
pub enum StorageError {
    /// No platform data directory could be determined.
    #[error("Failed to determine the data directory")]
    DataDirNotFound,

    /// Failed to create the storage directory.
    #[error("Failed to create directory {path:?}: {source}")]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Failed to read a stored record.
    #[error("Failed to read record '{key}': {source}")]
    Read {
        key: String,
        #[source]
        source: io::Error,
    },

    /// Failed to write a stored record.
    #[error("Failed to write record '{key}': {source}")]
    Write {
        key: String,
        #[source]
        source: io::Error,
    },

    /// Failed to serialize a record.
    #[error("Failed to serialize record '{key}': {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// The store rejected a write (in-memory store configured to fail).
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Result type for persistence operations.
pub type Result<T> = std::result::Result<T, StorageError>;
