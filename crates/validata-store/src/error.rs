//! Store error types.

use std::path::PathBuf;

use thiserror::Error;

/// Store operation error.
#[derive(Debug, Error)]
pub enum StoreError {
    /// File I/O error, tagged with the operation that failed.
    #[error("failed to {operation}: {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No dataset with this identifier in the store.
    #[error("unknown dataset id: {0}")]
    UnknownDataset(u64),

    /// A stored file failed to parse.
    #[error("corrupt store file: {path}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, StoreError>;
