//! Dataset loading error types.

use std::path::PathBuf;

use crate::domain::DomainError;

/// Errors that can occur while loading the generated dataset.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// File could not be opened
    #[error("failed to open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A row could not be parsed
    #[error("malformed record in {origin}: {source}")]
    Csv {
        origin: String,
        #[source]
        source: csv::Error,
    },

    /// Rows parsed but do not form a valid airport table
    #[error("invalid airport data: {0}")]
    Domain(#[from] DomainError),
}
