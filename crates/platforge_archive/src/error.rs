//! Error types for archive packaging.

use thiserror::Error;

/// Result type alias for archive operations.
pub type ArchiveResult<T> = Result<T, ArchiveError>;

/// Errors that can occur while packing generated files.
#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("Failed to add archive entry {path}: {source}")]
    Entry {
        path: String,
        #[source]
        source: zip::result::ZipError,
    },

    #[error("Failed to finalize archive: {0}")]
    Finalize(#[from] zip::result::ZipError),
}
