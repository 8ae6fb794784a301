//! Error types for the procurement store.

use thiserror::Error;

/// Errors that can occur while reading or writing the record collection.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Storage exists but could not be read
    #[error("failed to read procurement data: {0}")]
    Read(#[source] std::io::Error),

    /// Storage content is not a valid record collection
    #[error("failed to parse procurement data: {0}")]
    Parse(#[from] serde_json::Error),

    /// Write to storage failed
    #[error("failed to write procurement data: {0}")]
    Write(#[source] std::io::Error),
}

/// Result type for store operations
pub type Result<T> = std::result::Result<T, StoreError>;
