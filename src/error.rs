// Error types for the retrieval core

use thiserror::Error;

/// Errors surfaced by retrieval operations.
///
/// Empty input and empty result sets are never errors in this crate; every
/// operation returns an empty value for them instead.
#[derive(Debug, Error)]
pub enum RagError {
    #[error("Request error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Remote index rejected batch {batch}: {status}")]
    BatchRejected {
        batch: usize,
        status: reqwest::StatusCode,
    },

    #[error("Invalid response from remote index: {0}")]
    InvalidResponse(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Result type for retrieval operations.
pub type RagResult<T> = Result<T, RagError>;
