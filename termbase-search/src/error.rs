//! Search error types

use thiserror::Error;

/// Result type for search operations
pub type Result<T> = std::result::Result<T, SearchError>;

/// Search errors
#[derive(Error, Debug)]
pub enum SearchError {
    /// Query violated a precondition (empty, whitespace-only)
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// Underlying store failure
    #[error("Store error: {0}")]
    Store(#[from] termbase_store::StoreError),

    /// Backend-specific failure
    #[error("Backend error: {0}")]
    Backend(String),
}
