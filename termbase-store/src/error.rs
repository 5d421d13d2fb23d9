//! Error types for termbase-store

use thiserror::Error;

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, StoreError>;

/// Storage error type
#[derive(Error, Debug)]
pub enum StoreError {
    /// Physical storage failure (lock poisoning, backend fault)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Transaction could not be committed; no statements were written
    #[error("Transaction error: {0}")]
    Transaction(String),

    /// Malformed statement rejected before write
    #[error("Invalid statement: {0}")]
    InvalidStatement(String),

    /// Requested context does not exist
    #[error("Not found: {0}")]
    NotFound(String),
}

impl StoreError {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        StoreError::Storage(msg.into())
    }

    /// Create a transaction error
    pub fn transaction(msg: impl Into<String>) -> Self {
        StoreError::Transaction(msg.into())
    }

    /// Create an invalid-statement error
    pub fn invalid_statement(msg: impl Into<String>) -> Self {
        StoreError::InvalidStatement(msg.into())
    }

    /// Create a not-found error
    pub fn not_found(msg: impl Into<String>) -> Self {
        StoreError::NotFound(msg.into())
    }
}
