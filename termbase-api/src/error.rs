//! Domain-layer error types

use thiserror::Error;

/// Result type for domain operations
pub type Result<T> = std::result::Result<T, ApiError>;

/// Domain errors.
///
/// Every failure a caller can see is one of these kinds; the REST layer (not
/// part of this workspace) maps each kind to a client-facing status. No
/// retries happen at this level.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Argument/precondition violation (missing input, ambiguous payload)
    #[error("Invalid argument: {0}")]
    Validation(String),

    /// Requested media type or file extension has no registered codec
    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    /// An import input stream could not be read
    #[error("Import failed reading input: {0}")]
    ImportIo(#[from] std::io::Error),

    /// An import payload could not be parsed
    #[error("Import failed parsing input: {0}")]
    ImportParse(#[from] termbase_graph_turtle::TurtleError),

    /// Store failure (commit during import, query during export)
    #[error("Persistence error: {0}")]
    Persistence(#[from] termbase_store::StoreError),

    /// Search backend failure
    #[error("Search error: {0}")]
    Search(#[from] termbase_search::SearchError),

    /// Export serialization failure
    #[error("Export error: {0}")]
    Export(String),
}

impl ApiError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        ApiError::Validation(msg.into())
    }

    /// Create an unsupported-media-type error
    pub fn unsupported_media_type(msg: impl Into<String>) -> Self {
        ApiError::UnsupportedMediaType(msg.into())
    }
}
