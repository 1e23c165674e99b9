//! Error types for parsing field configuration.

use thiserror::Error;

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors raised while loading field configuration.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The configuration was not valid JSON, or carried an unrecognized key.
    #[error("invalid field configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// A field was declared with an empty name.
    #[error("field at index {index} has an empty name")]
    EmptyFieldName { index: usize },
}
