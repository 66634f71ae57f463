//! Error types for model serialization.

/// Error type for parsing and producing model types.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// Error parsing or producing JSON
    #[error("Failed to process JSON: {0}")]
    JsonError(#[from] serde_json::Error),
}
