//! Error types for the core domain model.

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Error type for model construction.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The board document could not be deserialized.
    #[error("malformed board document: {0}")]
    Document(#[from] serde_json::Error),
}
