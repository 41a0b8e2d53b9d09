//! Error types for board I/O operations.

use std::path::PathBuf;

/// Result type alias for board I/O operations.
pub type Result<T> = std::result::Result<T, IoError>;

/// Error type for remote and local board loading.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Generic I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Transport-level HTTP failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("API error {status}: {body}")]
    Api {
        /// HTTP status code of the response.
        status: u16,
        /// Response body text, for the user-facing notification.
        body: String,
    },

    /// Remote operations require an API key
    #[error("API key is required")]
    MissingApiKey,

    /// Board fetch requires a board id
    #[error("board id is required")]
    MissingBoardId,

    /// The board folder does not exist
    #[error("folder not found: {0}")]
    FolderNotFound(PathBuf),

    /// No board document found in the folder
    #[error("no .json board file found in {0}")]
    NoBoardFile(PathBuf),

    /// The response or file was not a valid board document
    #[error(transparent)]
    Core(#[from] boardflow_core::CoreError),
}
