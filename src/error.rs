//! Error types for the discussion board.

use thiserror::Error;

/// Common error type for discussion board operations.
#[derive(Error, Debug)]
pub enum DiscussionError {
    /// Validation error for caller input (blank author, blank message, blank board name).
    #[error("validation error: {0}")]
    Validation(String),

    /// Referenced entry or reply does not exist.
    #[error("{0} not found")]
    NotFound(String),

    /// Durable backend unavailable, or a stored board could not be decoded.
    #[error("storage error: {0}")]
    Storage(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<sqlx::Error> for DiscussionError {
    fn from(e: sqlx::Error) -> Self {
        DiscussionError::Storage(e.to_string())
    }
}

impl From<serde_json::Error> for DiscussionError {
    fn from(e: serde_json::Error) -> Self {
        DiscussionError::Storage(format!("corrupt board state: {e}"))
    }
}

/// Result type alias for discussion board operations.
pub type Result<T> = std::result::Result<T, DiscussionError>;
