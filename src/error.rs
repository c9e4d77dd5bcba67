//! Moderation error types

use thiserror::Error;

/// Error type for moderation operations
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Classification error
    #[error("Classification error: {0}")]
    Classification(String),

    /// Submitted content is empty or whitespace-only
    #[error("Content is empty")]
    EmptyContent,

    /// Content item lookup failed
    #[error("Content item not found: {0}")]
    ContentNotFound(String),

    /// User lookup failed
    #[error("User not found: {0}")]
    UserNotFound(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for moderation operations
pub type Result<T> = std::result::Result<T, Error>;
