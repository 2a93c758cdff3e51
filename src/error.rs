//! Error types for Postbox.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Common error type for Postbox.
#[derive(Error, Debug)]
pub enum PostboxError {
    /// A required field is missing or malformed.
    #[error("{0}")]
    InvalidInput(String),

    /// The username is already registered.
    #[error("{0}")]
    Conflict(String),

    /// Unknown account.
    #[error("{0}")]
    NotFound(String),

    /// Password digest mismatch.
    #[error("{0}")]
    Unauthorized(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl PostboxError {
    /// Shorthand for an `InvalidInput` error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        PostboxError::InvalidInput(message.into())
    }

    /// Shorthand for a `NotFound` error.
    pub fn not_found(message: impl Into<String>) -> Self {
        PostboxError::NotFound(message.into())
    }

    /// The client-facing kind of this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            PostboxError::InvalidInput(_) => ErrorCode::InvalidInput,
            PostboxError::Conflict(_) => ErrorCode::Conflict,
            PostboxError::NotFound(_) => ErrorCode::NotFound,
            PostboxError::Unauthorized(_) => ErrorCode::Unauthorized,
            PostboxError::Io(_) | PostboxError::Config(_) => ErrorCode::Internal,
        }
    }
}

/// Error kinds reported to clients alongside a failed response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Missing or malformed field.
    InvalidInput,
    /// Duplicate username.
    Conflict,
    /// Unknown account.
    NotFound,
    /// Wrong password digest.
    Unauthorized,
    /// Failure unrelated to the request.
    Internal,
}

/// Result type alias for Postbox operations.
pub type Result<T> = std::result::Result<T, PostboxError>;
