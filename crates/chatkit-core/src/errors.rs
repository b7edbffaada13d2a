//! Error types for the Chatkit SDK.
//!
//! Upstream business failures (for example "user not found") are *not*
//! errors: they come back as an [`ApiResponse`](crate::ApiResponse) whose
//! status and error code mirror the upstream reply. [`ChatkitError`] covers
//! the cases where no envelope can be produced at all.

use std::error::Error as StdError;

type BoxError = Box<dyn StdError + Send + Sync>;

/// Errors surfaced by the SDK.
#[derive(Debug, thiserror::Error)]
pub enum ChatkitError {
    /// Malformed instance locator, key, or lifetime at construction time.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A required operation argument was missing or empty.
    #[error("Validation error: you must provide a {field}")]
    Validation { field: String },

    /// The underlying HTTP call failed (timeout, refused connection, DNS).
    #[error("Transport error: {0}")]
    Transport(#[source] BoxError),

    /// The upstream body could not be interpreted as an object or array.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Token encoding or verification failed.
    #[error("Token error: {0}")]
    Token(String),
}

impl ChatkitError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    pub fn validation(field: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
        }
    }

    pub fn transport<E>(err: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self::Transport(err.into())
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse(message.into())
    }

    pub fn token(message: impl Into<String>) -> Self {
        Self::Token(message.into())
    }

    /// Returns `true` for errors raised before any network attempt.
    pub fn is_client_side(&self) -> bool {
        matches!(self, Self::Configuration(_) | Self::Validation { .. })
    }
}

impl From<serde_json::Error> for ChatkitError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedResponse(err.to_string())
    }
}
