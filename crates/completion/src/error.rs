//! Completion error types.

use thiserror::Error;

/// Result type for completion operations.
pub type CompletionResult<T> = Result<T, CompletionError>;

/// Errors that can occur while asking the upstream model for a file.
#[derive(Debug, Error)]
pub enum CompletionError {
    /// No API key was supplied.
    #[error("missing API key")]
    MissingApiKey,

    /// HTTP request failed before a response arrived.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Upstream answered with a non-success status.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Response body was not a chat-completion object.
    #[error("invalid response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Response carried no usable text.
    #[error("completion not generated")]
    EmptyCompletion,
}

impl CompletionError {
    /// Create an API error.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }
}
