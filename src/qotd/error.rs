//! Error types for question-of-the-day generation.

use thiserror::Error;

/// Errors that can occur while generating questions.
#[derive(Debug, Error)]
pub enum QotdError {
    /// `location` or `date` was not supplied.
    #[error("Missing location or date")]
    MissingParams,

    /// No provider API key configured.
    #[error("API key required for {0}")]
    ApiKeyRequired(String),

    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// Provider answered with a non-success status.
    #[error("model provider returned status {status}: {body}")]
    UpstreamStatus {
        /// HTTP status code.
        status: u16,
        /// Response body, for the logs.
        body: String,
    },

    /// Provider answered without any message content.
    #[error("model returned no content")]
    EmptyResponse,

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenience result alias for question generation.
pub type QotdResult<T> = Result<T, QotdError>;
