//! World Bank client error types.

use thiserror::Error;

/// Errors that can occur when fetching from the World Bank API.
#[derive(Debug, Error)]
pub enum WorldBankError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the API.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The API returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// The API answered with its own error message instead of data.
    #[error("request rejected by World Bank API: {0}")]
    Rejected(String),

    /// The response was not the `[metadata, records]` envelope.
    #[error("unexpected response shape: {0}")]
    UnexpectedShape(String),

    /// Records inside the envelope could not be decoded.
    #[error("parse error: {0}")]
    Parse(String),

    /// A concurrent batch task panicked or was cancelled.
    #[error("batch task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
