//! Annotation client error types.
//!
//! None of these reach the caller of [`crate::Annotator`]; the façade logs
//! them and substitutes a fallback.

use thiserror::Error;

/// Errors that can occur when calling the generative-AI backend.
#[derive(Debug, Error)]
pub enum AnnotateError {
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

    /// The response body could not be interpreted.
    #[error("parse error: {0}")]
    Parse(String),

    /// The model returned no text.
    #[error("empty response")]
    EmptyResponse,

    /// No API key is configured.
    #[error("generative backend is not configured")]
    NotConfigured,
}
