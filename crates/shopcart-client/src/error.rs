//! Internal error types for shopcart API operations.
//!
//! These errors are internal to `shopcart-client` and are mapped to core
//! port errors at the boundary.

use thiserror::Error;

/// Result type alias for shopcart client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors related to shopcart API operations.
#[derive(Debug, Error)]
pub enum ClientError {
    /// API request failed with an HTTP error status.
    ///
    /// `message` is the server's own error message when the body carried
    /// one, otherwise the canonical reason for the status.
    #[error("shopcart API request failed with status {status}: {message}")]
    ApiRequestFailed {
        /// HTTP status code
        status: u16,
        /// Server-provided error message (or status fallback)
        message: String,
        /// The URL that was requested
        url: String,
    },

    /// API returned an invalid or unexpected response.
    #[error("Invalid response from shopcart API: {message}")]
    InvalidResponse {
        /// Description of what was invalid
        message: String,
    },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}
