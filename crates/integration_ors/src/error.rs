//! OpenRouteService error types

use thiserror::Error;

/// Errors that can occur while talking to OpenRouteService
#[derive(Debug, Error)]
pub enum OrsError {
    /// Connection to the service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// HTTP request failed without a usable error body
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// The service answered with an error status and message
    #[error("HTTP {status}: {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Message taken from the error body
        message: String,
    },

    /// Failed to parse the response
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded, retry after {retry_after_secs:?} seconds")]
    RateLimitExceeded {
        /// Seconds to wait before retrying (if provided by API)
        retry_after_secs: Option<u64>,
    },

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// The request was rejected before sending because it cannot match anything
    #[error("Not found: {0}")]
    NotFound(String),
}
