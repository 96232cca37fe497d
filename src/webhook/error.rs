//! Transport error type.

use thiserror::Error;

/// Why an outbound webhook call did not produce a response.
///
/// Every variant is terminal for the dispatch attempt that produced it.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed (DNS, refused, reset, TLS).
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The server did not respond in time.
    #[error("Request timed out")]
    Timeout,

    /// The request could not be built for the given URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}
