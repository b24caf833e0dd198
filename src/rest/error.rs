//! Error types for the REST layer.

use thiserror::Error;

/// Error type for transport-level failures.
///
/// These occur before any HTTP status is available: the request never
/// produced a response. They are deliberately distinct from
/// [`RestError::RequestFailed`], which carries a response the remote service
/// actually sent.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// Covers DNS resolution failures, TLS handshake errors, connection
    /// refused, and resets mid-exchange.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The transport gave up waiting for a response.
    #[error("Request timed out")]
    Timeout,

    /// The request URL could not be used.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Error type for a failed REST call.
///
/// One logical call makes exactly one network attempt; whichever way it
/// fails, the caller sees it synchronously and nothing is retried.
#[derive(Debug, Error)]
pub enum RestError {
    /// The request never reached the point of an HTTP response.
    #[error(transparent)]
    Transport(#[from] HttpError),

    /// The remote service answered with something other than the expected
    /// success status.
    ///
    /// Carries the full response body so the caller can inspect the
    /// service's error detail (typically a JSON error object).
    #[error("Request failed with status {status} {status_text}: {body}")]
    RequestFailed {
        /// The HTTP status code received.
        status: http::StatusCode,
        /// Canonical reason phrase for the status (e.g. `"Bad Request"`).
        status_text: String,
        /// Full response body, decoded as UTF-8 (lossy).
        body: String,
    },
}

impl RestError {
    /// Returns the HTTP status code if the remote service responded.
    #[must_use]
    pub const fn status(&self) -> Option<http::StatusCode> {
        match self {
            Self::Transport(_) => None,
            Self::RequestFailed { status, .. } => Some(*status),
        }
    }
}
