//! Error type for webhook orchestration.

use thiserror::Error;

use crate::message::ValidationError;
use crate::rest::RestError;

/// Error type for webhook operations.
///
/// Collects the failure modes of constructing, composing, and executing a
/// webhook. None of these are fatal: the client and builder remain usable
/// for a new attempt after any of them.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// The string did not match the webhook URL pattern.
    ///
    /// Carries a reason rather than the rejected input, so a secret token
    /// embedded in a near-valid URL is never echoed back.
    #[error("invalid webhook URL: {0}")]
    InvalidUrl(String),

    /// A payload limit was violated locally, before any network traffic.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The remote exchange failed, either at the transport level or with a
    /// non-success status.
    #[error(transparent)]
    Rest(#[from] RestError),

    /// The payload could not be serialized to JSON.
    #[error("failed to serialize payload: {0}")]
    Json(#[from] serde_json::Error),
}
