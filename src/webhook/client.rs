//! Webhook client: ties identity to the REST executor.

use serde::Serialize;

use crate::rest::{HttpClient, HttpError, ReqwestClient, RestError, RestExecutor};

use super::{MessageBuilder, Webhook, WebhookError};

fn json_content_type() -> http::HeaderValue {
    http::HeaderValue::from_static("application/json; charset=utf-8")
}

/// A partial update to a webhook's settings.
///
/// Only the fields actually set are serialized, so a PATCH body contains
/// exactly the settings being changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SettingsPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    avatar: Option<String>,
}

impl SettingsPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a new default display name for the webhook.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets a new default avatar (image data URI) for the webhook.
    #[must_use]
    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }
}

/// An executable webhook.
///
/// Owns the immutable [`Webhook`] identity and a [`RestExecutor`], nothing
/// else, so independent clients can be used concurrently from separate
/// tasks. Every operation is one blocking-until-done round trip; success is
/// always `204 No Content`.
#[derive(Debug, Clone)]
pub struct WebhookClient<H = ReqwestClient> {
    webhook: Webhook,
    rest: RestExecutor<H>,
}

impl WebhookClient<ReqwestClient> {
    /// Creates a client over the production transport.
    #[must_use]
    pub fn new(webhook: Webhook) -> Self {
        Self::with_client(webhook, ReqwestClient::new())
    }

    /// Creates a client by parsing a full webhook URL.
    ///
    /// # Errors
    ///
    /// Returns [`WebhookError::InvalidUrl`] if the URL does not match the
    /// webhook URL pattern.
    pub fn from_url(url: &str) -> Result<Self, WebhookError> {
        Ok(Self::new(Webhook::from_url(url)?))
    }
}

impl<H: HttpClient> WebhookClient<H> {
    /// Creates a client over a caller-provided transport.
    ///
    /// Useful for injecting a configured `reqwest::Client` or a mock.
    pub const fn with_client(webhook: Webhook, client: H) -> Self {
        Self {
            webhook,
            rest: RestExecutor::new(client),
        }
    }

    /// Returns the webhook identity.
    #[must_use]
    pub const fn webhook(&self) -> &Webhook {
        &self.webhook
    }

    /// Starts composing a new message bound to this client.
    ///
    /// The client itself is not mutated; any number of builders may exist at
    /// once, one per in-flight message.
    #[must_use]
    pub fn builder(&self) -> MessageBuilder<'_, H> {
        MessageBuilder::new(self)
    }

    fn endpoint_url(&self) -> Result<url::Url, RestError> {
        url::Url::parse(&self.webhook.endpoint())
            .map_err(|e| HttpError::InvalidUrl(e.to_string()).into())
    }

    /// Sends an already-serialized JSON payload via POST.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Transport`] on network failure and
    /// [`RestError::RequestFailed`] for any status other than 204.
    pub async fn execute(&self, json_payload: &str) -> Result<(), RestError> {
        let url = self.endpoint_url()?;
        self.rest
            .execute(
                http::Method::POST,
                url,
                Some((json_payload.as_bytes().to_vec(), json_content_type())),
            )
            .await
    }

    /// Deletes this webhook on the platform.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Transport`] on network failure and
    /// [`RestError::RequestFailed`] for any status other than 204.
    pub async fn delete(&self) -> Result<(), RestError> {
        let url = self.endpoint_url()?;
        self.rest.execute(http::Method::DELETE, url, None).await
    }

    /// Updates the webhook's settings via PATCH.
    ///
    /// The body contains only the fields set on `patch`. Success is 204,
    /// the same as every other operation.
    ///
    /// # Errors
    ///
    /// Returns [`WebhookError::Json`] if the patch cannot be serialized and
    /// [`WebhookError::Rest`] for transport or protocol failures.
    pub async fn update_settings(&self, patch: &SettingsPatch) -> Result<(), WebhookError> {
        let body = serde_json::to_vec(patch)?;
        let url = self.endpoint_url()?;
        self.rest
            .execute(http::Method::PATCH, url, Some((body, json_content_type())))
            .await?;
        Ok(())
    }
}
