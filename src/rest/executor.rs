//! One-shot REST executor with typed failure classification.

use tracing::{debug, warn};

use super::{HttpClient, HttpRequest, RestError};

/// Fixed identifying user-agent sent with every request.
pub const USER_AGENT: &str = concat!("discord-webhook/", env!("CARGO_PKG_VERSION"));

/// Executes single REST requests against a transport.
///
/// Generic over the payload being sent: input is method, URL, and optional
/// body bytes with their declared content type. Success is exactly
/// `204 No Content`; every other status, other 2xx codes included, is a
/// [`RestError::RequestFailed`] carrying the full response body. One logical
/// call is exactly one network attempt.
#[derive(Debug, Clone)]
pub struct RestExecutor<H> {
    client: H,
}

impl<H> RestExecutor<H> {
    /// Creates an executor over the given transport.
    pub const fn new(client: H) -> Self {
        Self { client }
    }

    /// Returns the underlying transport.
    pub const fn client(&self) -> &H {
        &self.client
    }
}

impl<H: HttpClient> RestExecutor<H> {
    /// Sends one request and classifies the response.
    ///
    /// The body, when present, is a `(bytes, content-type)` pair; the
    /// content-type header is set exactly as declared. The full response
    /// body is read regardless of status class.
    ///
    /// # Errors
    ///
    /// - [`RestError::Transport`] when the request fails below the HTTP
    ///   layer (DNS, TLS, connection reset, timeout).
    /// - [`RestError::RequestFailed`] for any status other than 204.
    pub async fn execute(
        &self,
        method: http::Method,
        url: url::Url,
        body: Option<(Vec<u8>, http::HeaderValue)>,
    ) -> Result<(), RestError> {
        let mut request = HttpRequest::new(method.clone(), url).with_header(
            http::header::USER_AGENT,
            http::HeaderValue::from_static(USER_AGENT),
        );

        if let Some((bytes, content_type)) = body {
            request = request
                .with_header(http::header::CONTENT_TYPE, content_type)
                .with_body(bytes);
        }

        // The URL embeds the secret token, so log the method only.
        debug!(method = %method, "Sending webhook request");

        let response = self.client.request(request).await?;

        if response.status == http::StatusCode::NO_CONTENT {
            debug!(method = %method, "Webhook request succeeded");
            return Ok(());
        }

        let status_text = response
            .status
            .canonical_reason()
            .unwrap_or_default()
            .to_string();
        let body = response.body_text();

        warn!(
            method = %method,
            status = %response.status,
            "Webhook request rejected by remote service"
        );

        Err(RestError::RequestFailed {
            status: response.status,
            status_text,
            body,
        })
    }
}
