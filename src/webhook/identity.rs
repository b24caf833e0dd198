//! Webhook identity: the `(id, token)` pair and its endpoint URL.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use super::WebhookError;

/// Host the webhook API lives on.
const API_BASE: &str = "https://discordapp.com/api/webhooks";

/// Full-match pattern for a webhook URL: numeric id, then a token of
/// letters, digits, `-` and `_`. The host is not pinned.
static WEBHOOK_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https://[^/]+/api/webhooks/([0-9]+)/([A-Za-z0-9_-]+)$")
        .expect("webhook URL pattern is valid")
});

/// A webhook's identity: public numeric id plus secret token.
///
/// Immutable once constructed. The token authenticates every request, so it
/// is kept out of `Debug` output and never appears in logs or error text.
#[derive(Clone, PartialEq, Eq)]
pub struct Webhook {
    id: u64,
    token: String,
}

impl Webhook {
    /// Creates a webhook identity from its id and token.
    #[must_use]
    pub fn new(id: u64, token: impl Into<String>) -> Self {
        Self {
            id,
            token: token.into(),
        }
    }

    /// Parses a webhook identity out of a full webhook URL.
    ///
    /// The URL must match
    /// `https://<host>/api/webhooks/{digits}/{token}` in full; partial
    /// matches and trailing input are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`WebhookError::InvalidUrl`] if the string does not match
    /// the pattern, or if the id does not fit in 64 bits.
    pub fn from_url(url: &str) -> Result<Self, WebhookError> {
        let captures = WEBHOOK_URL.captures(url).ok_or_else(|| {
            WebhookError::InvalidUrl("URL does not match the webhook URL pattern".to_string())
        })?;

        let id = captures[1]
            .parse::<u64>()
            .map_err(|_| WebhookError::InvalidUrl("webhook id does not fit in 64 bits".to_string()))?;

        Ok(Self {
            id,
            token: captures[2].to_string(),
        })
    }

    /// Returns the public id.
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// Returns the secret token. Avoid sharing this value.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Derives the endpoint URL all requests for this webhook target.
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!("{API_BASE}/{}/{}", self.id, self.token)
    }
}

impl fmt::Debug for Webhook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Webhook")
            .field("id", &self.id)
            .field("token", &"<redacted>")
            .finish()
    }
}
