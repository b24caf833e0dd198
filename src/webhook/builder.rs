//! Message composition bound to one webhook client.

use crate::limits::Limits;
use crate::message::{Embed, Payload, ValidationError};
use crate::rest::HttpClient;

use super::{WebhookClient, WebhookError};

/// Accumulates one webhook message and executes it.
///
/// Created by [`WebhookClient::builder`]. Every limit is enforced at the
/// moment a setter is called: a rejected mutation returns the error and
/// leaves the accumulated state untouched, so nothing invalid ever reaches
/// serialization.
///
/// The builder is a plain mutable accumulator. It is not meant to be shared
/// between tasks; use one builder per in-flight message. After a successful
/// [`execute`](Self::execute) the state is kept as-is, and reusing the
/// builder for a new message means resetting it yourself (usually by asking
/// the client for a fresh one).
#[derive(Debug)]
pub struct MessageBuilder<'a, H> {
    client: &'a WebhookClient<H>,
    payload: Payload,
}

impl<'a, H> MessageBuilder<'a, H> {
    pub(super) fn new(client: &'a WebhookClient<H>) -> Self {
        Self {
            client,
            payload: Payload::default(),
        }
    }

    /// Sets the plain-text content.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::TooLong`] if `content` exceeds the
    /// content limit; prior content is kept.
    pub fn with_content(
        &mut self,
        content: impl Into<String>,
    ) -> Result<&mut Self, ValidationError> {
        let content = content.into();
        ValidationError::check_len("content", &content, Limits::DEFAULT.content)?;
        self.payload.content = Some(content);
        Ok(self)
    }

    /// Overrides the webhook's display name for this message.
    ///
    /// Unset means the webhook's default is used.
    pub fn with_username(&mut self, username: impl Into<String>) -> &mut Self {
        self.payload.username = Some(username.into());
        self
    }

    /// Overrides the webhook's avatar for this message.
    pub fn with_avatar_url(&mut self, avatar_url: impl Into<String>) -> &mut Self {
        self.payload.avatar_url = Some(avatar_url.into());
        self
    }

    /// Marks the message as text-to-speech.
    pub fn with_tts(&mut self, tts: bool) -> &mut Self {
        self.payload.tts = tts;
        self
    }

    /// Appends one embed.
    ///
    /// Embeds are serialized in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::TooManyEmbeds`] once the payload holds
    /// the maximum number of embeds, or [`ValidationError::TotalTooLarge`]
    /// if the embed would push the payload past the aggregate character
    /// budget. The payload is unchanged on error.
    pub fn with_embed(&mut self, embed: Embed) -> Result<&mut Self, ValidationError> {
        if self.payload.embeds.len() >= Limits::DEFAULT.embeds {
            return Err(ValidationError::TooManyEmbeds {
                limit: Limits::DEFAULT.embeds,
            });
        }

        let total = self.payload.embed_char_total() + embed.char_count();
        if total > Limits::DEFAULT.total {
            return Err(ValidationError::TotalTooLarge {
                limit: Limits::DEFAULT.total,
                actual: total,
            });
        }

        self.payload.embeds.push(embed);
        Ok(self)
    }

    /// Appends several embeds at once, all or nothing.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::TooManyEmbeds`] or
    /// [`ValidationError::TotalTooLarge`] if the batch would cross either
    /// the embed count cap or the aggregate budget; no embed from the batch
    /// is added in that case.
    pub fn with_embeds(
        &mut self,
        embeds: impl IntoIterator<Item = Embed>,
    ) -> Result<&mut Self, ValidationError> {
        let embeds: Vec<Embed> = embeds.into_iter().collect();

        if self.payload.embeds.len() + embeds.len() > Limits::DEFAULT.embeds {
            return Err(ValidationError::TooManyEmbeds {
                limit: Limits::DEFAULT.embeds,
            });
        }

        let total = self.payload.embed_char_total()
            + embeds.iter().map(Embed::char_count).sum::<usize>();
        if total > Limits::DEFAULT.total {
            return Err(ValidationError::TotalTooLarge {
                limit: Limits::DEFAULT.total,
                actual: total,
            });
        }

        self.payload.embeds.extend(embeds);
        Ok(self)
    }

    /// Returns the accumulated payload.
    #[must_use]
    pub const fn payload(&self) -> &Payload {
        &self.payload
    }

    /// Serializes the current state to compact JSON. Pure; no side effects.
    ///
    /// # Errors
    ///
    /// Returns the underlying serialization error, which for this payload
    /// shape does not occur in practice.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.payload)
    }

    /// Serializes the current state to indented JSON.
    ///
    /// # Errors
    ///
    /// Same as [`to_json`](Self::to_json).
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.payload)
    }
}

impl<H: HttpClient> MessageBuilder<'_, H> {
    /// Serializes the current state and sends it via the bound client.
    ///
    /// The wire body is the pretty-printed form; the platform accepts both
    /// and the original wire convention is kept. Returns normally only on a
    /// `204 No Content` response.
    ///
    /// # Errors
    ///
    /// Returns [`WebhookError::Rest`] for transport failures and non-204
    /// statuses, [`WebhookError::Json`] if serialization fails.
    pub async fn execute(&self) -> Result<(), WebhookError> {
        let body = self.to_pretty_json()?;
        self.client.execute(&body).await?;
        Ok(())
    }
}
