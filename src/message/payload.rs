//! The serializable unit of work sent in one webhook request.

use serde::{Deserialize, Serialize};

use super::Embed;

/// A complete webhook message: plain text plus zero or more embeds.
///
/// Values are accumulated by the message builder, which enforces all limits;
/// the payload itself is the plain wire shape. Every unset optional key is
/// omitted from the serialized object (no `null` placeholders); `tts` is
/// always emitted and defaults to `false`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Payload {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub(crate) content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub(crate) username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub(crate) avatar_url: Option<String>,
    #[serde(default)]
    pub(crate) tts: bool,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub(crate) embeds: Vec<Embed>,
}

impl Payload {
    /// Returns the message content, if set.
    #[must_use]
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// Returns the display-name override, if set.
    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// Returns the avatar override, if set.
    #[must_use]
    pub fn avatar_url(&self) -> Option<&str> {
        self.avatar_url.as_deref()
    }

    /// Returns whether the message is text-to-speech.
    #[must_use]
    pub const fn tts(&self) -> bool {
        self.tts
    }

    /// Returns the embeds in insertion order.
    #[must_use]
    pub fn embeds(&self) -> &[Embed] {
        &self.embeds
    }

    /// Total UTF-16 length of all embed text in this payload.
    #[must_use]
    pub fn embed_char_total(&self) -> usize {
        self.embeds.iter().map(Embed::char_count).sum()
    }
}
