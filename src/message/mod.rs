//! Message model: embeds and the serializable payload.
//!
//! This module provides:
//! - Rich embed blocks with eager limit validation ([`Embed`] and its
//!   sub-objects)
//! - Packed RGB color encoding ([`Color`])
//! - The serializable unit of work ([`Payload`])
//! - Validation failures ([`ValidationError`])

mod embed;
mod error;
mod payload;

#[cfg(test)]
mod embed_tests;

pub use embed::{Color, Embed, EmbedAuthor, EmbedField, EmbedFooter, EmbedImage, EmbedThumbnail};
pub use error::ValidationError;
pub use payload::Payload;
