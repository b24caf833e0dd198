//! Webhook identity and client orchestration.
//!
//! This module provides:
//! - The `(id, token)` pair and endpoint derivation ([`Webhook`])
//! - The client tying identity to the REST executor ([`WebhookClient`])
//! - Message composition bound to one client ([`MessageBuilder`])
//! - Partial settings updates ([`SettingsPatch`])
//! - The orchestration error type ([`WebhookError`])

mod builder;
mod client;
mod error;
mod identity;


pub use builder::MessageBuilder;
pub use client::{SettingsPatch, WebhookClient};
pub use error::WebhookError;
pub use identity::Webhook;
