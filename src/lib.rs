//! Discord webhook client library.
//!
//! Composes structured webhook messages (plain text plus rich embeds),
//! validates them against Discord's documented size limits before anything
//! touches the network, and executes the webhook over HTTPS with typed
//! errors for every failure mode.
//!
//! # Example
//!
//! ```no_run
//! use discord_webhook::webhook::WebhookClient;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = WebhookClient::from_url(
//!     "https://discordapp.com/api/webhooks/123456789/abcXYZ-_1",
//! )?;
//!
//! let mut builder = client.builder();
//! builder.with_content("hello")?.with_tts(false);
//! builder.execute().await?;
//! # Ok(())
//! # }
//! ```

pub mod limits;
pub mod message;
pub mod rest;
pub mod webhook;
