//! Webhook notifications for address changes.
//!
//! This module provides:
//! - The delivery abstraction ([`Notifier`])
//! - Discord-style webhook delivery ([`DiscordWebhook`], [`WebhookTarget`])
//! - The fixed notification texts ([`message`])

mod discord;
mod error;
pub mod message;
mod sender;

#[cfg(test)]
mod discord_tests;

pub use discord::{DISPLAY_NAME, DiscordWebhook, WebhookTarget};
pub use error::NotifyError;
pub use sender::Notifier;
