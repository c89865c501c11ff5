//! Configuration layer for ip-tracker.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Log verbosity ([`LogLevel`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Sources
//!
//! The config file is `--config <PATH>` when given (it must exist), otherwise
//! `ip-tracker.toml` in the working directory when present, otherwise none.
//!
//! Values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments**
//! 2. **TOML config file**
//! 3. **Built-in defaults**
//!
//! `--notify` uses OR semantics with `discord_notifications_enabled`: the flag
//! can only enable notifications, never disable them.
//!
//! # Required Fields
//!
//! Nothing is required unless notifications are enabled, in which case
//! `discord_webhook_url` must be present and shaped like a Discord webhook.
//!
//! The configuration is read once per run and never mutated afterwards.

mod cli;
pub mod defaults;
mod error;
mod level;
mod toml;
mod validated;

#[cfg(test)]
mod toml_tests;

pub use cli::{Cli, Command};
pub use error::{ConfigError, field};
pub use level::LogLevel;
pub use toml::{TomlConfig, default_config_template};
pub use validated::{NotificationConfig, ValidatedConfig, write_default_config};
