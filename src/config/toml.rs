//! TOML configuration file parsing.
//!
//! The file is a flat table of options; see [`default_config_template`].

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional so a partial file can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Path of the SQLite history database
    pub db_name: Option<String>,

    /// Whether to notify the webhook
    #[serde(default)]
    pub discord_notifications_enabled: bool,

    /// Discord webhook URL
    pub discord_webhook_url: Option<String>,

    /// Discord user id, kept for reference
    pub discord_id: Option<String>,

    /// Log level name
    pub log_level: Option<String>,

    /// Timeout for each outbound request in seconds
    pub http_timeout: Option<u64>,

    /// Override of the public address resolver
    pub address_url: Option<String>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# ip-tracker configuration file

# SQLite database holding every observed address (default: ip_addrs.db)
# A leading ~ is expanded to the home directory.
db_name = "ip_addrs.db"

# Send a message to the webhook on first run and whenever the address changes
# (--notify on the command line also enables this)
discord_notifications_enabled = false

# Webhook URL (required when notifications are enabled)
# discord_webhook_url = "https://discord.com/api/webhooks/<id>/<token>"

# Discord user id (kept for reference, not used for delivery)
# discord_id = "123456789012345678"

# Log level: debug, info, warn, error or critical (default: warn)
log_level = "warn"

# Timeout for each outbound request in seconds (default: 10)
# http_timeout = 10

# Public address resolver (default: http://checkip.amazonaws.com/)
# address_url = "http://checkip.amazonaws.com/"
"#
    .to_string()
}
