//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use url::Url;

use crate::address::DEFAULT_ENDPOINT;
use crate::webhook::{NotifyError, WebhookTarget};

use super::cli::Cli;
use super::defaults;
use super::error::{ConfigError, field};
use super::level::LogLevel;
use super::toml::TomlConfig;

/// Webhook settings, present only when notifications are enabled.
#[derive(Debug, Clone)]
pub struct NotificationConfig {
    /// Parsed webhook URL with id and token
    pub target: WebhookTarget,

    /// Discord user id from the config file; not used for delivery
    pub discord_id: Option<String>,
}

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config,
/// or [`ValidatedConfig::load`] to also locate and read the config file.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Path of the SQLite history database
    pub db_path: PathBuf,

    /// Webhook settings; `None` when notifications are disabled
    pub notifications: Option<NotificationConfig>,

    /// Effective log level
    pub log_level: LogLevel,

    /// Configured level name that was not recognized, if any.
    /// Kept so it can be reported once logging is up.
    pub unrecognized_log_level: Option<String>,

    /// Public address resolver
    pub address_url: Url,

    /// Timeout for each outbound request
    pub http_timeout: Duration,

    /// Dry-run mode (log notifications without sending them)
    pub dry_run: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let webhook = self
            .notifications
            .as_ref()
            .map_or_else(|| "disabled".to_string(), |n| format!("id {}", n.target.id()));

        write!(
            f,
            "Config {{ db: {}, notifications: {}, log_level: {}, address_url: {}, \
             http_timeout: {}s, dry_run: {} }}",
            self.db_path.display(),
            webhook,
            self.log_level,
            self.address_url,
            self.http_timeout.as_secs(),
            self.dry_run,
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments take precedence over TOML config values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Notifications are enabled without a webhook URL
    /// - A URL is invalid or the webhook URL has the wrong shape
    /// - `db_name` is empty
    /// - The request timeout is zero
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let db_path = Self::resolve_db_path(cli, toml)?;
        let notifications = Self::resolve_notifications(cli, toml)?;
        let (log_level, unrecognized_log_level) = Self::resolve_log_level(cli, toml);
        let address_url = Self::resolve_address_url(toml)?;
        let http_timeout = Self::resolve_http_timeout(cli, toml)?;

        Ok(Self {
            db_path,
            notifications,
            log_level,
            unrecognized_log_level,
            address_url,
            http_timeout,
            dry_run: cli.dry_run,
        })
    }

    /// Loads and merges configuration from CLI and the config file.
    ///
    /// Reads `cli.config` if set, else [`defaults::CONFIG_FILE`] if it exists.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        Self::load_with_fallback(cli, Path::new(defaults::CONFIG_FILE))
    }

    /// Like [`ValidatedConfig::load`] with an explicit fallback file.
    ///
    /// # Errors
    ///
    /// See [`ValidatedConfig::load`].
    pub fn load_with_fallback(cli: &Cli, fallback: &Path) -> Result<Self, ConfigError> {
        let toml = match cli.config {
            Some(ref path) => Some(TomlConfig::load(path)?),
            None if fallback.is_file() => Some(TomlConfig::load(fallback)?),
            None => None,
        };

        Self::from_raw(cli, toml.as_ref())
    }

    fn resolve_db_path(cli: &Cli, toml: Option<&TomlConfig>) -> Result<PathBuf, ConfigError> {
        let name = cli
            .db_name
            .as_deref()
            .or_else(|| toml.and_then(|t| t.db_name.as_deref()))
            .unwrap_or(defaults::DB_NAME);

        if name.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: field::DB_NAME,
                reason: "must not be empty".to_string(),
            });
        }

        Ok(expand_home(name))
    }

    fn resolve_notifications(
        cli: &Cli,
        toml: Option<&TomlConfig>,
    ) -> Result<Option<NotificationConfig>, ConfigError> {
        let enabled = cli.notify || toml.is_some_and(|t| t.discord_notifications_enabled);
        if !enabled {
            return Ok(None);
        }

        let url_str = cli
            .webhook_url
            .as_deref()
            .or_else(|| toml.and_then(|t| t.discord_webhook_url.as_deref()))
            .ok_or(ConfigError::MissingRequired {
                field: field::DISCORD_WEBHOOK_URL,
                hint: "Use --webhook-url or set discord_webhook_url in config file",
            })?;

        let url = parse_url(field::DISCORD_WEBHOOK_URL, url_str)?;
        let target = WebhookTarget::parse(url).map_err(|e| ConfigError::InvalidUrl {
            field: field::DISCORD_WEBHOOK_URL,
            url: url_str.to_string(),
            reason: match e {
                NotifyError::InvalidUrl { reason, .. } => reason.to_string(),
                other => other.to_string(),
            },
        })?;

        Ok(Some(NotificationConfig {
            target,
            discord_id: toml.and_then(|t| t.discord_id.clone()),
        }))
    }

    fn resolve_log_level(cli: &Cli, toml: Option<&TomlConfig>) -> (LogLevel, Option<String>) {
        if cli.verbose {
            return (LogLevel::Debug, None);
        }

        let configured = cli
            .log_level
            .as_deref()
            .or_else(|| toml.and_then(|t| t.log_level.as_deref()));

        match configured {
            None => (defaults::LOG_LEVEL, None),
            Some(name) => LogLevel::parse(name)
                .map_or_else(|| (defaults::LOG_LEVEL, Some(name.to_string())), |l| (l, None)),
        }
    }

    fn resolve_address_url(toml: Option<&TomlConfig>) -> Result<Url, ConfigError> {
        let url_str = toml
            .and_then(|t| t.address_url.as_deref())
            .unwrap_or(DEFAULT_ENDPOINT);

        let url = parse_url(field::ADDRESS_URL, url_str)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidValue {
                field: field::ADDRESS_URL,
                reason: format!("unsupported scheme '{}'", url.scheme()),
            });
        }

        Ok(url)
    }

    fn resolve_http_timeout(
        cli: &Cli,
        toml: Option<&TomlConfig>,
    ) -> Result<Duration, ConfigError> {
        let seconds = cli
            .http_timeout
            .or_else(|| toml.and_then(|t| t.http_timeout))
            .unwrap_or(defaults::HTTP_TIMEOUT_SECS);

        if seconds == 0 {
            return Err(ConfigError::InvalidValue {
                field: field::HTTP_TIMEOUT,
                reason: "must be greater than 0".to_string(),
            });
        }

        Ok(Duration::from_secs(seconds))
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::TemplateWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

// Helper functions

fn parse_url(field: &'static str, s: &str) -> Result<Url, ConfigError> {
    Url::parse(s).map_err(|e| ConfigError::InvalidUrl {
        field,
        url: s.to_string(),
        reason: e.to_string(),
    })
}

/// Expands a leading `~` to the home directory.
///
/// Left untouched when no home directory can be determined.
fn expand_home(path: &str) -> PathBuf {
    let rest = match path {
        "~" => "",
        p => match p.strip_prefix("~/") {
            Some(rest) => rest,
            None => return PathBuf::from(p),
        },
    };

    dirs::home_dir().map_or_else(|| PathBuf::from(path), |home| home.join(rest))
}

#[cfg(test)]
mod tests {
    use super::expand_home;
    use std::path::PathBuf;

    #[test]
    fn plain_path_is_unchanged() {
        assert_eq!(expand_home("data/ip.db"), PathBuf::from("data/ip.db"));
    }

    #[test]
    fn tilde_prefix_uses_home_dir() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home("~/ip.db"), home.join("ip.db"));
        }
    }

    #[test]
    fn tilde_inside_path_is_unchanged() {
        assert_eq!(expand_home("a/~/b"), PathBuf::from("a/~/b"));
    }
}
