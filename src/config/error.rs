//! Configuration errors.

use std::path::PathBuf;

use thiserror::Error;

/// Why configuration could not be loaded, merged or written.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML or has unknown keys.
    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// `init` could not write the template.
    #[error("Failed to write config template to '{}': {source}", path.display())]
    TemplateWrite {
        /// Destination path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A field required by another setting is absent.
    #[error("Missing required field: {field}. {hint}")]
    MissingRequired {
        /// Name of the missing field
        field: &'static str,
        /// How to provide the value
        hint: &'static str,
    },

    /// A URL field does not parse or has the wrong shape.
    #[error("Invalid URL for {field} '{url}': {reason}")]
    InvalidUrl {
        /// Name of the field
        field: &'static str,
        /// The rejected value
        url: String,
        /// Why it was rejected
        reason: String,
    },

    /// Any other out-of-range value.
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue {
        /// Name of the field
        field: &'static str,
        /// Why it was rejected
        reason: String,
    },
}

/// Config field names, as spelled in the TOML file.
pub mod field {
    pub const DB_NAME: &str = "db_name";
    pub const DISCORD_WEBHOOK_URL: &str = "discord_webhook_url";
    pub const ADDRESS_URL: &str = "address_url";
    pub const HTTP_TIMEOUT: &str = "http_timeout";
}
