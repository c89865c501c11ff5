//! Command-line interface.
//!
//! Every run option can also come from the config file; flags win.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// ip-tracker: public IP address tracker
///
/// Records the current public IP address on every run and notifies a
/// webhook when it changes. Meant to be invoked from a timer.
#[derive(Debug, Parser)]
#[command(name = "ip-tracker")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to configuration file
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Path of the SQLite history database
    #[arg(long = "db-name")]
    pub db_name: Option<String>,

    /// Enable webhook notifications
    #[arg(long)]
    pub notify: bool,

    /// Discord webhook URL (required when notifications are enabled)
    #[arg(long = "webhook-url")]
    pub webhook_url: Option<String>,

    /// Log level: debug, info, warn, error or critical
    #[arg(long = "log-level")]
    pub log_level: Option<String>,

    /// Timeout for each outbound request in seconds
    #[arg(long = "http-timeout")]
    pub http_timeout: Option<u64>,

    /// Test mode - log notifications without sending them
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose logging (same as --log-level debug)
    #[arg(long, short)]
    pub verbose: bool,
}

/// Subcommands for ip-tracker
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = "ip-tracker.toml")]
        output: PathBuf,
    },
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }
}
