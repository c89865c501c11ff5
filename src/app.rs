//! Application startup and utilities.
//!
//! This module contains exit codes, tracing setup, and error hints
//! that support the main entry point.

use ip_tracker::config::{ConfigError, LogLevel, field};
use tracing_subscriber::EnvFilter;

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    /// Success (exit code 0).
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Any fatal error (exit code 1) - configuration, store, network or webhook.
    pub const FAILURE: ExitCode = ExitCode::FAILURE;
}

/// Prints helpful hints for common configuration errors.
pub fn print_config_hint(error: &ConfigError) {
    match error {
        ConfigError::MissingRequired { field: f, .. } if *f == field::DISCORD_WEBHOOK_URL => {
            eprintln!("\nRun 'ip-tracker init' to generate a configuration template.");
        }
        ConfigError::FileRead { .. } => {
            eprintln!("\nRun 'ip-tracker init' to generate a configuration template.");
        }
        _ => {}
    }
}

/// Builds the tracing subscriber for a run.
///
/// `RUST_LOG` refines the configured level. Output goes to stderr so the
/// status line is the only thing on stdout.
pub fn build_subscriber(level: LogLevel) -> impl tracing::Subscriber + Send + Sync + 'static {
    let filter = EnvFilter::builder()
        .with_default_directive(level.as_tracing().into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish()
}
