//! IP Tracker: public IP address tracker
//!
//! Entry point for the ip-tracker application.

use ip_tracker::config::{Cli, Command, ValidatedConfig, write_default_config};
use std::process::ExitCode;

mod app;
mod run;

use app::{build_subscriber, exit_code, print_config_hint};

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse_args();

    if let Some(Command::Init { output }) = &cli.command {
        return handle_init(output);
    }

    let config = match ValidatedConfig::load(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            print_config_hint(&e);
            return exit_code::FAILURE;
        }
    };

    // Scoped to this run; nothing is installed globally.
    tracing::subscriber::with_default(build_subscriber(config.log_level), || {
        if let Some(ref name) = config.unrecognized_log_level {
            tracing::warn!("Unrecognized log level '{name}', using {}", config.log_level);
        }
        tracing::debug!("{config}");

        run_application(config)
    })
}

/// Handles the `init` subcommand.
fn handle_init(output: &std::path::Path) -> ExitCode {
    match write_default_config(output) {
        Ok(()) => {
            println!("Configuration template written to: {}", output.display());
            exit_code::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            exit_code::FAILURE
        }
    }
}

/// Runs one tracking pass with the given configuration.
///
/// Excluded from coverage - requires async runtime.
#[cfg(not(tarpaulin_include))]
fn run_application(config: ValidatedConfig) -> ExitCode {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            tracing::error!("Failed to create Tokio runtime: {e}");
            return exit_code::FAILURE;
        }
    };

    match runtime.block_on(run::execute(config)) {
        Ok(outcome) => {
            tracing::debug!("Recorded {}", outcome.current().address);
            exit_code::SUCCESS
        }
        Err(e) => {
            tracing::error!("Run failed: {e}");
            exit_code::FAILURE
        }
    }
}
