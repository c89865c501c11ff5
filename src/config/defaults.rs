//! Default values for configuration options.

use super::LogLevel;

/// Default database file name, relative to the working directory.
pub const DB_NAME: &str = "ip_addrs.db";

/// Config file picked up from the working directory when `--config` is absent.
pub const CONFIG_FILE: &str = "ip-tracker.toml";

/// Default timeout for each outbound request, in seconds.
pub const HTTP_TIMEOUT_SECS: u64 = 10;

/// Level used when none is configured or the configured one is unknown.
pub const LOG_LEVEL: LogLevel = LogLevel::Warn;

