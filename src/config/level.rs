//! Log verbosity levels accepted in configuration.

use std::fmt;

use tracing::Level;

/// Log verbosity accepted by `log_level`.
///
/// `Critical` has no tracing counterpart and maps to ERROR.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Everything, including per-step detail
    Debug,
    /// Routine progress
    Info,
    /// Warnings and failures only
    Warn,
    /// Failures only
    Error,
    /// Fatal failures only
    Critical,
}

impl LogLevel {
    /// Parses a level name case-insensitively.
    ///
    /// Returns `None` for names outside the fixed set.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "warn" | "warning" => Some(Self::Warn),
            "error" => Some(Self::Error),
            "critical" | "fatal" => Some(Self::Critical),
            _ => None,
        }
    }

    /// Returns the tracing level that admits this verbosity.
    #[must_use]
    pub const fn as_tracing(self) -> Level {
        match self {
            Self::Debug => Level::DEBUG,
            Self::Info => Level::INFO,
            Self::Warn => Level::WARN,
            Self::Error | Self::Critical => Level::ERROR,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
            Self::Critical => "critical",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!(LogLevel::parse("DEBUG"), Some(LogLevel::Debug));
        assert_eq!(LogLevel::parse("Info"), Some(LogLevel::Info));
        assert_eq!(LogLevel::parse("warning"), Some(LogLevel::Warn));
        assert_eq!(LogLevel::parse(" error "), Some(LogLevel::Error));
        assert_eq!(LogLevel::parse("CRITICAL"), Some(LogLevel::Critical));
    }

    #[test]
    fn unknown_name_is_none() {
        assert_eq!(LogLevel::parse("verbose"), None);
        assert_eq!(LogLevel::parse(""), None);
    }

    #[test]
    fn critical_maps_to_error() {
        assert_eq!(LogLevel::Critical.as_tracing(), Level::ERROR);
        assert_eq!(LogLevel::Warn.as_tracing(), Level::WARN);
    }

    #[test]
    fn display_round_trips_through_parse() {
        for level in [
            LogLevel::Debug,
            LogLevel::Info,
            LogLevel::Warn,
            LogLevel::Error,
            LogLevel::Critical,
        ] {
            assert_eq!(LogLevel::parse(&level.to_string()), Some(level));
        }
    }
}
