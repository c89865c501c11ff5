//! Append-only history of public address observations.
//!
//! The store answers exactly four questions: does it exist, create it,
//! what was recorded last, and record this. There is no update or delete.

mod sqlite;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

pub use sqlite::SqliteHistoryStore;

use std::io;
use std::path::PathBuf;

use chrono::{DateTime, SubsecRound, Utc};
use thiserror::Error;

/// Round-trip format for stored timestamps.
///
/// Microsecond precision with an explicit offset, e.g.
/// `2024-05-01 12:00:00.123456+0000`. Fixed width, so rows sort
/// chronologically as plain text.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f%z";

/// One recorded (address, timestamp) pair.
///
/// Timestamps are truncated to microseconds on construction so that a value
/// read back from the store compares equal to the one that was appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observation {
    /// The public address as returned by the resolver.
    pub address: String,
    /// When the address was observed.
    pub observed_at: DateTime<Utc>,
}

impl Observation {
    /// Creates an observation of `address` at `observed_at`.
    #[must_use]
    pub fn new(address: impl Into<String>, observed_at: DateTime<Utc>) -> Self {
        Self {
            address: address.into(),
            observed_at: observed_at.trunc_subsecs(6),
        }
    }
}

/// Formats a timestamp in the stored representation.
#[must_use]
pub fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Parses a stored timestamp, normalizing any offset to UTC.
///
/// # Errors
///
/// Returns the chrono parse error when `value` does not match [`TIMESTAMP_FORMAT`].
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_str(value, TIMESTAMP_FORMAT).map(|at| at.with_timezone(&Utc))
}

/// Errors raised by history store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The directory that should hold the database could not be created.
    #[error("Failed to create directory '{}': {source}", path.display())]
    CreateDir {
        /// Directory that could not be created
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The database file could not be opened.
    #[error("Failed to open history database '{}': {source}", path.display())]
    Open {
        /// Path to the database file
        path: PathBuf,
        /// Underlying SQLite error
        #[source]
        source: rusqlite::Error,
    },

    /// Creating the history table failed.
    #[error("Failed to create history table: {0}")]
    Initialize(#[source] rusqlite::Error),

    /// The history table was not present after creation.
    #[error("History table '{table}' is missing after initialization")]
    InitVerification {
        /// Name of the expected table
        table: &'static str,
    },

    /// Reading the latest observation failed.
    #[error("Failed to read history: {0}")]
    Read(#[source] rusqlite::Error),

    /// Appending an observation failed.
    #[error("Failed to append observation: {0}")]
    Write(#[source] rusqlite::Error),

    /// A stored timestamp does not match the expected format.
    #[error("Stored timestamp '{value}' is invalid: {source}")]
    InvalidTimestamp {
        /// The raw stored value
        value: String,
        /// Underlying parse error
        #[source]
        source: chrono::ParseError,
    },

    /// Refused to append an observation with an empty address.
    #[error("Refusing to append an observation without an address")]
    EmptyAddress,
}

/// Persisted, append-only log of [`Observation`]s.
///
/// Absence of the store and absence of any observation are ordinary
/// answers (`false` / `None`), not errors.
pub trait HistoryStore: Send + Sync {
    /// Returns `true` if the backing store is present.
    fn exists(&self) -> bool;

    /// Creates the backing store and verifies it is usable.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if creation fails or cannot be verified.
    fn initialize(&self) -> Result<(), StoreError>;

    /// Returns the most recent observation, or `None` if nothing was recorded yet.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store cannot be read.
    fn latest(&self) -> Result<Option<Observation>, StoreError>;

    /// Appends an observation.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the write cannot be committed.
    fn append(&self, observation: &Observation) -> Result<(), StoreError>;
}
