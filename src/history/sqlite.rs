//! SQLite-backed history store.

use std::path::{Path, PathBuf};

use rusqlite::{Connection, OpenFlags, OptionalExtension, params};

use super::{HistoryStore, Observation, StoreError, format_timestamp, parse_timestamp};

/// Name of the single history table.
const TABLE: &str = "Stored_IP_Addresses";

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS Stored_IP_Addresses (
    ip_addr TEXT NOT NULL,
    add_ip_addr_date_time TEXT NOT NULL
)";

const SELECT_TABLE: &str = "SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?1";

// Insertion order, not the stored text: offsets and week-year stamps in
// older rows do not sort chronologically as strings.
const SELECT_LATEST: &str = "SELECT ip_addr, add_ip_addr_date_time
    FROM Stored_IP_Addresses
    ORDER BY rowid DESC
    LIMIT 1";

const INSERT: &str =
    "INSERT INTO Stored_IP_Addresses (ip_addr, add_ip_addr_date_time) VALUES (?1, ?2)";

/// History store kept in a single SQLite database file.
///
/// A connection is opened per operation and dropped straight after.
/// Only [`HistoryStore::initialize`] may create the file; reads and appends
/// against a missing database fail instead of creating an empty one.
#[derive(Debug, Clone)]
pub struct SqliteHistoryStore {
    path: PathBuf,
}

impl SqliteHistoryStore {
    /// Creates a store backed by the database at `path`.
    ///
    /// Nothing is touched on disk until an operation runs.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path to the database file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn open(&self, create: bool) -> Result<Connection, StoreError> {
        let mut flags = OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        if create {
            flags |= OpenFlags::SQLITE_OPEN_CREATE;
        }

        Connection::open_with_flags(&self.path, flags).map_err(|source| StoreError::Open {
            path: self.path.clone(),
            source,
        })
    }

    fn create_parent_dir(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|source| StoreError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        Ok(())
    }
}

impl HistoryStore for SqliteHistoryStore {
    fn exists(&self) -> bool {
        self.path.is_file()
    }

    fn initialize(&self) -> Result<(), StoreError> {
        self.create_parent_dir()?;

        let conn = self.open(true)?;
        conn.execute_batch(CREATE_TABLE)
            .map_err(StoreError::Initialize)?;

        let created: Option<String> = conn
            .query_row(SELECT_TABLE, [TABLE], |row| row.get(0))
            .optional()
            .map_err(StoreError::Initialize)?;

        if created.is_none() {
            return Err(StoreError::InitVerification { table: TABLE });
        }

        tracing::debug!("Created history table in {}", self.path.display());
        Ok(())
    }

    fn latest(&self) -> Result<Option<Observation>, StoreError> {
        let conn = self.open(false)?;

        let row: Option<(String, String)> = conn
            .query_row(SELECT_LATEST, [], |row| Ok((row.get(0)?, row.get(1)?)))
            .optional()
            .map_err(StoreError::Read)?;

        let Some((address, stamp)) = row else {
            return Ok(None);
        };

        let observed_at = parse_timestamp(&stamp).map_err(|source| {
            StoreError::InvalidTimestamp {
                value: stamp.clone(),
                source,
            }
        })?;

        Ok(Some(Observation::new(address, observed_at)))
    }

    fn append(&self, observation: &Observation) -> Result<(), StoreError> {
        if observation.address.is_empty() {
            return Err(StoreError::EmptyAddress);
        }

        let conn = self.open(false)?;
        conn.execute(
            INSERT,
            params![observation.address, format_timestamp(&observation.observed_at)],
        )
        .map_err(StoreError::Write)?;

        Ok(())
    }
}
