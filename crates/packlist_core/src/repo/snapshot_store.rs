//! Snapshot store contracts and implementations.
//!
//! # Responsibility
//! - Load, save and clear serialized collections by key.
//! - Provide a SQLite-backed store and an in-memory store.
//!
//! # Invariants
//! - `load` returns `None` for keys that were never saved or were cleared.
//! - `save` replaces the previous blob for the same key.

use crate::db::{schema_version, DbError, SCHEMA_VERSION};
use rusqlite::{params, Connection, OptionalExtension};
use std::cell::RefCell;
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed key the packing list snapshot lives under.
pub const SNAPSHOT_KEY: &str = "travel_items";

pub type StoreResult<T> = Result<T, StoreError>;

/// Transport-level failure of a snapshot store.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    /// A `blobs` query failed on an otherwise healthy connection.
    Query(rusqlite::Error),
    /// Connection was not opened through `db::open_db`; `found` is its schema revision.
    NotMigrated { found: u32 },
    Unavailable(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Query(err) => write!(f, "snapshot query failed: {err}"),
            Self::NotMigrated { found } => write!(
                f,
                "snapshot store schema is at revision {found}, expected {SCHEMA_VERSION}; open the database through db::open_db"
            ),
            Self::Unavailable(message) => write!(f, "snapshot store unavailable: {message}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Query(err) => Some(err),
            Self::NotMigrated { .. } | Self::Unavailable(_) => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Query(value)
    }
}

/// Key-value blob store holding serialized snapshots.
pub trait SnapshotStore {
    fn load(&self, key: &str) -> StoreResult<Option<String>>;
    fn save(&self, key: &str, blob: &str) -> StoreResult<()>;
    fn clear(&self, key: &str) -> StoreResult<()>;
}

/// SQLite-backed snapshot store over the `blobs` table.
pub struct SqliteSnapshotStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSnapshotStore<'conn> {
    /// Wraps a connection returned by `open_db`/`open_db_in_memory`.
    ///
    /// # Errors
    /// - `StoreError::NotMigrated` when the connection has no `blobs` table.
    pub fn try_new(conn: &'conn Connection) -> StoreResult<Self> {
        let found = schema_version(conn)?;
        if found < SCHEMA_VERSION {
            return Err(StoreError::NotMigrated { found });
        }
        Ok(Self { conn })
    }
}

impl SnapshotStore for SqliteSnapshotStore<'_> {
    fn load(&self, key: &str) -> StoreResult<Option<String>> {
        let blob = self
            .conn
            .query_row("SELECT value FROM blobs WHERE key = ?1;", [key], |row| {
                row.get::<_, String>(0)
            })
            .optional()?;
        Ok(blob)
    }

    fn save(&self, key: &str, blob: &str) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO blobs (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![key, blob],
        )?;
        Ok(())
    }

    fn clear(&self, key: &str) -> StoreResult<()> {
        self.conn
            .execute("DELETE FROM blobs WHERE key = ?1;", [key])?;
        Ok(())
    }
}

/// Process-local snapshot store; contents vanish with the value.
#[derive(Debug, Default)]
pub struct MemorySnapshotStore {
    blobs: RefCell<HashMap<String, String>>,
}

impl MemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with one blob.
    pub fn with_blob(key: &str, blob: impl Into<String>) -> Self {
        let store = Self::default();
        store
            .blobs
            .borrow_mut()
            .insert(key.to_string(), blob.into());
        store
    }
}

impl SnapshotStore for MemorySnapshotStore {
    fn load(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.blobs.borrow().get(key).cloned())
    }

    fn save(&self, key: &str, blob: &str) -> StoreResult<()> {
        self.blobs
            .borrow_mut()
            .insert(key.to_string(), blob.to_string());
        Ok(())
    }

    fn clear(&self, key: &str) -> StoreResult<()> {
        self.blobs.borrow_mut().remove(key);
        Ok(())
    }
}
