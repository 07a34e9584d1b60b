//! SQLite file backing the snapshot store.
//!
//! # Responsibility
//! - Open a configured connection with the `blobs` table in place.
//! - Report which bootstrap step failed when SQLite refuses.
//!
//! # Invariants
//! - The schema revision lives in `PRAGMA user_version`.
//! - A file stamped by a newer build is refused, never downgraded.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod open;
mod schema;

pub use open::{open_db, open_db_in_memory};
pub use schema::{schema_version, SCHEMA_VERSION};

pub type DbResult<T> = Result<T, DbError>;

/// Phase of connection bootstrap a SQLite failure happened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbStep {
    Connect,
    Configure,
    ReadVersion,
    /// Applying the upgrade that stamps this revision.
    Upgrade(u32),
}

impl Display for DbStep {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Connect => f.write_str("connect"),
            Self::Configure => f.write_str("configure"),
            Self::ReadVersion => f.write_str("read schema version"),
            Self::Upgrade(revision) => write!(f, "upgrade to schema {revision}"),
        }
    }
}

/// Failure while opening or upgrading the snapshot database.
#[derive(Debug)]
pub enum DbError {
    Sqlite {
        step: DbStep,
        source: rusqlite::Error,
    },
    /// The file carries a schema revision this build does not know.
    SchemaTooNew { found: u32, supported: u32 },
}

impl DbError {
    /// Builds a `map_err` adapter tagging SQLite errors with `step`.
    pub(crate) fn at(step: DbStep) -> impl FnOnce(rusqlite::Error) -> Self {
        move |source| Self::Sqlite { step, source }
    }

    /// Short stable code for log lines.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Sqlite {
                step: DbStep::Connect,
                ..
            } => "db_connect_failed",
            Self::Sqlite {
                step: DbStep::Upgrade(_),
                ..
            } => "db_upgrade_failed",
            Self::Sqlite { .. } => "db_bootstrap_failed",
            Self::SchemaTooNew { .. } => "db_schema_too_new",
        }
    }
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite { step, source } => write!(f, "sqlite failed to {step}: {source}"),
            Self::SchemaTooNew { found, supported } => write!(
                f,
                "packing list file uses schema {found}; this build reads up to {supported}"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite { source, .. } => Some(source),
            Self::SchemaTooNew { .. } => None,
        }
    }
}
