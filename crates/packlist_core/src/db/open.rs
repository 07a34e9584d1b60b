//! Connection bootstrap for the snapshot database.
//!
//! # Invariants
//! - Returned connections carry a busy timeout.
//! - Returned connections are stamped with `SCHEMA_VERSION`.

use super::schema::ensure_schema;
use super::{DbError, DbResult, DbStep};
use log::{error, info};
use rusqlite::Connection;
use std::path::Path;
use std::time::{Duration, Instant};

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Opens the packing list file, creating and upgrading it as needed.
///
/// # Side effects
/// - Creates the file when missing.
/// - Emits `db_open` logging events with duration and status.
pub fn open_db(path: impl AsRef<Path>) -> DbResult<Connection> {
    open_with("file", || Connection::open(path))
}

/// Opens a throwaway in-memory database with the current schema.
pub fn open_db_in_memory() -> DbResult<Connection> {
    open_with("memory", Connection::open_in_memory)
}

fn open_with(
    mode: &'static str,
    connect: impl FnOnce() -> rusqlite::Result<Connection>,
) -> DbResult<Connection> {
    let started_at = Instant::now();
    info!("event=db_open module=db status=start mode={mode}");

    let opened = connect()
        .map_err(DbError::at(DbStep::Connect))
        .and_then(|mut conn| bootstrap_connection(&mut conn).map(|()| conn));

    let conn = opened.map_err(|err| {
        error!(
            "event=db_open module=db status=error mode={mode} duration_ms={} error_code={} error={err}",
            started_at.elapsed().as_millis(),
            err.code()
        );
        err
    })?;

    info!(
        "event=db_open module=db status=ok mode={mode} duration_ms={}",
        started_at.elapsed().as_millis()
    );
    Ok(conn)
}

fn bootstrap_connection(conn: &mut Connection) -> DbResult<()> {
    conn.busy_timeout(BUSY_TIMEOUT)
        .map_err(DbError::at(DbStep::Configure))?;
    ensure_schema(conn)
}
