//! Schema revisions for the snapshot database.

use super::{DbError, DbResult, DbStep};
use log::info;
use rusqlite::Connection;

/// Ordered upgrades; each entry stamps its revision once its SQL has run.
const UPGRADES: &[(u32, &str)] = &[(1, include_str!("sql/0001_blobs.sql"))];

/// Schema revision this build writes and reads.
pub const SCHEMA_VERSION: u32 = 1;

/// Reads the revision stamped on `conn`; `0` for a fresh file.
pub fn schema_version(conn: &Connection) -> DbResult<u32> {
    conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))
        .map_err(DbError::at(DbStep::ReadVersion))
}

/// Brings `conn` up to `SCHEMA_VERSION`, all pending upgrades in one transaction.
pub(super) fn ensure_schema(conn: &mut Connection) -> DbResult<()> {
    let found = schema_version(conn)?;
    if found > SCHEMA_VERSION {
        return Err(DbError::SchemaTooNew {
            found,
            supported: SCHEMA_VERSION,
        });
    }

    let pending = UPGRADES
        .iter()
        .filter(|(revision, _)| *revision > found)
        .collect::<Vec<_>>();
    if pending.is_empty() {
        return Ok(());
    }

    let tx = conn
        .transaction()
        .map_err(DbError::at(DbStep::Upgrade(found + 1)))?;
    for &&(revision, sql) in &pending {
        tx.execute_batch(sql)
            .and_then(|()| tx.pragma_update(None, "user_version", revision))
            .map_err(DbError::at(DbStep::Upgrade(revision)))?;
        info!("event=db_upgrade module=db status=ok from={found} to={revision}");
    }
    tx.commit()
        .map_err(DbError::at(DbStep::Upgrade(SCHEMA_VERSION)))
}
