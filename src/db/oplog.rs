//! Internal audit trail of engine operations.

use crate::errors::AppResult;
use chrono::Local;
use rusqlite::{Connection, params};

/// Write one audit line into the `oplog` table.
pub fn record(conn: &Connection, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let now = Local::now().to_rfc3339();

    let mut stmt = conn.prepare_cached(
        "INSERT INTO oplog (date, operation, target, message)
         VALUES (?1, ?2, ?3, ?4)",
    )?;

    stmt.execute(params![now, operation, target, message])?;

    Ok(())
}
