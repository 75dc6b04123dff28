//! Roster database schema.

use crate::errors::AppResult;
use rusqlite::Connection;

/// Create the roster and oplog tables when missing.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS members (
            code       TEXT PRIMARY KEY,
            first_name TEXT NOT NULL,
            last_name  TEXT NOT NULL,
            role       TEXT NOT NULL CHECK(role IN ('student','instructor')),
            cycle      TEXT,
            shift      TEXT CHECK(shift IN ('morning','afternoon')),
            days       TEXT NOT NULL DEFAULT '',
            active     INTEGER NOT NULL DEFAULT 1
        );

        CREATE TABLE IF NOT EXISTS oplog (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}
