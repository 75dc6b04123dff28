//! Durable storage for ledger documents: one JSON file per calendar day,
//! read fully before each mutation and written fully back after.
//!
//! Mutation discipline is whole-file read-modify-write guarded by a
//! per-day in-process lock (single writer per day). There is no
//! cross-process locking: concurrent upserts from independent processes
//! can still race, last writer wins on the whole file. The write itself
//! is not crash-atomic; a failure mid-write can leave the file truncated.

use super::doc::LedgerDoc;
use super::schema::SCHEMA_VERSION;
use crate::errors::{AppError, AppResult};
use crate::utils::date::ledger_date_str;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, OnceLock};

static DAY_LOCKS: OnceLock<Mutex<HashMap<String, Arc<Mutex<()>>>>> = OnceLock::new();

/// The in-process lock serializing writers for one calendar day.
pub fn day_lock(date: NaiveDate) -> Arc<Mutex<()>> {
    let registry = DAY_LOCKS.get_or_init(|| Mutex::new(HashMap::new()));
    let mut map = registry.lock().unwrap_or_else(|e| e.into_inner());
    map.entry(ledger_date_str(date))
        .or_insert_with(|| Arc::new(Mutex::new(())))
        .clone()
}

pub struct LedgerStore {
    dir: PathBuf,
}

impl LedgerStore {
    pub fn new(ledgers_dir: PathBuf) -> Self {
        Self { dir: ledgers_dir }
    }

    /// Deterministic document path for a day: `<dir>/DD-MM-YYYY.json`.
    pub fn path_for(&self, date: NaiveDate) -> PathBuf {
        self.dir.join(format!("{}.json", ledger_date_str(date)))
    }

    /// Read the whole document for a day, or `None` when no check-in has
    /// touched that day yet. Rejects documents written by a different
    /// schema version instead of guessing at their layout.
    pub fn load(&self, date: NaiveDate) -> AppResult<Option<LedgerDoc>> {
        let path = self.path_for(date);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path)?;
        let doc: LedgerDoc = serde_json::from_str(&content)
            .map_err(|e| AppError::Ledger(format!("{}: {}", path.display(), e)))?;
        if doc.schema_version != SCHEMA_VERSION {
            return Err(AppError::SchemaVersion {
                found: doc.schema_version,
                expected: SCHEMA_VERSION,
            });
        }
        Ok(Some(doc))
    }

    /// Write the whole document back. I/O failures propagate to the
    /// caller so a check-in is never reported recorded when it was not.
    pub fn save(&self, date: NaiveDate, doc: &LedgerDoc) -> AppResult<()> {
        fs::create_dir_all(&self.dir)?;
        let json = serde_json::to_string_pretty(doc)
            .map_err(|e| AppError::Ledger(format!("serialize ledger: {}", e)))?;
        fs::write(self.path_for(date), json)?;
        Ok(())
    }
}
