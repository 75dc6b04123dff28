use crate::config::Config;
use crate::db::{oplog, pool::DbPool};
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::flatten;
use crate::export::xlsx::export_xlsx;
use crate::ledger::store::LedgerStore;
use crate::utils::date::ledger_date_str;
use chrono::NaiveDate;
use std::io;
use std::path::Path;

/// High-level export logic for a single ledger day.
pub struct ExportLogic;

impl ExportLogic {
    pub fn export(
        cfg: &Config,
        pool: &mut DbPool,
        format: ExportFormat,
        file: &str,
        date: NaiveDate,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        ensure_writable(path, force)?;

        let store = LedgerStore::new(cfg.ledgers_dir());
        let doc = store
            .load(date)?
            .ok_or_else(|| AppError::NoLedgerForDate(ledger_date_str(date)))?;

        match format {
            ExportFormat::Csv => export_csv(&flatten(&doc), path)?,
            ExportFormat::Json => export_json(&flatten(&doc), path)?,
            ExportFormat::Xlsx => export_xlsx(&doc, path)?,
        }

        if let Err(e) = oplog::record(
            &pool.conn,
            "export",
            &ledger_date_str(date),
            &format!("{} -> {}", format.as_str(), path.display()),
        ) {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }

        Ok(())
    }
}
