use crate::config::Config;
use crate::db::{oplog, pool::DbPool};
use crate::errors::AppResult;
use crate::export::ensure_writable;
use crate::ui::messages::success;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Back up the roster database and every ledger document.
    ///
    /// Without `--compress` the destination is a directory receiving a
    /// copy of the database and a `ledgers/` subdirectory; with it, a
    /// single zip archive is written at the destination path.
    pub fn backup(
        pool: &mut DbPool,
        cfg: &Config,
        dest_file: &str,
        compress: bool,
        force: bool,
    ) -> AppResult<()> {
        let src_db = Path::new(&cfg.database);
        let dest = crate::utils::path::expand_tilde(dest_file);

        if !src_db.exists() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Database not found: {}", src_db.display()),
            )
            .into());
        }

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        if compress {
            ensure_writable(&dest, force)?;
            write_zip(&dest, src_db, &cfg.ledgers_dir())?;
        } else {
            fs::create_dir_all(&dest)?;
            let db_copy = dest.join("rattendance.sqlite");
            ensure_writable(&db_copy, force)?;
            fs::copy(src_db, &db_copy)?;
            copy_ledgers(&cfg.ledgers_dir(), &dest.join("ledgers"))?;
        }

        success(format!("Backup created: {}", dest.display()));

        if let Err(e) = oplog::record(&pool.conn, "backup", "", &dest.display().to_string()) {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }

        Ok(())
    }
}

fn copy_ledgers(src: &Path, dest: &Path) -> AppResult<()> {
    if !src.exists() {
        return Ok(());
    }
    fs::create_dir_all(dest)?;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        if entry.path().is_file() {
            fs::copy(entry.path(), dest.join(entry.file_name()))?;
        }
    }
    Ok(())
}

fn write_zip(dest: &Path, db: &Path, ledgers: &Path) -> AppResult<()> {
    let file = fs::File::create(dest)?;
    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default();

    zip.start_file("rattendance.sqlite", options)
        .map_err(|e| io::Error::other(e.to_string()))?;
    zip.write_all(&fs::read(db)?)?;

    if ledgers.exists() {
        for entry in fs::read_dir(ledgers)? {
            let entry = entry?;
            if !entry.path().is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().to_string();
            zip.start_file(format!("ledgers/{name}"), options)
                .map_err(|e| io::Error::other(e.to_string()))?;
            zip.write_all(&fs::read(entry.path())?)?;
        }
    }

    zip.finish().map_err(|e| io::Error::other(e.to_string()))?;
    Ok(())
}
