//! Unified application error type.
//! All modules (db, core, ledger, cli, export) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Roster store
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Member not found: {0}")]
    UnknownMember(String),

    #[error("Member code already registered: {0}")]
    DuplicateMember(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format (expected DD-MM-YYYY): {0}")]
    InvalidDate(String),

    #[error("Invalid time format (expected HH:MM): {0}")]
    InvalidTime(String),

    #[error("Invalid role: {0}")]
    InvalidRole(String),

    #[error("Invalid shift: {0}")]
    InvalidShift(String),

    #[error("Invalid weekday abbreviation: {0}")]
    InvalidWeekday(String),

    // ---------------------------
    // Ledger errors
    // ---------------------------
    #[error("Student {0} has no shift assigned")]
    MissingShift(String),

    #[error("Ambiguous row match for '{0}': more than one row carries this name")]
    AmbiguousMember(String),

    #[error("No ledger found for date {0}")]
    NoLedgerForDate(String),

    #[error("Unsupported ledger schema version {found} (this build reads version {expected})")]
    SchemaVersion { found: u32, expected: u32 },

    #[error("Ledger error: {0}")]
    Ledger(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export format not supported: {0}")]
    InvalidExportFormat(String),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
