use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::oplog;
use crate::errors::AppResult;
use rusqlite::Connection;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the data directory for ledger documents
///  - the roster SQLite database
pub fn handle(cli: &Cli) -> AppResult<()> {
    let Commands::Init { db } = &cli.command else {
        return Ok(());
    };

    let cfg = Config::init_all(db.clone(), cli.config.as_deref())?;

    println!("⚙️  Initializing rattendance…");
    println!("🗄️  Database   : {}", cfg.database);
    println!("📁 Ledgers     : {}", cfg.ledgers_dir().display());

    let conn = Connection::open(&cfg.database)?;
    init_db(&conn)?;

    println!("✅ Database initialized at {}", cfg.database);

    if let Err(e) = oplog::record(
        &conn,
        "init",
        "",
        &format!("Database initialized at {}", cfg.database),
    ) {
        eprintln!("⚠️ Failed to write internal log: {}", e);
    }

    println!("🎉 rattendance initialization completed!");
    Ok(())
}
