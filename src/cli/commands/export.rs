use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::ExportLogic;
use crate::utils::date::{parse_ledger_date, today};

/// Handle the `export` command.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let Commands::Export {
        format,
        file,
        date,
        force,
    } = &cli.command
    else {
        return Ok(());
    };

    let day = match date {
        Some(d) => parse_ledger_date(d).ok_or_else(|| AppError::InvalidDate(d.clone()))?,
        None => today(),
    };

    let mut pool = DbPool::new(&cfg.database)?;
    ExportLogic::export(cfg, &mut pool, format.clone(), file, day, *force)
}
