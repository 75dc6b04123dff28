use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::checkin::CheckinLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use crate::utils::date::{parse_ledger_date, today};
use crate::utils::time::{format_12h, now_hhmm};

/// Handle the `checkin` command: record one check-in through the upsert
/// engine.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let Commands::Checkin {
        code,
        date,
        time,
        justified,
    } = &cli.command
    else {
        return Ok(());
    };

    //
    // 1. Resolve date (defaults to today)
    //
    let day = match date {
        Some(d) => parse_ledger_date(d).ok_or_else(|| AppError::InvalidDate(d.clone()))?,
        None => today(),
    };

    //
    // 2. Resolve time (defaults to now); malformed input is still passed
    //    through — the engine records it and classifies it as late.
    //
    let time = time.clone().unwrap_or_else(now_hhmm);

    //
    // 3. Open roster DB and run the engine
    //
    let mut pool = DbPool::new(&cfg.database)?;
    let applied = CheckinLogic::apply(cfg, &mut pool, code, day, &time, *justified)?;

    if applied {
        success(format!("Check-in recorded for {} at {}", code, format_12h(&time)));
    } else {
        warning(format!("{} is already registered today — check-in not applied.", code));
    }

    Ok(())
}
