use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::show::ShowLogic;
use crate::errors::{AppError, AppResult};
use crate::utils::date::{parse_ledger_date, today};

/// Handle the `show` command: print a day's ledger to the terminal.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let Commands::Show { date } = &cli.command else {
        return Ok(());
    };

    let day = match date {
        Some(d) => parse_ledger_date(d).ok_or_else(|| AppError::InvalidDate(d.clone()))?,
        None => today(),
    };

    ShowLogic::print_day(cfg, day)
}
