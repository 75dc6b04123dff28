use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Handle the `log` command: print the audit trail.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let Commands::Log { print } = &cli.command else {
        return Ok(());
    };

    if *print {
        let mut pool = DbPool::new(&cfg.database)?;
        LogLogic::print_log(&mut pool)?;
    }

    Ok(())
}
