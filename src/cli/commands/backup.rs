use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Handle the `backup` command.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let Commands::Backup {
        file,
        compress,
        force,
    } = &cli.command
    else {
        return Ok(());
    };

    let mut pool = DbPool::new(&cfg.database)?;
    BackupLogic::backup(&mut pool, cfg, file, *compress, *force)
}
