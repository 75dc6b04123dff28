use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::shift::Shift;
use crate::ui::messages::success;
use crate::utils::time::parse_required_time;

/// Handle the `config` subcommand: print the current configuration or
/// update schedule windows and the cohort seeding order.
pub fn handle(cli: &Cli, cfg: &mut Config) -> AppResult<()> {
    let Commands::Config {
        print_config,
        shift,
        entry,
        tolerance,
        cycle_order,
    } = &cli.command
    else {
        return Ok(());
    };

    let mut dirty = false;

    if let Some(shift_code) = shift {
        let shift = Shift::from_code(shift_code)
            .ok_or_else(|| AppError::InvalidShift(shift_code.clone()))?;

        if entry.is_none() && tolerance.is_none() {
            return Err(AppError::Config(
                "--shift requires --entry and/or --tolerance".to_string(),
            ));
        }

        let window = cfg.schedule_for_mut(shift);
        if let Some(t) = entry {
            parse_required_time(t)?;
            window.entry = t.clone();
            dirty = true;
        }
        if let Some(t) = tolerance {
            parse_required_time(t)?;
            window.tolerance = t.clone();
            dirty = true;
        }
    } else if entry.is_some() || tolerance.is_some() {
        return Err(AppError::Config(
            "--entry/--tolerance require --shift".to_string(),
        ));
    }

    if let Some(order) = cycle_order {
        cfg.cycle_order = order
            .split(',')
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .collect();
        dirty = true;
    }

    if dirty {
        cfg.save(cli.config.as_deref())?;
        success("Configuration updated.");
    }

    if *print_config || !dirty {
        println!("📄 Current configuration:\n");
        println!(
            "{}",
            serde_yaml::to_string(&cfg).map_err(|_| AppError::ConfigSave)?
        );
    }

    Ok(())
}
