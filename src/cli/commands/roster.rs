use crate::cli::parser::{Cli, Commands, RosterAction};
use crate::config::Config;
use crate::db::{oplog, pool::DbPool, queries};
use crate::errors::{AppError, AppResult};
use crate::models::{member::Member, role::Role, shift::Shift};
use crate::ui::messages::success;
use crate::utils::date::canonical_weekday;

/// Handle the `roster` subcommands: the pass-through CRUD boundary of the
/// roster provider.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let Commands::Roster { action } = &cli.command else {
        return Ok(());
    };

    let mut pool = DbPool::new(&cfg.database)?;

    match action {
        RosterAction::Add {
            code,
            first,
            last,
            role,
            cycle,
            shift,
            days,
        } => {
            let role = Role::from_code(role).ok_or_else(|| AppError::InvalidRole(role.clone()))?;

            let shift = match shift {
                Some(s) => Some(Shift::from_code(s).ok_or_else(|| AppError::InvalidShift(s.clone()))?),
                None => None,
            };

            if role.is_student() && (shift.is_none() || cycle.is_none()) {
                return Err(AppError::Config(
                    "students require --cycle and --shift".to_string(),
                ));
            }

            let days = parse_days_arg(days.as_deref())?;

            let member = Member {
                code: code.clone(),
                first_name: first.clone(),
                last_name: last.clone(),
                role,
                cycle: cycle.clone(),
                shift,
                days,
                active: true,
            };

            queries::insert_member(&mut pool, &member)?;
            success(format!("Member added: {} ({})", member.display_name(), member.code));

            if let Err(e) = oplog::record(&pool.conn, "roster_add", code, &member.display_name()) {
                eprintln!("⚠️ Failed to write internal log: {}", e);
            }
        }

        RosterAction::List { all } => {
            let members = queries::load_members(&mut pool)?;
            for m in members.iter().filter(|m| *all || m.active) {
                let detail = match m.role {
                    Role::Student => format!(
                        "cycle {}, {}",
                        m.cycle.as_deref().unwrap_or("-"),
                        m.shift.map(|s| s.label()).unwrap_or("-")
                    ),
                    Role::Instructor => "instructor".to_string(),
                };
                let state = if m.active { "" } else { " [inactive]" };
                println!("{:<10} {:<32} {} ({}){}", m.code, m.display_name(), detail, m.days_str(), state);
            }
        }

        RosterAction::Remove { code } => {
            if !queries::deactivate_member(&mut pool, code)? {
                return Err(AppError::UnknownMember(code.clone()));
            }
            success(format!("Member deactivated: {}", code));

            if let Err(e) = oplog::record(&pool.conn, "roster_remove", code, "") {
                eprintln!("⚠️ Failed to write internal log: {}", e);
            }
        }
    }

    Ok(())
}

fn parse_days_arg(days: Option<&str>) -> AppResult<Vec<String>> {
    let Some(raw) = days else {
        return Ok(Vec::new());
    };
    let mut out = Vec::new();
    for part in raw.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        let day = canonical_weekday(part)
            .ok_or_else(|| AppError::InvalidWeekday(part.to_string()))?;
        out.push(day.to_string());
    }
    Ok(out)
}
