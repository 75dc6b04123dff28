use crate::db::pool::DbPool;
use crate::errors::AppResult;
use ansi_term::Colour;
use unicode_width::UnicodeWidthStr;

fn strip_ansi(s: &str) -> String {
    let re = regex::Regex::new(r"\x1B\[[0-9;]*[mK]").unwrap();
    re.replace_all(s, "").into_owned()
}

/// ANSI color per recorded operation.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "checkin" => Colour::Green,
        "seed" => Colour::Cyan,
        "export" => Colour::Blue,
        "backup" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51),
        op if op.starts_with("roster_") => Colour::Yellow,
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    /// Print the audit trail, oldest first.
    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let mut stmt = pool
            .conn
            .prepare_cached("SELECT id, date, operation, target, message FROM oplog ORDER BY id ASC")?;

        let rows = stmt.query_map([], |row| {
            let id: i64 = row.get(0)?;
            let raw_date: String = row.get(1)?;
            let operation: String = row.get(2)?;
            let target: String = row.get(3)?;
            let message: String = row.get(4)?;

            let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or(raw_date);

            let op_target = if target.is_empty() {
                operation.clone()
            } else {
                format!("{operation} ({target})")
            };

            Ok((id, date, operation, op_target, message))
        })?;

        let mut entries = Vec::new();
        for r in rows {
            entries.push(r?);
        }

        if entries.is_empty() {
            println!("(empty log)");
            return Ok(());
        }

        let op_width = entries
            .iter()
            .map(|(_, _, _, op_target, _)| UnicodeWidthStr::width(op_target.as_str()))
            .max()
            .unwrap_or(0);

        for (id, date, operation, op_target, message) in entries {
            let colored = color_for_operation(&operation).paint(op_target.clone()).to_string();
            let pad = op_width - UnicodeWidthStr::width(strip_ansi(&colored).as_str());
            println!(
                "{:>4}  {}  {}{}  {}",
                id,
                date,
                colored,
                " ".repeat(pad),
                message
            );
        }

        Ok(())
    }
}
