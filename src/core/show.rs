//! Terminal preview of a day's ledger.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ledger::doc::{LedgerDoc, Row};
use crate::ledger::schema;
use crate::ledger::store::LedgerStore;
use crate::utils::colors::{BOLD, RESET, color_for_status};
use crate::utils::date::ledger_date_str;
use crate::utils::table::{Column, Table};
use chrono::NaiveDate;

pub struct ShowLogic;

impl ShowLogic {
    pub fn print_day(cfg: &Config, date: NaiveDate) -> AppResult<()> {
        let store = LedgerStore::new(cfg.ledgers_dir());
        let doc = store
            .load(date)?
            .ok_or_else(|| AppError::NoLedgerForDate(ledger_date_str(date)))?;

        print_doc(&doc);
        Ok(())
    }
}

fn print_doc(doc: &LedgerDoc) {
    println!("{BOLD}Attendance ledger {}{RESET}", doc.date);

    for partition in &doc.partitions {
        println!("\n{BOLD}== {} =={RESET}", partition.name);

        let mut table = new_table();
        for row in &partition.rows {
            match row {
                Row::Title { text, .. } => {
                    // Flush rows accumulated for the previous block.
                    if !table.rows.is_empty() {
                        print!("{}", table.render());
                        table = new_table();
                    }
                    println!("{BOLD}-- {} --{RESET}", text);
                }
                Row::Header { .. } => {}
                Row::Member(m) => {
                    let color = color_for_status(m.attendance.status);
                    table.add_row(vec![
                        m.seq.to_string(),
                        m.name.clone(),
                        m.shift.clone(),
                        m.days.clone(),
                        format!("{color}{}{RESET}", m.attendance.text),
                    ]);
                }
            }
        }
        if !table.rows.is_empty() {
            print!("{}", table.render());
        }
    }
}

fn new_table() -> Table {
    let columns = schema::COLUMNS
        .iter()
        .map(|c| Column {
            header: c.label.to_string(),
            width: c.width as usize,
        })
        .collect();
    Table::new(columns)
}
