use crate::ledger::doc::{LedgerDoc, Row};
use serde::Serialize;

/// Flat row shape for CSV / JSON export.
#[derive(Serialize, Clone, Debug)]
pub struct RowExport {
    pub partition: String,
    pub block: String,
    pub seq: u32,
    pub code: String,
    pub name: String,
    pub shift: String,
    pub days: String,
    pub attendance: String,
    pub status: String,
}

/// Flatten a day's document into export rows, one per member row,
/// tagged with the containing partition and block title.
pub(crate) fn flatten(doc: &LedgerDoc) -> Vec<RowExport> {
    let mut out = Vec::new();

    for partition in &doc.partitions {
        let mut block = String::new();
        for row in &partition.rows {
            match row {
                Row::Title { text, .. } => block = text.clone(),
                Row::Header { .. } => {}
                Row::Member(m) => out.push(RowExport {
                    partition: partition.name.clone(),
                    block: block.clone(),
                    seq: m.seq,
                    code: m.code.clone().unwrap_or_default(),
                    name: m.name.clone(),
                    shift: m.shift.clone(),
                    days: m.days.clone(),
                    attendance: m.attendance.text.clone(),
                    status: m.attendance.status.as_str().to_string(),
                }),
            }
        }
    }

    out
}
