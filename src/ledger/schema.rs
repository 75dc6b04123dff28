//! Fixed, versioned ledger schema: column set, column widths, block titles
//! and the status palette.
//!
//! Both the writer and every reader (terminal preview, exports, downstream
//! tooling that classifies rows by cell color) consult this descriptor
//! instead of inferring layout from header text.

use crate::models::shift::Shift;
use chrono::{Datelike, NaiveDate};

/// Bumped on any change to the document layout; checked on load.
pub const SCHEMA_VERSION: u32 = 1;

/// The five meaningful columns of a partition row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Sequence,
    Name,
    Shift,
    ScheduledDays,
    Attendance,
}

pub struct Column {
    pub kind: ColumnKind,
    pub label: &'static str,
    pub width: u16,
}

/// Column widths are fixed by column role, not content-driven.
pub const COLUMNS: [Column; 5] = [
    Column { kind: ColumnKind::Sequence, label: "N°", width: 5 },
    Column { kind: ColumnKind::Name, label: "Name", width: 32 },
    Column { kind: ColumnKind::Shift, label: "Shift", width: 11 },
    Column { kind: ColumnKind::ScheduledDays, label: "Scheduled-Days", width: 18 },
    Column { kind: ColumnKind::Attendance, label: "", width: 14 },
];

/// The attendance column header carries the day itself, e.g. "Mon 7".
pub fn attendance_header(date: NaiveDate) -> String {
    format!("{} {}", crate::utils::date::weekday_abbr(date), date.day())
}

pub fn header_labels(date: NaiveDate) -> Vec<String> {
    COLUMNS
        .iter()
        .map(|c| {
            if c.kind == ColumnKind::Attendance {
                attendance_header(date)
            } else {
                c.label.to_string()
            }
        })
        .collect()
}

/// Title of a student cohort block inside a partition, e.g. "CYCLE 7 - MORNING".
pub fn block_title(cycle: &str, shift: Shift) -> String {
    format!("CYCLE {} - {}", cycle.to_uppercase(), shift.label().to_uppercase())
}

pub const INSTRUCTORS_TITLE: &str = "INSTRUCTORS";

// ---------------------------
// Status palette (fill, font)
// ---------------------------
// The colors are part of the persisted document: downstream reporting
// detects attendance state from them, so writer and readers must agree.

pub const TITLE_FILL: u32 = 0x2F75B5;
pub const TITLE_FONT: u32 = 0xFFFFFF;

pub const HEADER_FILL: u32 = 0xDDEBF7;
pub const HEADER_FONT: u32 = 0x1F4E78;

pub const ABSENT_FILL: u32 = 0xFFC7CE;
pub const ABSENT_FONT: u32 = 0x9C0006;

pub const NOT_EXPECTED_FILL: u32 = 0xD9D9D9;
pub const NOT_EXPECTED_FONT: u32 = 0x595959;

pub const ON_TIME_FILL: u32 = 0xC6EFCE;
pub const ON_TIME_FONT: u32 = 0x006100;

pub const TOLERANCE_FILL: u32 = 0xFFEB9C;
pub const TOLERANCE_FONT: u32 = 0x9C6500;

pub const LATE_FILL: u32 = 0xFCD5B4;
pub const LATE_FONT: u32 = 0x974706;

pub const LOGGED_FILL: u32 = 0xDDEBF7;
pub const LOGGED_FONT: u32 = 0x1F4E78;
