//! In-memory model of a per-day ledger document.
//!
//! One document per calendar day, holding an ordered set of named
//! partitions; each partition is an ordered sequence of typed rows.
//! The whole document is read into memory before each mutation and
//! written back in full afterwards.

use super::schema;
use crate::models::punctuality::Punctuality;
use crate::utils::date::ledger_date_str;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerDoc {
    pub schema_version: u32,
    pub date: String, // DD-MM-YYYY
    pub partitions: Vec<Partition>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Partition {
    pub name: String,
    pub rows: Vec<Row>,
}

/// Row kinds of a partition page. A student partition can hold several
/// titled cohort blocks, each with its own header and 1..N numbering.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Row {
    Title {
        text: String,
        cycle: Option<String>,
        shift: Option<String>,
    },
    Header {
        labels: Vec<String>,
    },
    Member(MemberRow),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberRow {
    pub seq: u32,
    /// Stable member identifier, the primary row-matching key.
    /// Absent only in rows imported from legacy name-only documents.
    pub code: Option<String>,
    pub name: String,
    pub shift: String,
    pub days: String,
    pub attendance: AttendanceCell,
}

/// Mutually exclusive attendance states. `Absent` and `NotExpected` are
/// seed states; the rest are check-in records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellStatus {
    Absent,
    NotExpected,
    OnTime,
    Tolerance,
    Late,
    Logged,
}

impl CellStatus {
    /// (fill, font) colors from the schema palette.
    pub fn colors(&self) -> (u32, u32) {
        match self {
            CellStatus::Absent => (schema::ABSENT_FILL, schema::ABSENT_FONT),
            CellStatus::NotExpected => (schema::NOT_EXPECTED_FILL, schema::NOT_EXPECTED_FONT),
            CellStatus::OnTime => (schema::ON_TIME_FILL, schema::ON_TIME_FONT),
            CellStatus::Tolerance => (schema::TOLERANCE_FILL, schema::TOLERANCE_FONT),
            CellStatus::Late => (schema::LATE_FILL, schema::LATE_FONT),
            CellStatus::Logged => (schema::LOGGED_FILL, schema::LOGGED_FONT),
        }
    }

    pub fn is_checkin(&self) -> bool {
        !matches!(self, CellStatus::Absent | CellStatus::NotExpected)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CellStatus::Absent => "absent",
            CellStatus::NotExpected => "not_expected",
            CellStatus::OnTime => "on_time",
            CellStatus::Tolerance => "tolerance",
            CellStatus::Late => "late",
            CellStatus::Logged => "logged",
        }
    }
}

impl From<Punctuality> for CellStatus {
    fn from(p: Punctuality) -> Self {
        match p {
            Punctuality::OnTime => CellStatus::OnTime,
            Punctuality::Tolerance => CellStatus::Tolerance,
            Punctuality::Late => CellStatus::Late,
        }
    }
}

/// The fifth column of a member row. The textual value and the colors are
/// written together and always agree; the colors are the encoding that
/// downstream preview/reporting tools key on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceCell {
    pub text: String,
    pub status: CellStatus,
    pub justified: bool,
    pub fill: u32,
    pub font: u32,
}

pub const ABSENT_TEXT: &str = "ABSENT";
pub const NOT_EXPECTED_TEXT: &str = "NOT EXPECTED";
pub const JUSTIFIED_SUFFIX: &str = " (J)";

impl AttendanceCell {
    fn with_status(text: String, status: CellStatus, justified: bool) -> Self {
        let (fill, font) = status.colors();
        Self { text, status, justified, fill, font }
    }

    pub fn absent() -> Self {
        Self::with_status(ABSENT_TEXT.to_string(), CellStatus::Absent, false)
    }

    pub fn not_expected() -> Self {
        Self::with_status(NOT_EXPECTED_TEXT.to_string(), CellStatus::NotExpected, false)
    }

    /// A recorded check-in: 12-hour display time, optional justification
    /// marker, colors derived from the status.
    pub fn check_in(display_time: &str, status: CellStatus, justified: bool) -> Self {
        let text = if justified {
            format!("{display_time}{JUSTIFIED_SUFFIX}")
        } else {
            display_time.to_string()
        };
        Self::with_status(text, status, justified)
    }

    pub fn has_record(&self) -> bool {
        self.status.is_checkin()
    }

    /// A tardy still awaiting justification may be rewritten once by a
    /// justified re-registration; everything else is final for the day.
    pub fn is_unjustified_late(&self) -> bool {
        self.status == CellStatus::Late && !self.justified
    }
}

impl LedgerDoc {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            schema_version: schema::SCHEMA_VERSION,
            date: ledger_date_str(date),
            partitions: Vec::new(),
        }
    }

    pub fn partition(&self, name: &str) -> Option<&Partition> {
        self.partitions.iter().find(|p| p.name == name)
    }

    pub fn partition_mut(&mut self, name: &str) -> Option<&mut Partition> {
        self.partitions.iter_mut().find(|p| p.name == name)
    }
}

impl Partition {
    pub fn new(name: &str) -> Self {
        Self { name: name.to_string(), rows: Vec::new() }
    }

    pub fn member_row(&self, index: usize) -> Option<&MemberRow> {
        match self.rows.get(index) {
            Some(Row::Member(m)) => Some(m),
            _ => None,
        }
    }

    pub fn member_row_mut(&mut self, index: usize) -> Option<&mut MemberRow> {
        match self.rows.get_mut(index) {
            Some(Row::Member(m)) => Some(m),
            _ => None,
        }
    }
}
