use super::{role::Role, shift::Shift};
use crate::utils::date;
use serde::Serialize;

/// A person eligible to check in. Owned by the roster store; the ledger
/// engine only reads it.
#[derive(Debug, Clone, Serialize)]
pub struct Member {
    pub code: String,       // ⇔ members.code (TEXT PRIMARY KEY)
    pub first_name: String, // ⇔ members.first_name
    pub last_name: String,  // ⇔ members.last_name
    pub role: Role,         // ⇔ members.role ('student' | 'instructor')
    pub cycle: Option<String>, // ⇔ members.cycle (students only)
    pub shift: Option<Shift>,  // ⇔ members.shift ('morning' | 'afternoon', students only)
    pub days: Vec<String>,  // ⇔ members.days (TEXT "Mon,Wed,Fri")
    pub active: bool,       // ⇔ members.active (INT, default 1)
}

impl Member {
    /// Canonical display name as written into ledger rows:
    /// `SURNAME FIRSTNAME`, uppercased. Falls back to the single
    /// non-empty part for legacy one-name records.
    pub fn display_name(&self) -> String {
        let last = self.last_name.trim();
        let first = self.first_name.trim();
        if last.is_empty() {
            return first.to_uppercase();
        }
        if first.is_empty() {
            return last.to_uppercase();
        }
        format!("{} {}", last, first).to_uppercase()
    }

    /// Sort key used when seeding a partition: surname first, first name
    /// as tie-break, compared case- and diacritic-insensitively.
    pub fn sort_key(&self) -> (String, String) {
        let surname = if self.last_name.trim().is_empty() {
            &self.first_name
        } else {
            &self.last_name
        };
        (
            crate::utils::text::normalize_name(surname),
            crate::utils::text::normalize_name(&self.first_name),
        )
    }

    /// Whether this member is scheduled on the given weekday ("Mon".."Sun").
    pub fn is_scheduled_on(&self, weekday: &str) -> bool {
        self.days.iter().any(|d| d.eq_ignore_ascii_case(weekday))
    }

    /// Scheduled days joined for the ledger column, e.g. "Mon-Wed-Fri".
    pub fn days_str(&self) -> String {
        self.days.join("-")
    }

    /// Days column value ⇔ DB representation ("Mon,Wed,Fri").
    pub fn days_db_str(&self) -> String {
        self.days.join(",")
    }

    /// Parse the DB days column, discarding anything that is not a fixed
    /// weekday abbreviation.
    pub fn parse_days(raw: &str) -> Vec<String> {
        raw.split(',')
            .filter_map(|d| date::canonical_weekday(d.trim()))
            .map(|d| d.to_string())
            .collect()
    }
}
