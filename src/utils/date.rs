//! Date utilities: ledger date format, weekday abbreviations.

use chrono::{Datelike, NaiveDate};

/// One ledger file per calendar day, named after this format.
pub const LEDGER_DATE_FMT: &str = "%d-%m-%Y";

/// Fixed weekday abbreviations used in the scheduled-days column.
pub const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_ledger_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, LEDGER_DATE_FMT).ok()
}

pub fn ledger_date_str(date: NaiveDate) -> String {
    date.format(LEDGER_DATE_FMT).to_string()
}

/// Weekday abbreviation for a date ("Mon".."Sun").
pub fn weekday_abbr(date: NaiveDate) -> &'static str {
    WEEKDAYS[date.weekday().num_days_from_monday() as usize]
}

pub fn is_weekday_abbr(s: &str) -> bool {
    WEEKDAYS.iter().any(|w| w.eq_ignore_ascii_case(s))
}

/// Normalize a weekday abbreviation to its canonical casing, if valid.
pub fn canonical_weekday(s: &str) -> Option<&'static str> {
    WEEKDAYS.iter().find(|w| w.eq_ignore_ascii_case(s)).copied()
}
