//! Time utilities: parsing HH:MM, fractional hours, 12-hour display format.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

/// Convert an `HH:MM` string to a fractional-hour value (`hours + minutes/60`).
/// Malformed input yields `None`; classification treats that as late.
pub fn to_fractional_hours(t: &str) -> Option<f64> {
    let parsed = parse_time(t)?;
    Some(parsed.hour() as f64 + parsed.minute() as f64 / 60.0)
}

/// Display an `HH:MM` time in 12-hour form, e.g. `08:10 AM`.
/// Malformed input is displayed verbatim rather than dropped: a bad clock
/// string must never block a physical check-in from being recorded.
pub fn format_12h(t: &str) -> String {
    match parse_time(t) {
        Some(parsed) => parsed.format("%I:%M %p").to_string(),
        None => t.trim().to_string(),
    }
}

pub fn parse_required_time(input: &str) -> AppResult<NaiveTime> {
    parse_time(input).ok_or_else(|| AppError::InvalidTime(input.to_string()))
}

pub fn now_hhmm() -> String {
    chrono::Local::now().time().format("%H:%M").to_string()
}
