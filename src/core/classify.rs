//! Punctuality classification of a student check-in time against a shift
//! schedule window.

use crate::config::ShiftSchedule;
use crate::models::punctuality::Punctuality;
use crate::utils::time::to_fractional_hours;

/// Classify a check-in time against a schedule window.
///
/// Comparison runs on fractional hours (`hours + minutes/60`):
/// strictly before `entry` → on time; up to and including `tolerance` →
/// tolerance; after → late. Pure and total: a malformed check-in time or
/// schedule degrades to `Late` instead of failing, since a bad clock
/// string must never block a physical check-in.
pub fn classify(schedule: &ShiftSchedule, check_in: &str) -> Punctuality {
    let (Some(t), Some(entry), Some(tolerance)) = (
        to_fractional_hours(check_in),
        to_fractional_hours(&schedule.entry),
        to_fractional_hours(&schedule.tolerance),
    ) else {
        return Punctuality::Late;
    };

    if t < entry {
        Punctuality::OnTime
    } else if t <= tolerance {
        Punctuality::Tolerance
    } else {
        Punctuality::Late
    }
}
