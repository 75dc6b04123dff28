//! Partition resolution: which ledger file and which partition a check-in
//! belongs to.

use crate::errors::{AppError, AppResult};
use crate::models::member::Member;
use crate::models::role::Role;
use crate::models::shift::Shift;
use crate::utils::date::ledger_date_str;
use chrono::NaiveDate;

/// The physical partitions of a day's ledger. Instructors share a single
/// partition; students split by shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartitionKind {
    Morning,
    Afternoon,
    Instructors,
}

impl PartitionKind {
    pub fn name(&self) -> &'static str {
        match self {
            PartitionKind::Morning => "Morning",
            PartitionKind::Afternoon => "Afternoon",
            PartitionKind::Instructors => "Instructors",
        }
    }

    pub fn for_shift(shift: Shift) -> Self {
        match shift {
            Shift::Morning => PartitionKind::Morning,
            Shift::Afternoon => PartitionKind::Afternoon,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Placement {
    /// Ledger file name, deterministic from the date alone (`DD-MM-YYYY`).
    pub file: String,
    pub partition: PartitionKind,
}

/// Resolve the (ledger file, partition) pair for a member on a date.
///
/// Role and shift are validated enumerations: a student row that reached
/// this point without a shift is rejected explicitly rather than routed
/// to a catch-all partition.
pub fn resolve(date: NaiveDate, member: &Member) -> AppResult<Placement> {
    let partition = match member.role {
        Role::Instructor => PartitionKind::Instructors,
        Role::Student => {
            let shift = member
                .shift
                .ok_or_else(|| AppError::MissingShift(member.code.clone()))?;
            PartitionKind::for_shift(shift)
        }
    };

    Ok(Placement {
        file: ledger_date_str(date),
        partition,
    })
}
