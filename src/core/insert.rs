//! Insertion planning for members enrolled after a partition was seeded.

use super::resolve::PartitionKind;
use super::seed::seed_row;
use crate::ledger::doc::{Partition, Row};
use crate::models::member::Member;
use crate::utils::date::weekday_abbr;
use chrono::NaiveDate;

/// Where a late-enrolled member's row goes and which sequence number it
/// receives. Existing rows keep their numbers; only the new row is numbered.
#[derive(Debug, Clone, Copy)]
pub struct InsertPlan {
    pub index: usize,
    pub seq: u32,
}

pub struct InsertLogic;

impl InsertLogic {
    /// Compute the insertion point preserving per-cohort block structure
    /// and monotonic numbering.
    pub fn plan(partition: &Partition, kind: PartitionKind, member: &Member) -> InsertPlan {
        match kind {
            PartitionKind::Instructors => plan_single_block(partition),
            PartitionKind::Morning | PartitionKind::Afternoon => {
                plan_cohort_block(partition, member)
            }
        }
    }

    /// Insert the member's row at the planned position, in seed state.
    /// Returns the index of the new row.
    pub fn insert(
        partition: &mut Partition,
        kind: PartitionKind,
        member: &Member,
        date: NaiveDate,
    ) -> usize {
        let plan = Self::plan(partition, kind, member);
        let row = seed_row(member, plan.seq, weekday_abbr(date));
        partition.rows.insert(plan.index, Row::Member(row));
        plan.index
    }
}

/// Instructors: one block; append after the last row with sequence k+1.
fn plan_single_block(partition: &Partition) -> InsertPlan {
    let mut max_seq = 0;
    let mut index = partition.rows.len();
    for (i, row) in partition.rows.iter().enumerate() {
        if let Row::Member(m) = row {
            max_seq = max_seq.max(m.seq);
            index = i + 1;
        }
    }
    InsertPlan { index, seq: max_seq + 1 }
}

/// Students: find this member's (cycle, shift) title block and append at
/// its end with sequence k+1. A cohort with zero seeded members has no
/// block; its row is appended at the end of the partition with sequence 1.
fn plan_cohort_block(partition: &Partition, member: &Member) -> InsertPlan {
    let cycle = member.cycle.as_deref();
    let shift = member.shift.map(|s| s.to_db_str());

    let title_idx = partition.rows.iter().position(|row| {
        matches!(row, Row::Title { cycle: c, shift: s, .. }
            if c.as_deref() == cycle && s.as_deref() == shift)
    });

    let Some(start) = title_idx else {
        return InsertPlan { index: partition.rows.len(), seq: 1 };
    };

    let mut max_seq = 0;
    let mut index = start + 1;
    for (i, row) in partition.rows.iter().enumerate().skip(start + 1) {
        match row {
            Row::Title { .. } => break,
            Row::Header { .. } => index = i + 1,
            Row::Member(m) => {
                max_seq = max_seq.max(m.seq);
                index = i + 1;
            }
        }
    }
    InsertPlan { index, seq: max_seq + 1 }
}
