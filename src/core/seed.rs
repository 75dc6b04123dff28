//! Roster seeding: first-touch materialization of a partition with every
//! expected member pre-set to an absence state.

use super::resolve::PartitionKind;
use crate::ledger::doc::{AttendanceCell, MemberRow, Partition, Row};
use crate::ledger::schema;
use crate::models::member::Member;
use crate::models::role::Role;
use crate::models::shift::Shift;
use crate::utils::date::weekday_abbr;
use chrono::NaiveDate;

pub struct SeedLogic;

impl SeedLogic {
    /// Build a freshly seeded partition for the given day.
    ///
    /// Students: one titled block per (cycle, shift) in the configured
    /// cycle order (cycles missing from the configuration follow in
    /// sorted order), empty blocks skipped, each block numbered 1..N.
    /// Instructors: a single block covering all instructors.
    pub fn seed_partition(
        kind: PartitionKind,
        roster: &[Member],
        date: NaiveDate,
        cycle_order: &[String],
    ) -> Partition {
        let mut partition = Partition::new(kind.name());

        match kind {
            PartitionKind::Instructors => {
                let mut members: Vec<&Member> = roster
                    .iter()
                    .filter(|m| m.active && m.role == Role::Instructor)
                    .collect();
                sort_block(&mut members);

                partition.rows.push(Row::Title {
                    text: schema::INSTRUCTORS_TITLE.to_string(),
                    cycle: None,
                    shift: None,
                });
                push_block(&mut partition, &members, date);
            }
            PartitionKind::Morning | PartitionKind::Afternoon => {
                let shift = match kind {
                    PartitionKind::Morning => Shift::Morning,
                    _ => Shift::Afternoon,
                };
                for cycle in cycles_in_order(roster, shift, cycle_order) {
                    let mut members: Vec<&Member> = roster
                        .iter()
                        .filter(|m| {
                            m.active
                                && m.role == Role::Student
                                && m.shift == Some(shift)
                                && m.cycle.as_deref() == Some(cycle.as_str())
                        })
                        .collect();
                    if members.is_empty() {
                        continue;
                    }
                    sort_block(&mut members);

                    partition.rows.push(Row::Title {
                        text: schema::block_title(&cycle, shift),
                        cycle: Some(cycle.clone()),
                        shift: Some(shift.to_db_str().to_string()),
                    });
                    push_block(&mut partition, &members, date);
                }
            }
        }

        partition
    }
}

/// Cycles to emit for a shift: the configured order first, then any cycle
/// present in the roster but missing from the configuration, sorted.
fn cycles_in_order(roster: &[Member], shift: Shift, cycle_order: &[String]) -> Vec<String> {
    let mut out: Vec<String> = cycle_order.to_vec();
    let mut extra: Vec<String> = roster
        .iter()
        .filter(|m| m.active && m.role == Role::Student && m.shift == Some(shift))
        .filter_map(|m| m.cycle.clone())
        .filter(|c| !out.contains(c))
        .collect();
    extra.sort();
    extra.dedup();
    out.extend(extra);
    out
}

fn sort_block(members: &mut [&Member]) {
    members.sort_by_key(|m| m.sort_key());
}

/// Header row plus one numbered member row each, 1..N within the block.
fn push_block(partition: &mut Partition, members: &[&Member], date: NaiveDate) {
    partition.rows.push(Row::Header {
        labels: schema::header_labels(date),
    });

    let today = weekday_abbr(date);
    for (i, member) in members.iter().enumerate() {
        partition.rows.push(Row::Member(seed_row(member, i as u32 + 1, today)));
    }
}

/// A member row in its seed state: `ABSENT` when scheduled today,
/// `NOT EXPECTED` otherwise.
pub fn seed_row(member: &Member, seq: u32, today: &str) -> MemberRow {
    let attendance = if member.is_scheduled_on(today) {
        AttendanceCell::absent()
    } else {
        AttendanceCell::not_expected()
    };

    MemberRow {
        seq,
        code: Some(member.code.clone()),
        name: member.display_name(),
        shift: member.shift.map(|s| s.label().to_string()).unwrap_or_else(|| "-".to_string()),
        days: member.days_str(),
        attendance,
    }
}
