//! The record upsert engine: resolve → seed-if-absent → locate-or-insert
//! → classify → write → persist.

use super::classify::classify;
use super::insert::InsertLogic;
use super::locate::locate;
use super::resolve::resolve;
use super::seed::SeedLogic;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::{oplog, queries};
use crate::errors::{AppError, AppResult};
use crate::ledger::doc::{AttendanceCell, CellStatus, LedgerDoc};
use crate::ledger::store::{LedgerStore, day_lock};
use crate::models::member::Member;
use crate::models::role::Role;
use crate::utils::time::format_12h;
use chrono::NaiveDate;

pub struct CheckinLogic;

impl CheckinLogic {
    /// Record a check-in for the member with the given code.
    ///
    /// Returns whether the write was applied: `false` means the member
    /// already holds a check-in record for the day (a normal outcome,
    /// not an error). At most one successful registration per member per
    /// day; the single exception is a late, not-yet-justified cell being
    /// upgraded by a justified re-registration.
    pub fn apply(
        cfg: &Config,
        pool: &mut DbPool,
        code: &str,
        date: NaiveDate,
        time: &str,
        justified: bool,
    ) -> AppResult<bool> {
        let member = queries::find_member(pool, code)?
            .ok_or_else(|| AppError::UnknownMember(code.to_string()))?;

        Self::apply_for(cfg, pool, &member, date, time, justified)
    }

    pub fn apply_for(
        cfg: &Config,
        pool: &mut DbPool,
        member: &Member,
        date: NaiveDate,
        time: &str,
        justified: bool,
    ) -> AppResult<bool> {
        // 1. Resolve target file/partition; aborts before any write when
        //    the member cannot be placed.
        let placement = resolve(date, member)?;
        let partition_name = placement.partition.name();

        // Single writer per day: hold the lock across the whole
        // read-modify-write cycle.
        let lock = day_lock(date);
        let _guard = lock.lock().unwrap_or_else(|e| e.into_inner());

        let store = LedgerStore::new(cfg.ledgers_dir());
        let mut doc = store.load(date)?.unwrap_or_else(|| LedgerDoc::new(date));

        // 2. First touch of the day for this partition: re-fetch the full
        //    roster and seed it.
        if doc.partition(partition_name).is_none() {
            let roster = queries::load_members(pool)?;
            let seeded = SeedLogic::seed_partition(
                placement.partition,
                &roster,
                date,
                &cfg.cycle_order,
            );
            doc.partitions.push(seeded);

            if let Err(e) = oplog::record(&pool.conn, "seed", partition_name, &placement.file) {
                eprintln!("⚠️ Failed to write internal log: {}", e);
            }
        }

        let partition = doc
            .partition_mut(partition_name)
            .ok_or_else(|| AppError::Ledger(format!("partition {partition_name} missing after seed")))?;

        // 3. Locate the member's row, or plan and insert one for a member
        //    enrolled after seeding.
        let row_idx = match locate(partition, member)? {
            Some(i) => i,
            None => InsertLogic::insert(partition, placement.partition, member, date),
        };

        let row = partition
            .member_row_mut(row_idx)
            .ok_or_else(|| AppError::Ledger(format!("row {row_idx} is not a member row")))?;

        // 4. Idempotency guard: at most one successful check-in per day.
        if row.attendance.has_record() && !(row.attendance.is_unjustified_late() && justified) {
            return Ok(false);
        }

        // 5. Classify punctuality for students; instructors just log.
        let status = match member.role {
            Role::Instructor => CellStatus::Logged,
            Role::Student => {
                let shift = member
                    .shift
                    .ok_or_else(|| AppError::MissingShift(member.code.clone()))?;
                classify(cfg.schedule_for(shift), time).into()
            }
        };

        // 6. Write value and presentation state.
        row.attendance = AttendanceCell::check_in(&format_12h(time), status, justified);

        // 7. Persist the whole document; failures propagate so the caller
        //    never sees a success that did not reach storage.
        store.save(date, &doc)?;

        // Audit trail is best effort and never blocks a recorded check-in.
        if let Err(e) = oplog::record(
            &pool.conn,
            "checkin",
            &member.code,
            &format!("{} {} {}", partition_name, placement.file, time),
        ) {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }

        Ok(true)
    }
}
