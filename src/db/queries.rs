//! Roster store queries. The ledger engine treats the roster as
//! read-only and re-fetches it whenever it seeds a new partition.

use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::member::Member;
use crate::models::role::Role;
use crate::models::shift::Shift;
use rusqlite::{Result, Row, params};

const MEMBER_COLUMNS: &str = "code, first_name, last_name, role, cycle, shift, days, active";

pub fn map_row(row: &Row) -> Result<Member> {
    let role_str: String = row.get("role")?;
    let role = Role::from_db_str(&role_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidRole(role_str.clone())),
        )
    })?;

    let shift_str: Option<String> = row.get("shift")?;
    let shift = match shift_str {
        None => None,
        Some(s) => Some(Shift::from_db_str(&s).ok_or_else(|| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Text,
                Box::new(AppError::InvalidShift(s.clone())),
            )
        })?),
    };

    let days_raw: String = row.get("days")?;

    Ok(Member {
        code: row.get("code")?,
        first_name: row.get("first_name")?,
        last_name: row.get("last_name")?,
        role,
        cycle: row.get("cycle")?,
        shift,
        days: Member::parse_days(&days_raw),
        active: row.get::<_, i64>("active")? != 0,
    })
}

/// Full roster, ordered for display. Seeding applies its own sort.
pub fn load_members(pool: &mut DbPool) -> AppResult<Vec<Member>> {
    let mut stmt = pool.conn.prepare(&format!(
        "SELECT {MEMBER_COLUMNS} FROM members ORDER BY last_name ASC, first_name ASC"
    ))?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn find_member(pool: &mut DbPool, code: &str) -> AppResult<Option<Member>> {
    let mut stmt = pool
        .conn
        .prepare(&format!("SELECT {MEMBER_COLUMNS} FROM members WHERE code = ?1"))?;

    let mut rows = stmt.query_map([code], map_row)?;
    match rows.next() {
        Some(m) => Ok(Some(m?)),
        None => Ok(None),
    }
}

pub fn insert_member(pool: &mut DbPool, member: &Member) -> AppResult<()> {
    if find_member(pool, &member.code)?.is_some() {
        return Err(AppError::DuplicateMember(member.code.clone()));
    }

    pool.conn.execute(
        "INSERT INTO members (code, first_name, last_name, role, cycle, shift, days, active)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            member.code,
            member.first_name,
            member.last_name,
            member.role.to_db_str(),
            member.cycle,
            member.shift.map(|s| s.to_db_str()),
            member.days_db_str(),
            if member.active { 1 } else { 0 },
        ],
    )?;
    Ok(())
}

/// Deactivate instead of delete: historical ledgers keep referencing the
/// member by code.
pub fn deactivate_member(pool: &mut DbPool, code: &str) -> AppResult<bool> {
    let changed = pool
        .conn
        .execute("UPDATE members SET active = 0 WHERE code = ?1", [code])?;
    Ok(changed > 0)
}
