//! Row location inside a partition.

use crate::errors::{AppError, AppResult};
use crate::ledger::doc::{Partition, Row};
use crate::models::member::Member;
use crate::utils::text::normalize_name;

/// Find the row index holding this member's record, or `None` when the
/// member was not part of the roster snapshot used at seeding time.
///
/// The stable member code is the primary key; normalized-name comparison
/// (diacritics stripped, trimmed, lowercased) remains as a compatibility
/// fallback for rows written without a code. Two or more name matches is
/// a data-quality error, not a first-wins pick.
pub fn locate(partition: &Partition, member: &Member) -> AppResult<Option<usize>> {
    for (i, row) in partition.rows.iter().enumerate() {
        if let Row::Member(m) = row
            && m.code.as_deref() == Some(member.code.as_str())
        {
            return Ok(Some(i));
        }
    }

    let wanted = normalize_name(&member.display_name());
    let mut matches = partition.rows.iter().enumerate().filter_map(|(i, row)| match row {
        Row::Member(m) if m.code.is_none() && normalize_name(&m.name) == wanted => Some(i),
        _ => None,
    });

    let first = matches.next();
    if first.is_some() && matches.next().is_some() {
        return Err(AppError::AmbiguousMember(member.display_name()));
    }
    Ok(first)
}
