//! ANSI color helpers for terminal output.

use crate::ledger::doc::CellStatus;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const MAGENTA: &str = "\x1b[35m";
pub const CYAN: &str = "\x1b[36m";

/// Terminal color mirroring the cell's persisted state color.
pub fn color_for_status(status: CellStatus) -> &'static str {
    match status {
        CellStatus::Absent => RED,
        CellStatus::NotExpected => GREY,
        CellStatus::OnTime => GREEN,
        CellStatus::Tolerance => YELLOW,
        CellStatus::Late => MAGENTA,
        CellStatus::Logged => CYAN,
    }
}
