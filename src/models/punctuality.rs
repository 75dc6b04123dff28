use serde::Serialize;

/// Outcome of classifying a student check-in time against a shift schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Punctuality {
    OnTime,
    Tolerance,
    Late,
}

impl Punctuality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Punctuality::OnTime => "on_time",
            Punctuality::Tolerance => "tolerance",
            Punctuality::Late => "late",
        }
    }

    pub fn is_late(&self) -> bool {
        matches!(self, Punctuality::Late)
    }
}
