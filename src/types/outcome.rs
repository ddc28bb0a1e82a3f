use crate::types::reason::{NoReason, UnknownReason};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The verdict for a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayOutcome {
    /// There is at least one long enough window of good jogging weather.
    Yes,
    /// Every window is ruled out; the reason is the most informative explanation.
    No(NoReason),
    /// Some window could not be decided because data is missing.
    Unknown(UnknownReason),
}

impl DayOutcome {
    pub fn is_yes(&self) -> bool {
        matches!(self, DayOutcome::Yes)
    }
}

impl fmt::Display for DayOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayOutcome::Yes => f.write_str("YES"),
            DayOutcome::No(reason) => write!(f, "NO({reason})"),
            DayOutcome::Unknown(reason) => write!(f, "UNKNOWN({reason})"),
        }
    }
}
