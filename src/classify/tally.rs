//! Counting reasons and picking the most telling one.

use crate::types::reason::{NoReason, UnknownReason};
use std::cmp::Reverse;
use std::collections::BTreeMap;

/// How reasons are ranked when several are equally common.
pub(crate) trait Ranked: Copy + Ord {
    /// Reasons in a higher tier always beat reasons in a lower one, whatever the counts.
    fn tier(self) -> u8;
}

impl Ranked for NoReason {
    fn tier(self) -> u8 {
        if self.is_daylight() {
            0
        } else {
            1
        }
    }
}

impl Ranked for UnknownReason {
    fn tier(self) -> u8 {
        0
    }
}

/// A counter of reasons with a deterministic "most frequent" pick:
/// highest tier, then highest count, then the reason declared first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ReasonTally<R> {
    counts: BTreeMap<R, u32>,
}

impl<R: Ranked> ReasonTally<R> {
    pub fn new() -> Self {
        Self {
            counts: BTreeMap::new(),
        }
    }

    pub fn add(&mut self, reason: R) {
        *self.counts.entry(reason).or_insert(0) += 1;
    }

    pub fn most_frequent(&self) -> Option<R> {
        self.counts
            .iter()
            .max_by_key(|(reason, count)| (reason.tier(), **count, Reverse(**reason)))
            .map(|(reason, _)| *reason)
    }
}

impl<R: Ranked> FromIterator<R> for ReasonTally<R> {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        let mut tally = Self::new();
        for reason in iter {
            tally.add(reason);
        }
        tally
    }
}
