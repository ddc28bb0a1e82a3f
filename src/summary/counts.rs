//! Running counts of day outcomes.

use crate::types::outcome::DayOutcome;
use crate::types::reason::{NoReason, UnknownReason};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How many days were joggable, and why the others weren't.
///
/// Counts are only ever built up with [`SummaryCounts::combine`], which is
/// commutative and associative with [`SummaryCounts::empty`] as its identity.
/// Days can therefore be classified in any order, on any number of workers, and
/// merged afterwards.
///
/// Reasons with a zero count are never stored, so two summaries of the same
/// outcomes compare equal however they were put together.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryCounts {
    pub num_yes: u64,
    pub no_reasons: BTreeMap<NoReason, u64>,
    pub unknown_reasons: BTreeMap<UnknownReason, u64>,
}

impl SummaryCounts {
    /// The summary of zero days.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merges two summaries into one covering the days of both.
    pub fn combine(mut self, other: SummaryCounts) -> SummaryCounts {
        self.num_yes += other.num_yes;
        for (reason, count) in other.no_reasons {
            *self.no_reasons.entry(reason).or_insert(0) += count;
        }
        for (reason, count) in other.unknown_reasons {
            *self.unknown_reasons.entry(reason).or_insert(0) += count;
        }
        self
    }

    /// Folds any number of summaries, starting from [`SummaryCounts::empty`].
    ///
    /// # Examples
    ///
    /// ```
    /// use joggability::{DayOutcome, NoReason, SummaryCounts};
    ///
    /// let counts = SummaryCounts::sum(
    ///     [DayOutcome::Yes, DayOutcome::No(NoReason::TooHot), DayOutcome::Yes]
    ///         .into_iter()
    ///         .map(SummaryCounts::from),
    /// );
    /// assert_eq!(counts.num_yes, 2);
    /// assert_eq!(counts.total(), 3);
    /// ```
    pub fn sum<I: IntoIterator<Item = SummaryCounts>>(summaries: I) -> SummaryCounts {
        summaries
            .into_iter()
            .fold(SummaryCounts::empty(), SummaryCounts::combine)
    }

    pub fn num_no(&self) -> u64 {
        self.no_reasons.values().sum()
    }

    pub fn num_unknown(&self) -> u64 {
        self.unknown_reasons.values().sum()
    }

    /// Number of days folded into this summary.
    pub fn total(&self) -> u64 {
        self.num_yes + self.num_no() + self.num_unknown()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

impl From<DayOutcome> for SummaryCounts {
    fn from(outcome: DayOutcome) -> Self {
        let mut counts = SummaryCounts::empty();
        match outcome {
            DayOutcome::Yes => counts.num_yes = 1,
            DayOutcome::No(reason) => {
                counts.no_reasons.insert(reason, 1);
            }
            DayOutcome::Unknown(reason) => {
                counts.unknown_reasons.insert(reason, 1);
            }
        }
        counts
    }
}

impl FromIterator<DayOutcome> for SummaryCounts {
    fn from_iter<I: IntoIterator<Item = DayOutcome>>(iter: I) -> Self {
        SummaryCounts::sum(iter.into_iter().map(SummaryCounts::from))
    }
}
