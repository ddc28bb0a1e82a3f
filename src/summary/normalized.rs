//! Turning counts into rates.

use crate::summary::counts::SummaryCounts;
use crate::summary::error::SummaryError;
use crate::types::reason::{NoReason, UnknownReason};
use bon::bon;
use serde::Serialize;
use std::collections::BTreeMap;

/// A [`SummaryCounts`] with every count divided by the number of days, and
/// optionally scaled and rounded.
///
/// This is a read-only output; it cannot be combined with other summaries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedSummary {
    pub num_yes: f64,
    pub no_reasons: BTreeMap<NoReason, f64>,
    pub unknown_reasons: BTreeMap<UnknownReason, f64>,
}

impl NormalizedSummary {
    pub fn num_no(&self) -> f64 {
        self.no_reasons.values().sum()
    }

    pub fn num_unknown(&self) -> f64 {
        self.unknown_reasons.values().sum()
    }

    /// Sum of all values: 1.0 (times the scale) up to rounding.
    pub fn total(&self) -> f64 {
        self.num_yes + self.num_no() + self.num_unknown()
    }
}

#[bon]
impl SummaryCounts {
    /// Divides every count by [`SummaryCounts::total`].
    ///
    /// * `.scale(f64)`: Optional. Multiplies every fraction, e.g. `100.0` for percentages
    ///   or `365.0` for days per year.
    /// * `.round_digits(u32)`: Optional. Rounds every value, after scaling, to this many
    ///   digits after the decimal point.
    ///
    /// # Errors
    ///
    /// Returns [`SummaryError::DivisionUndefined`] if no days were summarized.
    ///
    /// # Examples
    ///
    /// ```
    /// use joggability::{DayOutcome, NoReason, SummaryCounts};
    ///
    /// let counts: SummaryCounts = [DayOutcome::Yes, DayOutcome::Yes, DayOutcome::No(NoReason::TooCold)]
    ///     .into_iter()
    ///     .collect();
    /// let percent = counts.normalized().scale(100.0).round_digits(1).call().unwrap();
    /// assert_eq!(percent.num_yes, 66.7);
    /// assert_eq!(percent.no_reasons[&NoReason::TooCold], 33.3);
    /// ```
    #[builder]
    pub fn normalized(
        &self,
        round_digits: Option<u32>,
        scale: Option<f64>,
    ) -> Result<NormalizedSummary, SummaryError> {
        let total = self.total();
        if total == 0 {
            return Err(SummaryError::DivisionUndefined);
        }
        let total = total as f64;
        let rate = |count: u64| {
            let mut value = count as f64 / total;
            if let Some(scale) = scale {
                value *= scale;
            }
            match round_digits {
                Some(digits) => round_to(value, digits),
                None => value,
            }
        };

        Ok(NormalizedSummary {
            num_yes: rate(self.num_yes),
            no_reasons: self
                .no_reasons
                .iter()
                .map(|(reason, count)| (*reason, rate(*count)))
                .collect(),
            unknown_reasons: self
                .unknown_reasons
                .iter()
                .map(|(reason, count)| (*reason, rate(*count)))
                .collect(),
        })
    }
}

fn round_to(value: f64, digits: u32) -> f64 {
    let factor = 10f64.powi(digits as i32);
    (value * factor).round() / factor
}
