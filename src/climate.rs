//! The dollar value of a place's climate.

use crate::summary::normalized::NormalizedSummary;
use serde::{Deserialize, Serialize};

pub const DAYS_PER_YEAR: f64 = 365.0;
pub const FACTOR_NAME: &str = "Climate";

/// Values a climate by how many days a year are good enough to jog outside.
///
/// A place earns `value_of_good_weather_day` for each joggable day out of the 365
/// in a year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClimateFactor {
    pub value_of_good_weather_day: f64,
}

impl ClimateFactor {
    pub fn new(value_of_good_weather_day: f64) -> Self {
        Self {
            value_of_good_weather_day,
        }
    }

    /// Annual dollar value for a summary normalized to fractions (no scale).
    ///
    /// # Examples
    ///
    /// ```
    /// use joggability::{ClimateFactor, DayOutcome, NoReason, SummaryCounts};
    ///
    /// let counts: SummaryCounts = [DayOutcome::Yes, DayOutcome::No(NoReason::TooCold)]
    ///     .into_iter()
    ///     .collect();
    /// let normalized = counts.normalized().call().unwrap();
    /// assert_eq!(ClimateFactor::new(20.0).annual_value(&normalized), 3650.0);
    /// ```
    pub fn annual_value(&self, summary: &NormalizedSummary) -> f64 {
        self.value_of_good_weather_day * DAYS_PER_YEAR * summary.num_yes
    }
}
