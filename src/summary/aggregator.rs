//! Classifying many days and folding the results into one summary.

use crate::classify::DayClassifier;
use crate::summary::counts::SummaryCounts;
use crate::summary::error::SummaryError;
use crate::types::day_input::DayInput;
use crate::types::thresholds::Thresholds;
use crate::types::window::DateRange;
use chrono::{Datelike, NaiveDate};
use log::{debug, info};
use std::collections::BTreeMap;
use tokio::task;

/// Supplies the hourly observations and sun times for a day.
///
/// All fetching happens behind this trait; classification itself never blocks.
pub trait DaySource {
    type Error;

    fn day_input(&self, date: NaiveDate) -> Result<DayInput, Self::Error>;
}

impl DaySource for BTreeMap<NaiveDate, DayInput> {
    type Error = SummaryError;

    fn day_input(&self, date: NaiveDate) -> Result<DayInput, Self::Error> {
        self.get(&date)
            .cloned()
            .ok_or(SummaryError::MissingDay(date))
    }
}

/// Runs a [`DayClassifier`] over a range of days and sums up the outcomes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SummaryAggregator {
    classifier: DayClassifier,
}

impl SummaryAggregator {
    pub fn new(thresholds: Thresholds) -> Self {
        Self {
            classifier: DayClassifier::new(thresholds),
        }
    }

    pub fn classifier(&self) -> &DayClassifier {
        &self.classifier
    }

    /// Classifies each day of `range`, in order, pulling its input from `source`.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first error from `source`.
    pub fn summarize<S: DaySource>(
        &self,
        source: &S,
        range: &DateRange,
    ) -> Result<SummaryCounts, S::Error> {
        range.days().try_fold(SummaryCounts::empty(), |counts, date| {
            let day = source.day_input(date)?;
            let outcome = self.classifier.classify_input(&day);
            debug!("{date}: {outcome}");
            Ok(counts.combine(outcome.into()))
        })
    }

    /// Classifies already fetched days.
    pub fn summarize_days(&self, days: &[DayInput]) -> SummaryCounts {
        days.iter()
            .map(|day| self.classifier.classify_input(day))
            .collect()
    }

    /// Classifies already fetched days with one blocking worker per calendar year,
    /// then merges the yearly summaries.
    pub async fn summarize_by_year(&self, days: Vec<DayInput>) -> Result<SummaryCounts, SummaryError> {
        let mut by_year: BTreeMap<i32, Vec<DayInput>> = BTreeMap::new();
        for day in days {
            by_year.entry(day.date.year()).or_default().push(day);
        }

        let handles: Vec<_> = by_year
            .into_iter()
            .map(|(year, days)| {
                let aggregator = *self;
                let handle = task::spawn_blocking(move || aggregator.summarize_days(&days));
                (year, handle)
            })
            .collect();

        let mut total = SummaryCounts::empty();
        for (year, handle) in handles {
            let yearly = handle.await?;
            info!(
                "Summarized {} days of {}: {} joggable",
                yearly.total(),
                year,
                yearly.num_yes
            );
            total = total.combine(yearly);
        }
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::observation::HourlyObservation;
    use crate::types::outcome::DayOutcome;
    use crate::types::reason::{NoReason, UnknownReason};
    use chrono::{Duration, TimeZone, Utc};

    fn day(date: NaiveDate, temp: Option<f64>) -> DayInput {
        let midnight = Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0).unwrap());
        let observations = match temp {
            Some(temp) => (0..24)
                .map(|h| HourlyObservation::new(midnight + Duration::hours(h), temp, 0.0, 50.0))
                .collect(),
            None => Vec::new(),
        };
        DayInput {
            date,
            observations,
            sunrise: midnight + Duration::hours(6),
            sunset: midnight + Duration::hours(20),
        }
    }

    /// Two years of days: every 7th day is cold, every 11th has no data.
    fn days() -> Vec<DayInput> {
        let start = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap();
        (0..730)
            .map(|i| {
                let date = start + Duration::days(i);
                let temp = if i % 11 == 0 {
                    None
                } else if i % 7 == 0 {
                    Some(3.0)
                } else {
                    Some(20.0)
                };
                day(date, temp)
            })
            .collect()
    }

    #[test]
    fn summarize_over_source() {
        let source: BTreeMap<NaiveDate, DayInput> =
            days().into_iter().map(|d| (d.date, d)).collect();
        let range = DateRange::new(
            NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2022, 1, 14).unwrap(),
        )
        .unwrap();

        let counts = SummaryAggregator::default().summarize(&source, &range).unwrap();
        // Day 0 is missing, day 7 is cold, day 11 is missing.
        assert_eq!(counts.total(), 14);
        assert_eq!(counts.num_yes, 11);
        assert_eq!(counts.no_reasons.get(&NoReason::TooCold), Some(&1));
        assert_eq!(counts.unknown_reasons.get(&UnknownReason::MissingHour), Some(&2));
    }

    #[test]
    fn missing_day_stops_the_summary() {
        let source: BTreeMap<NaiveDate, DayInput> = BTreeMap::new();
        let range = DateRange::new(
            NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2022, 1, 2).unwrap(),
        )
        .unwrap();
        let result = SummaryAggregator::default().summarize(&source, &range);
        assert!(matches!(
            result,
            Err(SummaryError::MissingDay(date)) if date == NaiveDate::from_ymd_opt(2022, 1, 1).unwrap()
        ));
    }

    #[test]
    fn custom_thresholds_are_used() {
        let aggregator = SummaryAggregator::new(Thresholds::builder().max_temp_c(15.0).build());
        let counts = aggregator.summarize_days(&[day(NaiveDate::from_ymd_opt(2022, 7, 1).unwrap(), Some(20.0))]);
        assert_eq!(counts.no_reasons.get(&NoReason::TooHot), Some(&1));
        assert_eq!(
            aggregator.classifier().classify_input(&day(NaiveDate::from_ymd_opt(2022, 7, 1).unwrap(), Some(14.0))),
            DayOutcome::Yes
        );
    }

    #[tokio::test]
    async fn parallel_matches_sequential() {
        let aggregator = SummaryAggregator::default();
        let sequential = aggregator.summarize_days(&days());
        let parallel = aggregator.summarize_by_year(days()).await.unwrap();
        assert_eq!(sequential, parallel);
        assert_eq!(parallel.total(), 730);
    }

    #[tokio::test]
    async fn parallel_over_nothing_is_empty() {
        let counts = SummaryAggregator::default()
            .summarize_by_year(Vec::new())
            .await
            .unwrap();
        assert!(counts.is_empty());
    }
}
