//! Deciding whether a single day had a window of good jogging weather.
//!
//! A day is classified in three steps:
//!
//! 1. every observed hour gets a [`ReasonCode`] (see [`labeling`]);
//! 2. the hours are laid out on an hourly grid with explicit gaps (see [`slots`]);
//! 3. a window of `min_consec_hours` slots slides over the grid. The first window
//!    made only of `Yes` hours makes the day a `Yes`. Otherwise every window votes
//!    for the reason that best explains it, and the day takes the most common vote.
//!    Any window that could not be decided because of missing data makes the day
//!    `Unknown`.

pub mod labeling;
pub mod slots;
pub(crate) mod tally;

use crate::classify::labeling::label_hours;
use crate::classify::slots::fill_gaps;
use crate::classify::tally::ReasonTally;
use crate::types::day_input::DayInput;
use crate::types::observation::{HourSlot, HourlyObservation};
use crate::types::outcome::DayOutcome;
use crate::types::reason::{NoReason, ReasonCode, UnknownReason};
use crate::types::thresholds::Thresholds;
use chrono::{DateTime, Utc};

/// Classifies days using a fixed set of [`Thresholds`].
///
/// Classification is a pure function of its inputs, so one classifier can be
/// copied freely across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DayClassifier {
    thresholds: Thresholds,
}

impl DayClassifier {
    pub fn new(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// Classifies one calendar day of hourly observations.
    ///
    /// `observations` must all belong to the same day; hours may be missing.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use joggability::{DayClassifier, DayOutcome, HourlyObservation, Thresholds};
    ///
    /// let at = |h| Utc.with_ymd_and_hms(2023, 6, 1, h, 0, 0).unwrap();
    /// let day: Vec<_> = (0..24)
    ///     .map(|h| HourlyObservation::new(at(h), 20.0, 0.0, 50.0))
    ///     .collect();
    ///
    /// let classifier = DayClassifier::new(Thresholds::default());
    /// assert_eq!(classifier.classify(&day, at(6), at(20)), DayOutcome::Yes);
    /// ```
    pub fn classify(
        &self,
        observations: &[HourlyObservation],
        sunrise: DateTime<Utc>,
        sunset: DateTime<Utc>,
    ) -> DayOutcome {
        let window_len = self.thresholds.min_consec_hours.max(1);
        if observations.len() < window_len {
            return DayOutcome::Unknown(UnknownReason::MissingHour);
        }

        let mut labeled = label_hours(observations, sunrise, sunset, &self.thresholds);
        labeled.sort_by_key(|hour| hour.observation.timestamp_utc);
        let slots = fill_gaps(&labeled);

        let mut no_votes = ReasonTally::new();
        let mut unknown_votes = ReasonTally::new();

        for window in slots.windows(window_len) {
            if window.iter().all(HourSlot::is_yes) {
                return DayOutcome::Yes;
            }

            let window_no: ReasonTally<NoReason> = window
                .iter()
                .filter_map(|slot| match slot.reason() {
                    Some(ReasonCode::No(reason)) => Some(reason),
                    _ => None,
                })
                .collect();
            if let Some(reason) = window_no.most_frequent() {
                no_votes.add(reason);
                continue;
            }

            let window_unknown: ReasonTally<UnknownReason> = window
                .iter()
                .filter_map(|slot| match slot.reason() {
                    None => Some(UnknownReason::MissingHour),
                    Some(ReasonCode::Unknown(reason)) => Some(reason),
                    _ => None,
                })
                .collect();
            if let Some(reason) = window_unknown.most_frequent() {
                unknown_votes.add(reason);
            }
        }

        if let Some(reason) = unknown_votes.most_frequent() {
            DayOutcome::Unknown(reason)
        } else if let Some(reason) = no_votes.most_frequent() {
            DayOutcome::No(reason)
        } else {
            DayOutcome::Unknown(UnknownReason::MissingHour)
        }
    }

    pub fn classify_input(&self, day: &DayInput) -> DayOutcome {
        self.classify(&day.observations, day.sunrise, day.sunset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 6, 1, hour, 0, 0).unwrap()
    }

    fn full_day(temp: f64) -> Vec<HourlyObservation> {
        (0..24)
            .map(|h| HourlyObservation::new(at(h), temp, 0.0, 50.0))
            .collect()
    }

    fn classify(observations: &[HourlyObservation], sunrise: u32, sunset: u32) -> DayOutcome {
        DayClassifier::default().classify(observations, at(sunrise), at(sunset))
    }

    #[test]
    fn pleasant_day_is_yes() {
        assert_eq!(classify(&full_day(20.0), 6, 20), DayOutcome::Yes);
    }

    #[test]
    fn cold_day_is_too_cold() {
        assert_eq!(classify(&full_day(5.0), 6, 20), DayOutcome::No(NoReason::TooCold));
    }

    #[test]
    fn hot_day_is_too_hot() {
        assert_eq!(classify(&full_day(33.0), 6, 20), DayOutcome::No(NoReason::TooHot));
    }

    #[test]
    fn no_rows_is_missing_hour() {
        assert_eq!(classify(&[], 6, 20), DayOutcome::Unknown(UnknownReason::MissingHour));
        let strict = DayClassifier::new(Thresholds::builder().min_temp_c(-50.0).build());
        assert_eq!(
            strict.classify(&[], at(6), at(20)),
            DayOutcome::Unknown(UnknownReason::MissingHour)
        );
    }

    #[test]
    fn too_few_rows_is_missing_hour() {
        let day = full_day(20.0);
        assert_eq!(
            classify(&day[10..12], 6, 20),
            DayOutcome::Unknown(UnknownReason::MissingHour)
        );
        // Exactly enough rows is evaluated normally.
        assert_eq!(classify(&day[10..13], 6, 20), DayOutcome::Yes);
    }

    #[test]
    fn long_gap_through_daylight_is_unknown() {
        let day: Vec<_> = full_day(20.0)
            .into_iter()
            .enumerate()
            .filter(|(h, _)| *h <= 4 || *h >= 20)
            .map(|(_, o)| o)
            .collect();
        assert_eq!(classify(&day, 6, 20), DayOutcome::Unknown(UnknownReason::MissingHour));
    }

    #[test]
    fn window_must_be_contiguous() {
        // Good hours at 10, 11 and 13 with 12 missing never form a 3-hour window.
        let day: Vec<_> = full_day(20.0)
            .into_iter()
            .enumerate()
            .filter(|(h, _)| [10, 11, 13].contains(h))
            .map(|(_, o)| o)
            .collect();
        assert_eq!(classify(&day, 6, 20), DayOutcome::Unknown(UnknownReason::MissingHour));
    }

    #[test]
    fn unsorted_input_is_handled() {
        let mut day = full_day(20.0);
        day.reverse();
        assert_eq!(classify(&day, 6, 20), DayOutcome::Yes);
    }

    #[test]
    fn short_daylight_without_good_window_is_too_early_or_late() {
        // Only two daylight hours: every window touches darkness.
        let outcome = classify(&full_day(20.0), 11, 12);
        assert!(matches!(
            outcome,
            DayOutcome::No(NoReason::TooEarly) | DayOutcome::No(NoReason::TooLate)
        ));
    }

    #[test]
    fn darkness_never_explains_a_day_when_weather_does() {
        // Daylight is 10..=12 and the middle hour is cold. Most windows are in the
        // dark, but the cold hour is the better explanation.
        let mut day = full_day(20.0);
        day[11].temperature_c = Some(5.0);
        assert_eq!(classify(&day, 10, 12), DayOutcome::No(NoReason::TooCold));
    }

    #[test]
    fn missing_precipitation_makes_window_unknown() {
        let mut day = full_day(20.0);
        day[7].precipitation_1hr_mm = None;
        assert_eq!(
            classify(&day, 6, 8),
            DayOutcome::Unknown(UnknownReason::MissingPrecip)
        );
    }

    #[test]
    fn missing_temperature_makes_window_unknown() {
        let mut day = full_day(20.0);
        day[7].temperature_c = None;
        assert_eq!(
            classify(&day, 6, 8),
            DayOutcome::Unknown(UnknownReason::MissingTemp)
        );
    }

    #[test]
    fn humidity_decides_rain_without_precipitation_data() {
        let mut day = full_day(20.0);
        for observation in &mut day {
            observation.precipitation_1hr_mm = None;
            observation.relative_humidity_pct = Some(95.0);
        }
        assert_eq!(classify(&day, 6, 20), DayOutcome::No(NoReason::TooMuchRain));

        for observation in &mut day {
            observation.relative_humidity_pct = Some(60.0);
        }
        assert_eq!(classify(&day, 6, 20), DayOutcome::Yes);
    }

    #[test]
    fn rainy_afternoon_still_leaves_a_morning_window() {
        let mut day = full_day(20.0);
        for observation in &mut day[12..] {
            observation.precipitation_1hr_mm = Some(3.0);
        }
        assert_eq!(classify(&day, 6, 20), DayOutcome::Yes);
    }

    #[test]
    fn longer_window_requirement() {
        let classifier = DayClassifier::new(Thresholds::builder().min_consec_hours(5).build());
        let mut day = full_day(20.0);
        for h in [9, 14] {
            day[h].precipitation_1hr_mm = Some(3.0);
        }
        // 10..=13 is only four hours long, but 15..=20 still qualifies.
        assert_eq!(classifier.classify(&day, at(6), at(20)), DayOutcome::Yes);
        assert_eq!(
            classifier.classify(&day, at(6), at(17)),
            DayOutcome::No(NoReason::TooMuchRain)
        );
    }
}
