//! Per-hour labeling.

use crate::types::observation::{HourlyObservation, LabeledHour};
use crate::types::reason::{NoReason, ReasonCode, UnknownReason};
use crate::types::thresholds::Thresholds;
use chrono::{DateTime, Utc};

/// Whether a batch of observations has precipitation data good enough to rely on.
///
/// When it doesn't, relative humidity stands in as a rain predictor and missing
/// precipitation is ignored. An empty batch is never usable.
pub fn precipitation_usable(observations: &[HourlyObservation], missing_cutoff: f64) -> bool {
    if observations.is_empty() {
        return false;
    }
    let missing = observations
        .iter()
        .filter(|o| o.precipitation_1hr_mm.is_none())
        .count();
    (missing as f64 / observations.len() as f64) < missing_cutoff
}

/// Labels every observation, returning new values and leaving the input untouched.
pub fn label_hours(
    observations: &[HourlyObservation],
    sunrise: DateTime<Utc>,
    sunset: DateTime<Utc>,
    thresholds: &Thresholds,
) -> Vec<LabeledHour> {
    let use_precipitation = precipitation_usable(observations, thresholds.precip_missing_cutoff);
    observations
        .iter()
        .map(|observation| LabeledHour {
            observation: *observation,
            reason: label_hour(observation, sunrise, sunset, thresholds, use_precipitation),
        })
        .collect()
}

/// Checks run from the strongest reason down; the first that applies wins.
///
/// Daylight beats rain, rain beats temperature, and any measured disqualification
/// beats missing data.
pub fn label_hour(
    observation: &HourlyObservation,
    sunrise: DateTime<Utc>,
    sunset: DateTime<Utc>,
    thresholds: &Thresholds,
    use_precipitation: bool,
) -> ReasonCode {
    let ts = observation.timestamp_utc;
    let temperature = observation.temperature_c;
    let too_wet = if use_precipitation {
        observation
            .precipitation_1hr_mm
            .is_some_and(|p| p > thresholds.max_precip_1hr_mm)
    } else {
        observation
            .relative_humidity_pct
            .is_some_and(|rh| rh > thresholds.max_relative_humidity_pct)
    };

    if ts > sunset {
        ReasonCode::No(NoReason::TooLate)
    } else if ts < sunrise {
        ReasonCode::No(NoReason::TooEarly)
    } else if too_wet {
        ReasonCode::No(NoReason::TooMuchRain)
    } else if temperature.is_some_and(|t| t > thresholds.max_temp_c) {
        ReasonCode::No(NoReason::TooHot)
    } else if temperature.is_some_and(|t| t < thresholds.min_temp_c) {
        ReasonCode::No(NoReason::TooCold)
    } else if use_precipitation && observation.precipitation_1hr_mm.is_none() {
        ReasonCode::Unknown(UnknownReason::MissingPrecip)
    } else if temperature.is_none() {
        ReasonCode::Unknown(UnknownReason::MissingTemp)
    } else {
        ReasonCode::Yes
    }
}
