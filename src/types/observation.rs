//! Hourly weather observations and their derived labels.

use crate::types::reason::ReasonCode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One row of hourly weather data for a station.
///
/// Any of the measured fields may be missing; the classifier treats missing
/// values as their own reasons instead of guessing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HourlyObservation {
    pub timestamp_utc: DateTime<Utc>,
    pub temperature_c: Option<f64>,
    pub precipitation_1hr_mm: Option<f64>,
    pub relative_humidity_pct: Option<f64>,
}

impl HourlyObservation {
    /// Creates an observation with every measurement present.
    pub fn new(
        timestamp_utc: DateTime<Utc>,
        temperature_c: f64,
        precipitation_1hr_mm: f64,
        relative_humidity_pct: f64,
    ) -> Self {
        Self {
            timestamp_utc,
            temperature_c: Some(temperature_c),
            precipitation_1hr_mm: Some(precipitation_1hr_mm),
            relative_humidity_pct: Some(relative_humidity_pct),
        }
    }
}

/// An observation together with the reason code computed for it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabeledHour {
    pub observation: HourlyObservation,
    pub reason: ReasonCode,
}

/// One hour of a day: either a labeled observation or a hole in the data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HourSlot {
    Observed(LabeledHour),
    Gap,
}

impl HourSlot {
    pub fn reason(&self) -> Option<ReasonCode> {
        match self {
            HourSlot::Observed(hour) => Some(hour.reason),
            HourSlot::Gap => None,
        }
    }

    pub fn is_yes(&self) -> bool {
        self.reason() == Some(ReasonCode::Yes)
    }
}
