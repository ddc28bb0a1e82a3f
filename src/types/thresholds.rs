//! Tunable limits that decide what counts as good jogging weather.

use bon::Builder;
use serde::{Deserialize, Serialize};

pub const MIN_TEMP_C: f64 = 12.0;
pub const MAX_TEMP_C: f64 = 28.0;
pub const MAX_PRECIP_1HR_MM: f64 = 1.0;
/// Only consulted when a day's precipitation data is too sparse to use.
/// Predicts `precipitation > MAX_PRECIP_1HR_MM` with an F1 score of only ~0.28.
pub const MAX_RELATIVE_HUMIDITY_PCT: f64 = 87.0;
pub const MIN_CONSEC_HOURS: usize = 3;
/// Precipitation is used for a day only if less than this fraction of its rows lack it.
pub const PRECIP_MISSING_CUTOFF: f64 = 0.05;

/// Limits used when labeling hours and scanning a day for a joggable window.
///
/// All fields have defaults, so the builder only needs the ones you want to change.
/// Deserializing also fills absent fields with the defaults.
///
/// # Examples
///
/// ```
/// use joggability::Thresholds;
///
/// let strict = Thresholds::builder().max_temp_c(25.0).min_consec_hours(4).build();
/// assert_eq!(strict.min_temp_c, 12.0);
/// assert_eq!(strict.min_consec_hours, 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Builder, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    #[builder(default = MIN_TEMP_C)]
    pub min_temp_c: f64,
    #[builder(default = MAX_TEMP_C)]
    pub max_temp_c: f64,
    #[builder(default = MAX_PRECIP_1HR_MM)]
    pub max_precip_1hr_mm: f64,
    #[builder(default = MAX_RELATIVE_HUMIDITY_PCT)]
    pub max_relative_humidity_pct: f64,
    #[builder(default = MIN_CONSEC_HOURS)]
    pub min_consec_hours: usize,
    #[builder(default = PRECIP_MISSING_CUTOFF)]
    pub precip_missing_cutoff: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self::builder().build()
    }
}
