//! Sunrise and sunset times for a location and local calendar day.

use crate::types::lat_lon::LatLon;
use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate, NaiveTime, Utc};
use solar_positioning::{spa, Horizon, SunriseResult};
use thiserror::Error;

/// Difference between terrestrial and universal time, in seconds. Good to a few
/// seconds for the current decades, far below the hourly resolution of the data.
const DELTA_T_SECONDS: f64 = 69.0;

#[derive(Debug, Error)]
pub enum SunError {
    #[error("Failed to calculate sunrise/sunset for {date}: {message}")]
    Calculation { date: NaiveDate, message: String },

    #[error("Date {0} cannot be represented as a timestamp")]
    InvalidDate(NaiveDate),
}

/// Sunrise and sunset of one local day, both falling on that day in local time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SunTimes {
    pub sunrise: DateTime<Utc>,
    pub sunset: DateTime<Utc>,
}

/// Computes sunrise and sunset for `date` as seen in a place whose clocks run at `utc_offset`.
///
/// During polar day the whole local day counts as daylight; during polar night
/// sunrise and sunset both sit at local noon.
pub fn sun_times(
    location: LatLon,
    date: NaiveDate,
    utc_offset: FixedOffset,
) -> Result<SunTimes, SunError> {
    let result = spa::sunrise_sunset_utc_for_horizon(
        date.year(),
        date.month(),
        date.day(),
        location.0,
        location.1,
        DELTA_T_SECONDS,
        Horizon::SunriseSunset,
    )
    .map_err(|e| SunError::Calculation {
        date,
        message: e.to_string(),
    })?;

    let utc_midnight = date.and_time(NaiveTime::MIN).and_utc();
    match result {
        SunriseResult::RegularDay {
            sunrise, sunset, ..
        } => {
            let sunrise = utc_midnight + hours(sunrise.hours());
            let mut sunset = utc_midnight + hours(sunset.hours());
            if sunset < sunrise {
                sunset += Duration::days(1);
            }
            Ok(SunTimes {
                sunrise: onto_local_date(sunrise, date, utc_offset),
                sunset: onto_local_date(sunset, date, utc_offset),
            })
        }
        SunriseResult::AllDay { .. } => {
            let start = at_time(date, NaiveTime::MIN, utc_offset)?;
            Ok(SunTimes {
                sunrise: start,
                sunset: start + Duration::days(1) - Duration::seconds(1),
            })
        }
        SunriseResult::AllNight { .. } => {
            let noon = at_time(date, NaiveTime::MIN + Duration::hours(12), utc_offset)?;
            Ok(SunTimes {
                sunrise: noon,
                sunset: noon,
            })
        }
    }
}

fn hours(value: f64) -> Duration {
    Duration::seconds((value * 3600.0).round() as i64)
}

/// The instant at which local clocks show `time` on `date`.
fn at_time(date: NaiveDate, time: NaiveTime, utc_offset: FixedOffset) -> Result<DateTime<Utc>, SunError> {
    date.and_time(time)
        .and_local_timezone(utc_offset)
        .single()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or(SunError::InvalidDate(date))
}

/// Shifts `instant` by whole days until it falls on `date` in local time.
fn onto_local_date(instant: DateTime<Utc>, date: NaiveDate, utc_offset: FixedOffset) -> DateTime<Utc> {
    let local_date = instant.with_timezone(&utc_offset).date_naive();
    instant + Duration::days((date - local_date).num_days())
}
