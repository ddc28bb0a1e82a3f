//! Cutting a station's hourly record into local calendar days.

use crate::error::JoggabilityError;
use crate::summary::aggregator::DaySource;
use crate::sun::sun_times;
use crate::types::day_input::DayInput;
use crate::types::lat_lon::LatLon;
use crate::types::observation::HourlyObservation;
use crate::types::window::DateRange;
use crate::weather_data::hourly_frame::HourlyFrame;
use chrono::{Duration, FixedOffset, NaiveDate};
use log::{debug, info};
use std::collections::BTreeMap;

/// Observations of one station over a date range, grouped by local day.
///
/// All weather data is collected up front by [`StationDaySource::load`], so
/// handing out a day only computes that day's sun times.
///
/// Local days are cut with one fixed `utc_offset` for the whole range. Daylight
/// saving time is not followed: in a zone that observes it, pass the standard-time
/// offset, and local midnight is then an hour early during summer time.
#[derive(Debug, Clone)]
pub struct StationDaySource {
    location: LatLon,
    utc_offset: FixedOffset,
    days: BTreeMap<NaiveDate, Vec<HourlyObservation>>,
}

impl StationDaySource {
    /// Collects the observations for every local day in `range`.
    ///
    /// A local day runs from local midnight (inclusive) to the next local midnight
    /// (exclusive), which can span two UTC dates, so one extra UTC day is read on
    /// each side of the range.
    pub fn load(
        frame: &HourlyFrame,
        location: LatLon,
        utc_offset: FixedOffset,
        range: &DateRange,
    ) -> Result<Self, JoggabilityError> {
        let observations = frame.observations(
            range.start - Duration::days(1),
            range.end + Duration::days(1),
        )?;
        info!(
            "Loaded {} observations from station {} for {} days",
            observations.len(),
            frame.station(),
            range.num_days()
        );
        Ok(Self::from_observations(observations, location, utc_offset, range))
    }

    pub fn from_observations(
        observations: Vec<HourlyObservation>,
        location: LatLon,
        utc_offset: FixedOffset,
        range: &DateRange,
    ) -> Self {
        let mut days: BTreeMap<NaiveDate, Vec<HourlyObservation>> = BTreeMap::new();
        for observation in observations {
            let local_date = observation
                .timestamp_utc
                .with_timezone(&utc_offset)
                .date_naive();
            if local_date >= range.start && local_date <= range.end {
                days.entry(local_date).or_default().push(observation);
            }
        }
        for hours in days.values_mut() {
            hours.sort_by_key(|o| o.timestamp_utc);
        }
        Self {
            location,
            utc_offset,
            days,
        }
    }

    /// Builds the input of every day in `range`, in date order.
    pub fn day_inputs(&self, range: &DateRange) -> Result<Vec<DayInput>, JoggabilityError> {
        range.days().map(|date| self.day_input(date)).collect()
    }
}

impl DaySource for StationDaySource {
    type Error = JoggabilityError;

    fn day_input(&self, date: NaiveDate) -> Result<DayInput, Self::Error> {
        let times = sun_times(self.location, date, self.utc_offset)?;
        let observations = self.days.get(&date).cloned().unwrap_or_default();
        if observations.is_empty() {
            debug!("No observations on {date}");
        }
        Ok(DayInput {
            date,
            observations,
            sunrise: times.sunrise,
            sunset: times.sunset,
        })
    }
}
