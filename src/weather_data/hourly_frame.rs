//! Pulling [`HourlyObservation`]s out of a station's hourly LazyFrame.

use crate::types::observation::HourlyObservation;
use crate::weather_data::error::WeatherDataError;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use log::debug;
use polars::prelude::*;

const COL_DATE: &str = "date";
const COL_HOUR: &str = "hour";
const COL_TEMP: &str = "temp";
const COL_PRCP: &str = "prcp";
const COL_RHUM: &str = "rhum";

/// A station's hourly record. Timestamps in the record are UTC.
#[derive(Clone)]
pub struct HourlyFrame {
    station: String,
    /// The underlying Polars LazyFrame in the Meteostat hourly schema.
    pub frame: LazyFrame,
}

impl HourlyFrame {
    pub fn new(station: &str, frame: LazyFrame) -> Self {
        Self {
            station: station.to_string(),
            frame,
        }
    }

    pub fn station(&self) -> &str {
        &self.station
    }

    /// Collects the observations for UTC dates `start..=end`, sorted by timestamp.
    ///
    /// Rows without a valid date or hour are dropped; missing measurements stay `None`.
    pub fn observations(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<HourlyObservation>, WeatherDataError> {
        let start = start.format("%Y-%m-%d").to_string();
        let end = end.format("%Y-%m-%d").to_string();

        let df = self
            .frame
            .clone()
            .select([
                col(COL_DATE).cast(DataType::String),
                col(COL_HOUR).cast(DataType::Int64),
                col(COL_TEMP).cast(DataType::Float64),
                col(COL_PRCP).cast(DataType::Float64),
                col(COL_RHUM).cast(DataType::Float64),
            ])
            .filter(
                col(COL_DATE)
                    .gt_eq(lit(start))
                    .and(col(COL_DATE).lt_eq(lit(end))),
            )
            .collect()
            .map_err(|e| WeatherDataError::PolarsError {
                station: self.station.clone(),
                source: e,
            })?;

        let mut observations = observations_from_dataframe(&df)?;
        observations.sort_by_key(|o| o.timestamp_utc);
        debug!(
            "Collected {} hourly observations for station {}",
            observations.len(),
            self.station
        );
        Ok(observations)
    }
}

fn get_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column, WeatherDataError> {
    df.column(name)
        .map_err(|e| WeatherDataError::ColumnNotFound(name.to_string(), e))
}

fn float_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Float64Chunked, WeatherDataError> {
    get_column(df, name)?
        .f64()
        .map_err(|e| WeatherDataError::ColumnNotFound(name.to_string(), e))
}

/// Converts a DataFrame with `date` (str), `hour` (i64) and f64 `temp`, `prcp`,
/// `rhum` columns into observations, in row order.
pub(crate) fn observations_from_dataframe(
    df: &DataFrame,
) -> Result<Vec<HourlyObservation>, WeatherDataError> {
    let dates = get_column(df, COL_DATE)?
        .str()
        .map_err(|e| WeatherDataError::ColumnNotFound(COL_DATE.to_string(), e))?;
    let hours = get_column(df, COL_HOUR)?
        .i64()
        .map_err(|e| WeatherDataError::ColumnNotFound(COL_HOUR.to_string(), e))?;
    let temps = float_column(df, COL_TEMP)?;
    let precips = float_column(df, COL_PRCP)?;
    let humidities = float_column(df, COL_RHUM)?;

    let observations = dates
        .into_iter()
        .zip(hours)
        .zip(temps)
        .zip(precips)
        .zip(humidities)
        .filter_map(|((((date, hour), temp), precip), humidity)| {
            let timestamp_utc = timestamp(date?, hour?)?;
            Some(HourlyObservation {
                timestamp_utc,
                temperature_c: temp,
                precipitation_1hr_mm: precip,
                relative_humidity_pct: humidity,
            })
        })
        .collect();
    Ok(observations)
}

fn timestamp(date: &str, hour: i64) -> Option<DateTime<Utc>> {
    if !(0..24).contains(&hour) {
        return None;
    }
    let midnight = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()?
        .and_hms_opt(0, 0, 0)?;
    Some((midnight + Duration::hours(hour)).and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_frame() -> LazyFrame {
        df!(
            "date" => ["2023-05-31", "2023-06-01", "2023-06-01", "2023-06-01", "2023-06-02", "bogus"],
            "hour" => [23i64, 2, 0, 1, 0, 4],
            "temp" => [Some(12.5), Some(13.0), Some(14.2), None, Some(11.0), Some(1.0)],
            "prcp" => [Some(0.0), Some(0.4), Some(0.0), None, Some(0.0), Some(0.0)],
            "rhum" => [Some(80i64), Some(77), Some(71), Some(73), Some(90), Some(50)]
        )
        .unwrap()
        .lazy()
    }

    #[test]
    fn observations_for_one_day_are_sorted() {
        let frame = HourlyFrame::new("test", sample_frame());
        let day = NaiveDate::from_ymd_opt(2023, 6, 1).unwrap();
        let observations = frame.observations(day, day).unwrap();

        let hours: Vec<_> = observations.iter().map(|o| o.timestamp_utc).collect();
        assert_eq!(
            hours,
            vec![
                Utc.with_ymd_and_hms(2023, 6, 1, 0, 0, 0).unwrap(),
                Utc.with_ymd_and_hms(2023, 6, 1, 1, 0, 0).unwrap(),
                Utc.with_ymd_and_hms(2023, 6, 1, 2, 0, 0).unwrap(),
            ]
        );
        assert_eq!(observations[0].temperature_c, Some(14.2));
        assert_eq!(observations[0].relative_humidity_pct, Some(71.0));
        assert_eq!(observations[1].temperature_c, None);
        assert_eq!(observations[1].precipitation_1hr_mm, None);
    }

    #[test]
    fn range_is_inclusive_and_skips_bad_dates() {
        let frame = HourlyFrame::new("test", sample_frame());
        let observations = frame
            .observations(
                NaiveDate::from_ymd_opt(2023, 5, 31).unwrap(),
                NaiveDate::from_ymd_opt(2023, 6, 2).unwrap(),
            )
            .unwrap();
        assert_eq!(observations.len(), 5);
    }

    #[test]
    fn timestamps_reject_out_of_range_hours() {
        assert_eq!(timestamp("2023-06-01", 24), None);
        assert_eq!(timestamp("2023-06-01", -1), None);
        assert_eq!(
            timestamp("2023-06-01", 23),
            Some(Utc.with_ymd_and_hms(2023, 6, 1, 23, 0, 0).unwrap())
        );
    }
}
