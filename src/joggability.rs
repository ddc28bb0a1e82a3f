//! The main entry point: summarizing how joggable a place's weather is, straight
//! from a Meteostat weather station's hourly record.

use crate::climate::ClimateFactor;
use crate::config::{JogConfig, DEFAULT_SUMMARY_DAYS};
use crate::error::JoggabilityError;
use crate::summary::aggregator::SummaryAggregator;
use crate::summary::counts::SummaryCounts;
use crate::types::lat_lon::LatLon;
use crate::types::thresholds::Thresholds;
use crate::types::window::SummaryWindow;
use crate::utils::{ensure_cache_dir_exists, get_cache_dir};
use crate::weather_data::day_source::StationDaySource;
use crate::weather_data::frame_fetcher::FrameFetcher;
use bon::bon;
use chrono::{FixedOffset, Local, NaiveDate, Offset, Utc};
use log::info;
use std::path::PathBuf;

/// Client that fetches (and caches) hourly station data and summarizes it into
/// joggable-day counts.
///
/// Create an instance using [`Joggability::new()`] for the default cache directory
/// or [`Joggability::with_cache_folder()`] for a custom one.
///
/// # Examples
///
/// ```no_run
/// # use joggability::{Joggability, JoggabilityError, LatLon, SummaryWindow};
/// # async fn run() -> Result<(), JoggabilityError> {
/// let client = Joggability::new().await?;
/// let counts = client
///     .summary()
///     .station("72494") // San Francisco International
///     .location(LatLon(37.62, -122.37))
///     .window(SummaryWindow::trailing(365))
///     .call()
///     .await?;
/// println!("{} joggable days out of {}", counts.num_yes, counts.total());
/// # Ok(())
/// # }
/// ```
pub struct Joggability {
    fetcher: FrameFetcher,
}

#[bon]
impl Joggability {
    /// Creates a client that caches downloaded data in `cache_folder`, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns [`JoggabilityError::CacheDirCreation`] if the directory cannot be created.
    pub async fn with_cache_folder(cache_folder: PathBuf) -> Result<Self, JoggabilityError> {
        ensure_cache_dir_exists(&cache_folder)
            .await
            .map_err(|e| JoggabilityError::CacheDirCreation(cache_folder.clone(), e))?;
        Ok(Self {
            fetcher: FrameFetcher::new(&cache_folder),
        })
    }

    /// Creates a client using the platform cache directory (e.g. `~/.cache/joggability_cache`).
    ///
    /// # Errors
    ///
    /// Returns [`JoggabilityError::CacheDirResolution`] if there is no cache directory, or
    /// [`JoggabilityError::CacheDirCreation`] if it cannot be created.
    pub async fn new() -> Result<Self, JoggabilityError> {
        let cache_folder = get_cache_dir().map_err(JoggabilityError::CacheDirResolution)?;
        Self::with_cache_folder(cache_folder).await
    }

    /// Classifies every day of a window at a station and counts the outcomes.
    ///
    /// # Arguments
    ///
    /// * `.station(&str)`: **Required.** Meteostat station ID providing the hourly data.
    /// * `.location(LatLon)`: **Required.** Where the sun times are computed.
    /// * `.window(SummaryWindow)`: **Required.** Which days to summarize.
    /// * `.utc_offset(FixedOffset)`: Optional. Local clock offset defining calendar days, applied
    ///   to the whole window without daylight saving changes (use the standard-time offset).
    ///   Defaults to UTC.
    /// * `.today(NaiveDate)`: Optional. Reference date for relative windows. Defaults to the local date.
    /// * `.thresholds(Thresholds)`: Optional. Defaults to [`Thresholds::default`].
    ///
    /// # Errors
    ///
    /// Fails if the window is invalid, the station data cannot be fetched, or sun
    /// times cannot be computed for a day.
    #[builder]
    pub async fn summary(
        &self,
        station: &str,
        location: LatLon,
        window: SummaryWindow,
        utc_offset: Option<FixedOffset>,
        today: Option<NaiveDate>,
        thresholds: Option<Thresholds>,
    ) -> Result<SummaryCounts, JoggabilityError> {
        let utc_offset = utc_offset.unwrap_or_else(|| Utc.fix());
        let today = today.unwrap_or_else(|| Local::now().date_naive());
        let range = window.resolve(today)?;

        let frame = self.fetcher.hourly_frame(station).await?;
        let source = StationDaySource::load(&frame, location, utc_offset, &range)?;
        let days = source.day_inputs(&range)?;

        let counts = SummaryAggregator::new(thresholds.unwrap_or_default())
            .summarize_by_year(days)
            .await?;
        info!(
            "Station {}: {} of {} days joggable between {} and {}",
            station,
            counts.num_yes,
            counts.total(),
            range.start,
            range.end
        );
        Ok(counts)
    }

    /// Annual dollar value of a place's climate: the joggable-day rate over the
    /// window, times 365, times what one good day is worth.
    ///
    /// `.window(..)` defaults to the last five years (ending a week before today).
    /// The other arguments are as for [`Joggability::summary`], plus the required
    /// `.factor(ClimateFactor)`.
    #[builder]
    pub async fn climate_annual_value(
        &self,
        station: &str,
        location: LatLon,
        factor: ClimateFactor,
        window: Option<SummaryWindow>,
        utc_offset: Option<FixedOffset>,
        today: Option<NaiveDate>,
        thresholds: Option<Thresholds>,
    ) -> Result<f64, JoggabilityError> {
        let counts = self
            .summary()
            .station(station)
            .location(location)
            .window(window.unwrap_or(SummaryWindow::trailing(DEFAULT_SUMMARY_DAYS)))
            .maybe_utc_offset(utc_offset)
            .maybe_today(today)
            .maybe_thresholds(thresholds)
            .call()
            .await?;
        let normalized = counts.normalized().call()?;
        Ok(factor.annual_value(&normalized))
    }

    /// [`Joggability::climate_annual_value`] with window, today, thresholds and
    /// dollar value taken from a [`JogConfig`].
    pub async fn climate_annual_value_from_config(
        &self,
        station: &str,
        location: LatLon,
        utc_offset: FixedOffset,
        config: &JogConfig,
    ) -> Result<f64, JoggabilityError> {
        config.validate()?;
        self.climate_annual_value()
            .station(station)
            .location(location)
            .factor(ClimateFactor::new(config.value_of_good_weather_day))
            .window(config.window())
            .utc_offset(utc_offset)
            .today(config.today())
            .thresholds(config.thresholds)
            .call()
            .await
    }
}
