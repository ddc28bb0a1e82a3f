//! Estimate how good a place's climate is for outdoor exercise.
//!
//! Each day of a multi-year window is classified as joggable, not joggable (with
//! the reason), or unknown (missing data) from hourly weather observations and the
//! day's sunrise and sunset. The day outcomes are folded into [`SummaryCounts`],
//! whose normalized joggable-day rate drives the dollar value of a [`ClimateFactor`].

mod classify;
mod climate;
mod config;
mod error;
mod joggability;
mod summary;
mod sun;
mod types;
mod utils;
mod weather_data;

pub use error::JoggabilityError;
pub use joggability::*;

pub use classify::labeling::{label_hour, label_hours, precipitation_usable};
pub use classify::slots::fill_gaps;
pub use classify::DayClassifier;
pub use climate::{ClimateFactor, DAYS_PER_YEAR, FACTOR_NAME};
pub use config::{ConfigError, JogConfig, DEFAULT_SUMMARY_DAYS};
pub use sun::{sun_times, SunError, SunTimes};

pub use summary::aggregator::{DaySource, SummaryAggregator};
pub use summary::counts::SummaryCounts;
pub use summary::error::SummaryError;
pub use summary::normalized::NormalizedSummary;

pub use types::day_input::DayInput;
pub use types::lat_lon::LatLon;
pub use types::observation::{HourSlot, HourlyObservation, LabeledHour};
pub use types::outcome::DayOutcome;
pub use types::reason::{NoReason, ReasonCode, UnknownReason};
pub use types::thresholds::Thresholds;
pub use types::window::{DateRange, SummaryWindow, DEFAULT_BUFFER_DAYS};

pub use weather_data::day_source::StationDaySource;
pub use weather_data::error::WeatherDataError;
pub use weather_data::hourly_frame::HourlyFrame;
