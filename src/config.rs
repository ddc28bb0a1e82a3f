//! User configuration, read from a JSON file.

use crate::types::thresholds::Thresholds;
use crate::types::window::{SummaryWindow, DEFAULT_BUFFER_DAYS};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Five years of days.
pub const DEFAULT_SUMMARY_DAYS: u32 = 365 * 5;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{0}'")]
    Read(PathBuf, #[source] std::io::Error),

    #[error("Failed to parse config file '{0}'")]
    Parse(PathBuf, #[source] serde_json::Error),

    #[error("Invalid config value for '{field}': {message}")]
    Invalid { field: &'static str, message: String },
}

/// Settings for valuing a place's climate.
///
/// # Examples
///
/// ```
/// use joggability::JogConfig;
///
/// let config: JogConfig = serde_json::from_str(r#"{
///     "value_of_good_weather_day": 20.0,
///     "today": "2024-01-31",
///     "thresholds": { "max_temp_c": 25.0 }
/// }"#).unwrap();
/// assert_eq!(config.summary_days, 1825);
/// assert_eq!(config.thresholds.max_temp_c, 25.0);
/// assert_eq!(config.thresholds.min_temp_c, 12.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JogConfig {
    /// What one extra day of good weather is worth to you, in dollars.
    ///
    /// If the analysis is for several people, sum their values.
    pub value_of_good_weather_day: f64,
    /// Pins "today" so that results don't drift as new data lands.
    /// Remove it to use the current date.
    #[serde(default)]
    pub today: Option<NaiveDate>,
    #[serde(default = "default_summary_days")]
    pub summary_days: u32,
    #[serde(default = "default_buffer_days")]
    pub buffer_days: u32,
    #[serde(default)]
    pub thresholds: Thresholds,
}

fn default_summary_days() -> u32 {
    DEFAULT_SUMMARY_DAYS
}

fn default_buffer_days() -> u32 {
    DEFAULT_BUFFER_DAYS
}

impl JogConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Read(path.to_path_buf(), e))?;
        let config: JogConfig =
            serde_json::from_str(&text).map_err(|e| ConfigError::Parse(path.to_path_buf(), e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.summary_days == 0 {
            return Err(ConfigError::Invalid {
                field: "summary_days",
                message: "must be at least 1".to_string(),
            });
        }
        if self.thresholds.min_consec_hours == 0 {
            return Err(ConfigError::Invalid {
                field: "thresholds.min_consec_hours",
                message: "must be at least 1".to_string(),
            });
        }
        if self.thresholds.min_temp_c > self.thresholds.max_temp_c {
            return Err(ConfigError::Invalid {
                field: "thresholds.min_temp_c",
                message: format!(
                    "{} is above max_temp_c {}",
                    self.thresholds.min_temp_c, self.thresholds.max_temp_c
                ),
            });
        }
        Ok(())
    }

    /// The trailing window of `summary_days` days ending `buffer_days` before today.
    pub fn window(&self) -> SummaryWindow {
        SummaryWindow::Trailing {
            days: self.summary_days,
            buffer_days: self.buffer_days,
        }
    }

    /// The pinned date, or the current local date.
    pub fn today(&self) -> NaiveDate {
        self.today
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }
}
