use crate::config::ConfigError;
use crate::sun::SunError;
use crate::summary::error::SummaryError;
use crate::weather_data::error::WeatherDataError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum JoggabilityError {
    #[error(transparent)]
    WeatherData(#[from] WeatherDataError),

    #[error(transparent)]
    Sun(#[from] SunError),

    #[error(transparent)]
    Summary(#[from] SummaryError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to create cache directory '{0}'")]
    CacheDirCreation(PathBuf, #[source] std::io::Error),

    #[error("Failed to determine cache directory")]
    CacheDirResolution(#[source] std::io::Error),
}
