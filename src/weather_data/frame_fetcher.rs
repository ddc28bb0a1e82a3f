use crate::weather_data::data_loader::WeatherDataLoader;
use crate::weather_data::error::WeatherDataError;
use crate::weather_data::hourly_frame::HourlyFrame;
use std::collections::{hash_map::Entry, HashMap};
use std::path::Path;
use tokio::sync::Mutex;

/// Hands out one [`HourlyFrame`] per station, loading each at most once per client.
pub struct FrameFetcher {
    loader: WeatherDataLoader,
    frame_cache: Mutex<HashMap<String, HourlyFrame>>,
}

impl FrameFetcher {
    pub fn new(cache_dir: &Path) -> Self {
        Self {
            loader: WeatherDataLoader::new(cache_dir),
            frame_cache: Mutex::new(HashMap::new()),
        }
    }

    pub async fn hourly_frame(&self, station: &str) -> Result<HourlyFrame, WeatherDataError> {
        {
            let cache = self.frame_cache.lock().await;
            if let Some(frame) = cache.get(station) {
                return Ok(frame.clone());
            }
        }

        // Loading can take a while (download + parse), so it runs without the lock held.
        let loaded = HourlyFrame::new(station, self.loader.get_frame(station).await?);

        let mut cache = self.frame_cache.lock().await;
        match cache.entry(station.to_string()) {
            // Another caller finished first; keep theirs.
            Entry::Occupied(entry) => Ok(entry.get().clone()),
            Entry::Vacant(entry) => {
                entry.insert(loaded.clone());
                Ok(loaded)
            }
        }
    }
}
