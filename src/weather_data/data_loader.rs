use crate::weather_data::error::WeatherDataError;
use async_compression::tokio::bufread::GzipDecoder;
use futures_util::TryStreamExt;
use log::{info, warn};
use polars::frame::DataFrame;
use polars::prelude::*;
use reqwest::Client;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tokio::io::AsyncReadExt;
use tokio::{fs, task};
use tokio_util::io::StreamReader;

const BULK_HOURLY_URL: &str = "https://bulk.meteostat.net/v2/hourly";
const CACHE_FILE_PREFIX: &str = "hourly-";

/// Column names of the headerless Meteostat hourly CSV, in file order.
pub(crate) const HOURLY_COLUMNS: [&str; 13] = [
    "date", "hour", "temp", "dwpt", "rhum", "prcp", "snow", "wdir", "wspd", "wpgt", "pres",
    "tsun", "coco",
];

/// Downloads a station's full hourly record once and keeps it as parquet on disk.
pub struct WeatherDataLoader {
    cache_dir: PathBuf,
    download_client: Client,
}

impl WeatherDataLoader {
    pub fn new(cache_dir: &Path) -> WeatherDataLoader {
        WeatherDataLoader {
            cache_dir: cache_dir.to_path_buf(),
            download_client: Client::new(),
        }
    }

    pub(crate) fn cache_path(&self, station: &str) -> PathBuf {
        self.cache_dir
            .join(format!("{CACHE_FILE_PREFIX}{station}.parquet"))
    }

    /// Returns the hourly record of `station` as a LazyFrame, downloading it on a cache miss.
    pub async fn get_frame(&self, station: &str) -> Result<LazyFrame, WeatherDataError> {
        let parquet_path = self.cache_path(station);

        if fs::metadata(&parquet_path).await.is_ok() {
            info!(
                "Cache hit for hourly data for station {} at {:?}",
                station, parquet_path
            );
        } else {
            warn!(
                "Cache miss for hourly data for station {}. Downloading and processing.",
                station
            );
            let raw_bytes = self.download(station).await?;
            let df = Self::csv_to_dataframe(raw_bytes, station).await?;

            fs::create_dir_all(&self.cache_dir)
                .await
                .map_err(|e| WeatherDataError::CacheDirCreation(self.cache_dir.clone(), e))?;

            Self::cache_dataframe(df, &parquet_path).await?;
            info!(
                "Cached hourly data for station {} to {:?}",
                station, parquet_path
            );
        }

        LazyFrame::scan_parquet(&parquet_path, Default::default())
            .map_err(|e| WeatherDataError::ParquetScan(parquet_path.clone(), e))
    }

    async fn download(&self, station: &str) -> Result<Vec<u8>, WeatherDataError> {
        let url = format!("{BULK_HOURLY_URL}/{station}.csv.gz");
        info!("Downloading data from {}", url);

        let response = self
            .download_client
            .get(&url)
            .send()
            .await
            .map_err(|e| WeatherDataError::NetworkRequest(url.clone(), e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error for {}: {:?}", url, e);
                return Err(match e.status() {
                    Some(status) => WeatherDataError::HttpStatus {
                        url,
                        status,
                        source: e,
                    },
                    None => WeatherDataError::NetworkRequest(url, e),
                });
            }
        };

        let stream = response
            .bytes_stream()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e));
        let mut decoder = GzipDecoder::new(StreamReader::new(stream));
        let mut decompressed = Vec::new();
        decoder.read_to_end(&mut decompressed).await?;
        info!(
            "Downloaded and decompressed {} bytes for station {}",
            decompressed.len(),
            station
        );
        Ok(decompressed)
    }

    /// Parses headerless CSV bytes into a DataFrame named after [`HOURLY_COLUMNS`].
    pub(crate) async fn csv_to_dataframe(
        bytes: Vec<u8>,
        station: &str,
    ) -> Result<DataFrame, WeatherDataError> {
        let station = station.to_string();

        task::spawn_blocking(move || {
            let csv_io = |source| WeatherDataError::CsvReadIo {
                station: station.clone(),
                source,
            };
            let csv_polars = |source| WeatherDataError::CsvReadPolars {
                station: station.clone(),
                source,
            };

            let mut temp_file = NamedTempFile::new().map_err(csv_io)?;
            temp_file.write_all(&bytes).map_err(csv_io)?;
            temp_file.flush().map_err(csv_io)?;

            let mut df = CsvReadOptions::default()
                .with_has_header(false)
                .try_into_reader_with_file_path(Some(temp_file.path().to_path_buf()))
                .map_err(csv_polars)?
                .finish()
                .map_err(csv_polars)?;

            if df.width() != HOURLY_COLUMNS.len() {
                warn!(
                    "CSV column count ({}) does not match hourly schema length ({}) for station {}",
                    df.width(),
                    HOURLY_COLUMNS.len(),
                    station
                );
                return Err(WeatherDataError::SchemaMismatch {
                    station,
                    expected: HOURLY_COLUMNS.len(),
                    found: df.width(),
                });
            }

            df.set_column_names(HOURLY_COLUMNS.iter().copied())
                .map_err(|e| WeatherDataError::ColumnRenameError {
                    station: station.clone(),
                    source: e,
                })?;

            Ok(df)
        })
        .await?
    }

    async fn cache_dataframe(mut df: DataFrame, path: &Path) -> Result<(), WeatherDataError> {
        let path_buf = path.to_path_buf();
        task::spawn_blocking(move || {
            let file = std::fs::File::create(&path_buf)
                .map_err(|e| WeatherDataError::ParquetWriteIo(path_buf.clone(), e))?;
            ParquetWriter::new(file)
                .with_compression(ParquetCompression::Snappy)
                .finish(&mut df)
                .map_err(|e| WeatherDataError::ParquetWritePolars(path_buf, e))?;
            Ok::<(), WeatherDataError>(())
        })
        .await??;
        Ok(())
    }
}
