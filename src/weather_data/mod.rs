pub mod data_loader;
pub mod day_source;
pub mod error;
pub mod frame_fetcher;
pub mod hourly_frame;
