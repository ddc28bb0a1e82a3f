pub mod day_input;
pub mod lat_lon;
pub mod observation;
pub mod outcome;
pub mod reason;
pub mod thresholds;
pub mod window;
