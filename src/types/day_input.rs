use crate::types::observation::HourlyObservation;
use chrono::{DateTime, NaiveDate, Utc};

/// Everything needed to classify one local calendar day.
#[derive(Debug, Clone, PartialEq)]
pub struct DayInput {
    pub date: NaiveDate,
    /// Observations that fall on `date`, ascending by timestamp.
    pub observations: Vec<HourlyObservation>,
    pub sunrise: DateTime<Utc>,
    pub sunset: DateTime<Utc>,
}
