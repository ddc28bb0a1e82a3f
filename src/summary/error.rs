use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("Cannot normalize a summary with no days in it")]
    DivisionUndefined,

    #[error("Invalid summary window: {0}")]
    InvalidWindow(String),

    #[error("No hourly input available for {0}")]
    MissingDay(NaiveDate),

    #[error("Background classification task failed to complete")]
    TaskJoin(#[from] tokio::task::JoinError),
}
