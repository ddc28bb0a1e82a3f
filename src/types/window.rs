//! Date windows over which days are summarized.

use crate::summary::error::SummaryError;
use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Days held back from "today" by default, since the most recent hourly data
/// may not have landed yet.
pub const DEFAULT_BUFFER_DAYS: u32 = 7;

/// An inclusive range of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, SummaryError> {
        if start > end {
            return Err(SummaryError::InvalidWindow(format!(
                "start {start} is after end {end}"
            )));
        }
        Ok(Self { start, end })
    }

    /// Number of days in the range, counting both ends.
    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }

    /// Inclusive range of calendar years touched by this range.
    pub fn years(&self) -> (i32, i32) {
        (self.start.year(), self.end.year())
    }
}

/// Which days to summarize, relative to a reference "today" where needed.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use joggability::SummaryWindow;
///
/// let today = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
/// let range = SummaryWindow::trailing(10).resolve(today).unwrap();
/// assert_eq!(range.end, NaiveDate::from_ymd_opt(2024, 1, 24).unwrap());
/// assert_eq!(range.num_days(), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SummaryWindow {
    /// An explicit inclusive date range.
    Range { since: NaiveDate, until: NaiveDate },
    /// From a given date up to and including today.
    Since(NaiveDate),
    /// The last `days` days, ending `buffer_days` before today.
    Trailing { days: u32, buffer_days: u32 },
}

impl SummaryWindow {
    /// A trailing window using [`DEFAULT_BUFFER_DAYS`].
    pub fn trailing(days: u32) -> Self {
        SummaryWindow::Trailing {
            days,
            buffer_days: DEFAULT_BUFFER_DAYS,
        }
    }

    pub fn resolve(&self, today: NaiveDate) -> Result<DateRange, SummaryError> {
        match *self {
            SummaryWindow::Range { since, until } => DateRange::new(since, until),
            SummaryWindow::Since(since) => DateRange::new(since, today),
            SummaryWindow::Trailing { days, buffer_days } => {
                if days == 0 {
                    return Err(SummaryError::InvalidWindow(
                        "trailing window must cover at least one day".to_string(),
                    ));
                }
                let until = today - Duration::days(i64::from(buffer_days));
                let since = until - Duration::days(i64::from(days) - 1);
                DateRange::new(since, until)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn range_rejects_reversed_dates() {
        let window = SummaryWindow::Range {
            since: date(2024, 2, 1),
            until: date(2024, 1, 1),
        };
        assert!(matches!(
            window.resolve(date(2024, 3, 1)),
            Err(SummaryError::InvalidWindow(_))
        ));
    }

    #[test]
    fn since_runs_until_today() {
        let range = SummaryWindow::Since(date(2024, 2, 27))
            .resolve(date(2024, 3, 1))
            .unwrap();
        let days: Vec<_> = range.days().collect();
        assert_eq!(
            days,
            vec![date(2024, 2, 27), date(2024, 2, 28), date(2024, 2, 29), date(2024, 3, 1)]
        );
    }

    #[test]
    fn trailing_window_spans_years() {
        let range = SummaryWindow::Trailing {
            days: 365 * 5,
            buffer_days: 7,
        }
        .resolve(date(2024, 6, 8))
        .unwrap();
        assert_eq!(range.end, date(2024, 6, 1));
        assert_eq!(range.num_days(), 365 * 5);
        assert_eq!(range.years(), (2019, 2024));
    }

    #[test]
    fn empty_trailing_window_is_invalid() {
        assert!(SummaryWindow::trailing(0).resolve(date(2024, 1, 1)).is_err());
    }
}
