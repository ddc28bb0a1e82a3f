//! Reason codes explaining why an hour (or a whole day) is or isn't good for a jog.
//!
//! Codes are split into three families: [`ReasonCode::Yes`], the "no" family
//! ([`NoReason`]) and the "unknown" family ([`UnknownReason`]). Keeping the
//! families as separate enums means a `No` outcome can never carry a
//! missing-data reason and vice versa.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A condition that makes an hour unsuitable for jogging.
///
/// Variant order is the fixed priority used to break ties between equally
/// frequent reasons: earlier variants win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NoReason {
    /// Temperature below the configured minimum.
    TooCold,
    /// Temperature above the configured maximum.
    TooHot,
    /// Too much precipitation (or, without a usable precipitation channel, too humid).
    TooMuchRain,
    /// The hour is before sunrise.
    TooEarly,
    /// The hour is after sunset.
    TooLate,
}

impl NoReason {
    pub const ALL: [NoReason; 5] = [
        NoReason::TooCold,
        NoReason::TooHot,
        NoReason::TooMuchRain,
        NoReason::TooEarly,
        NoReason::TooLate,
    ];

    /// Daylight reasons say the least about a place's climate, so they only
    /// explain a "no" when nothing else does.
    pub fn is_daylight(self) -> bool {
        matches!(self, NoReason::TooEarly | NoReason::TooLate)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NoReason::TooCold => "TOO_COLD",
            NoReason::TooHot => "TOO_HOT",
            NoReason::TooMuchRain => "TOO_MUCH_RAIN",
            NoReason::TooEarly => "TOO_EARLY",
            NoReason::TooLate => "TOO_LATE",
        }
    }
}

/// Missing data that prevents deciding whether an hour is joggable.
///
/// Variant order doubles as the tie-break priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UnknownReason {
    /// The observation has no temperature.
    MissingTemp,
    /// The observation has no precipitation and the precipitation channel is in use.
    MissingPrecip,
    /// No observation exists for the hour at all.
    MissingHour,
}

impl UnknownReason {
    pub const ALL: [UnknownReason; 3] = [
        UnknownReason::MissingTemp,
        UnknownReason::MissingPrecip,
        UnknownReason::MissingHour,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            UnknownReason::MissingTemp => "MISSING_TEMP",
            UnknownReason::MissingPrecip => "MISSING_PRECIP",
            UnknownReason::MissingHour => "MISSING_HOUR",
        }
    }
}

/// The label attached to a single observed hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReasonCode {
    Yes,
    No(NoReason),
    Unknown(UnknownReason),
}

impl fmt::Display for NoReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for UnknownReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Formats the reason the same way it is serialized, e.g. `TOO_COLD`.
///
/// # Examples
///
/// ```
/// use joggability::{NoReason, ReasonCode};
///
/// assert_eq!(ReasonCode::Yes.to_string(), "YES");
/// assert_eq!(ReasonCode::No(NoReason::TooCold).to_string(), "TOO_COLD");
/// ```
impl fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReasonCode::Yes => f.write_str("YES"),
            ReasonCode::No(reason) => reason.fmt(f),
            ReasonCode::Unknown(reason) => reason.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn daylight_reasons() {
        let daylight: Vec<_> = NoReason::ALL.into_iter().filter(|r| r.is_daylight()).collect();
        assert_eq!(daylight, vec![NoReason::TooEarly, NoReason::TooLate]);
    }

    #[test]
    fn serializes_as_screaming_snake_case() {
        let json = serde_json::to_string(&NoReason::TooMuchRain).unwrap();
        assert_eq!(json, "\"TOO_MUCH_RAIN\"");
        let back: UnknownReason = serde_json::from_str("\"MISSING_PRECIP\"").unwrap();
        assert_eq!(back, UnknownReason::MissingPrecip);
    }
}
