use crate::types::observation::{HourSlot, LabeledHour};
use chrono::Duration;

/// Lays the labeled hours out on an hourly grid, inserting a [`HourSlot::Gap`] for
/// every whole hour missing between two consecutive observations.
///
/// Gaps are measured from one observation to the next, rounded to whole hours
/// (half hours to even), so readings a few minutes off the hour still line up. Hours before the first and
/// after the last observation are not filled.
pub fn fill_gaps(hours: &[LabeledHour]) -> Vec<HourSlot> {
    let mut slots = Vec::with_capacity(24);
    let mut previous: Option<&LabeledHour> = None;

    for hour in hours {
        if let Some(prev) = previous {
            let gap = hour.observation.timestamp_utc - prev.observation.timestamp_utc;
            let missing = whole_hours(gap) - 1;
            if missing > 0 {
                slots.extend(std::iter::repeat(HourSlot::Gap).take(missing as usize));
            }
        }
        slots.push(HourSlot::Observed(*hour));
        previous = Some(hour);
    }
    slots
}

fn whole_hours(duration: Duration) -> i64 {
    (duration.num_seconds() as f64 / 3600.0).round_ties_even() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::observation::HourlyObservation;
    use crate::types::reason::ReasonCode;
    use chrono::{TimeZone, Utc};

    fn hour(h: u32, m: u32) -> LabeledHour {
        LabeledHour {
            observation: HourlyObservation::new(
                Utc.with_ymd_and_hms(2023, 6, 1, h, m, 0).unwrap(),
                20.0,
                0.0,
                50.0,
            ),
            reason: ReasonCode::Yes,
        }
    }

    #[test]
    fn contiguous_hours_have_no_gaps() {
        let slots = fill_gaps(&[hour(1, 0), hour(2, 0), hour(3, 0)]);
        assert_eq!(slots.len(), 3);
        assert!(slots.iter().all(|s| s.is_yes()));
    }

    #[test]
    fn missing_hours_become_gaps() {
        let slots = fill_gaps(&[hour(1, 0), hour(4, 0), hour(5, 0)]);
        assert_eq!(slots.len(), 5);
        assert_eq!(slots[1], HourSlot::Gap);
        assert_eq!(slots[2], HourSlot::Gap);
        assert!(slots[3].is_yes());
    }

    #[test]
    fn gaps_round_to_whole_hours() {
        // 2h50m rounds to three hours: two slots missing.
        let slots = fill_gaps(&[hour(1, 0), hour(3, 50)]);
        assert_eq!(slots.len(), 4);
        // Duplicate readings within the same hour add no gap.
        let slots = fill_gaps(&[hour(1, 0), hour(1, 20)]);
        assert_eq!(slots.len(), 2);
    }

    #[test]
    fn half_hour_gaps_round_to_even() {
        // 2h30m rounds to two hours: one slot missing.
        let slots = fill_gaps(&[hour(10, 0), hour(12, 30)]);
        assert_eq!(slots.len(), 3);
        assert_eq!(slots[1], HourSlot::Gap);
        // 3h30m rounds to four hours: three slots missing.
        let slots = fill_gaps(&[hour(10, 0), hour(13, 30)]);
        assert_eq!(slots.len(), 5);
    }

    #[test]
    fn empty_input() {
        assert!(fill_gaps(&[]).is_empty());
    }
}
