//! Clock time zone offsets

use std::fmt;

use crate::error::{ClockError, Result};

/// Minute offsets a time zone may add to its hour offset
pub const VALID_MINUTE_OFFSETS: [i64; 3] = [0, 30, 45];

/// Smallest hour offset a clock accepts
pub const MIN_HOUR_OFFSET: i64 = -12;

/// Largest hour offset a clock accepts
pub const MAX_HOUR_OFFSET: i64 = 14;

/// A clock's offset from UTC, in minutes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UtcOffset {
    minutes: i32,
}

impl UtcOffset {
    pub const UTC: UtcOffset = UtcOffset { minutes: 0 };

    /// Build an offset from its hour and minute parts.
    ///
    /// The minute part takes the sign of the hour part, with a zero hour
    /// counting as positive: `(-3, 30)` is -210 minutes, `(0, 45)` is +45.
    pub fn from_parts(hour: i64, minute: i64) -> Result<Self> {
        if !(MIN_HOUR_OFFSET..=MAX_HOUR_OFFSET).contains(&hour) {
            return Err(ClockError::InvalidHourOffset(hour));
        }
        if !VALID_MINUTE_OFFSETS.contains(&minute) {
            return Err(ClockError::InvalidMinuteOffset(minute));
        }

        let sign = if hour < 0 { -1 } else { 1 };
        // Both parts are range-checked above, so this always fits
        let minutes = (hour * 60 + sign * minute) as i32;
        Ok(Self { minutes })
    }

    pub fn minutes(&self) -> i32 {
        self.minutes
    }

    /// Whole hours, truncated toward zero
    pub fn hours_part(&self) -> i32 {
        self.minutes / 60
    }

    /// Remaining minutes, always non-negative
    pub fn minutes_part(&self) -> i32 {
        (self.minutes % 60).abs()
    }
}

impl fmt::Display for UtcOffset {
    /// Zone label shown under the time, e.g. `GMT+05:45`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.minutes < 0 { '-' } else { '+' };
        write!(
            f,
            "GMT{}{:02}:{:02}",
            sign,
            self.hours_part().abs(),
            self.minutes_part()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_minutes_for_every_valid_pair() {
        for hour in MIN_HOUR_OFFSET..=MAX_HOUR_OFFSET {
            for minute in VALID_MINUTE_OFFSETS {
                let sign = if hour == 0 { 1 } else { hour.signum() };
                let offset = UtcOffset::from_parts(hour, minute).unwrap();
                assert_eq!(offset.minutes() as i64, hour * 60 + sign * minute);
            }
        }
    }

    #[test]
    fn test_rejects_out_of_range_hours() {
        assert_eq!(
            UtcOffset::from_parts(-13, 0),
            Err(ClockError::InvalidHourOffset(-13))
        );
        assert_eq!(
            UtcOffset::from_parts(15, 30),
            Err(ClockError::InvalidHourOffset(15))
        );
    }

    #[test]
    fn test_rejects_unlisted_minutes() {
        for minute in [15, -30, 59, 60] {
            assert_eq!(
                UtcOffset::from_parts(2, minute),
                Err(ClockError::InvalidMinuteOffset(minute))
            );
        }
    }

    #[test]
    fn test_hour_is_checked_before_minute() {
        assert_eq!(
            UtcOffset::from_parts(20, 15),
            Err(ClockError::InvalidHourOffset(20))
        );
    }

    #[test]
    fn test_zone_labels() {
        let label = |h, m| UtcOffset::from_parts(h, m).unwrap().to_string();
        assert_eq!(label(9, 30), "GMT+09:30");
        assert_eq!(label(-3, 30), "GMT-03:30");
        assert_eq!(label(0, 45), "GMT+00:45");
        assert_eq!(label(-12, 45), "GMT-12:45");
        assert_eq!(label(14, 0), "GMT+14:00");
        assert_eq!(UtcOffset::UTC.to_string(), "GMT+00:00");
    }

    #[test]
    fn test_parts() {
        let offset = UtcOffset::from_parts(-9, 30).unwrap();
        assert_eq!(offset.minutes(), -570);
        assert_eq!(offset.hours_part(), -9);
        assert_eq!(offset.minutes_part(), 30);
    }
}
