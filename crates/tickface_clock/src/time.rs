//! Wall-clock input
//!
//! The core never reads the system clock. A [`TimeSource`] supplies the
//! current UTC timestamp together with the observer's own UTC offset.

/// Minutes in a day
pub const MINUTES_PER_DAY: i64 = 24 * 60;

const MILLIS_PER_SECOND: i64 = 1_000;
const MILLIS_PER_MINUTE: i64 = 60 * MILLIS_PER_SECOND;

/// A UTC timestamp as seen by an observer in some local time zone
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct WallClock {
    /// Milliseconds since the Unix epoch
    pub utc_millis: i64,
    /// Observer's offset from UTC in minutes (east positive)
    pub local_offset_minutes: i32,
}

impl WallClock {
    pub fn new(utc_millis: i64, local_offset_minutes: i32) -> Self {
        Self {
            utc_millis,
            local_offset_minutes,
        }
    }

    /// Observer-local minutes since midnight, in [0, 1440)
    pub fn local_minute_of_day(&self) -> i64 {
        (self.utc_millis.div_euclid(MILLIS_PER_MINUTE) + self.local_offset_minutes as i64)
            .rem_euclid(MINUTES_PER_DAY)
    }

    /// Observer-local hour, in [0, 23]
    pub fn hour(&self) -> i64 {
        self.local_minute_of_day() / 60
    }

    /// Observer-local minute, in [0, 59]
    pub fn minute(&self) -> i64 {
        self.local_minute_of_day() % 60
    }

    /// Second of the minute, in [0, 59]
    pub fn second(&self) -> i64 {
        self.utc_millis
            .div_euclid(MILLIS_PER_SECOND)
            .rem_euclid(60)
    }

    /// Timestamp in seconds, as used for animation sampling
    pub fn seconds_f64(&self) -> f64 {
        self.utc_millis as f64 / MILLIS_PER_SECOND as f64
    }
}

/// Supplier of the current wall-clock time
pub trait TimeSource {
    fn now(&self) -> WallClock;
}

impl<F> TimeSource for F
where
    F: Fn() -> WallClock,
{
    fn now(&self) -> WallClock {
        self()
    }
}

/// Time source frozen at one instant
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FixedTimeSource(pub WallClock);

impl TimeSource for FixedTimeSource {
    fn now(&self) -> WallClock {
        self.0
    }
}
