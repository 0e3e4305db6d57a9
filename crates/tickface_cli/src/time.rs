//! System clock access

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use tickface_clock::{TimeSource, WallClock};

/// Wall-clock time read from the operating system
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemTimeSource {
    /// Replaces the system's local offset when set
    local_offset_minutes: Option<i32>,
}

impl SystemTimeSource {
    pub fn new(local_offset_minutes: Option<i32>) -> Self {
        Self {
            local_offset_minutes,
        }
    }

    /// Local offset of the observer, in minutes east of UTC
    pub fn local_offset_minutes(&self) -> i32 {
        self.local_offset_minutes
            .unwrap_or_else(|| Local::now().offset().local_minus_utc() / 60)
    }
}

impl TimeSource for SystemTimeSource {
    fn now(&self) -> WallClock {
        let now = Local::now();
        let local_offset = self
            .local_offset_minutes
            .unwrap_or_else(|| now.offset().local_minus_utc() / 60);
        WallClock::new(now.timestamp_millis(), local_offset)
    }
}

/// Parse an instant given as milliseconds since the epoch or as RFC 3339
pub fn parse_instant(text: &str) -> Result<i64> {
    let text = text.trim();
    if let Ok(millis) = text.parse::<i64>() {
        return Ok(millis);
    }

    let instant = DateTime::parse_from_rfc3339(text)
        .with_context(|| format!("'{}' is neither epoch milliseconds nor RFC 3339", text))?;
    Ok(instant.timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_epoch_millis() {
        assert_eq!(parse_instant("0").unwrap(), 0);
        assert_eq!(parse_instant(" -86400000 ").unwrap(), -86_400_000);
    }

    #[test]
    fn test_parse_rfc3339() {
        assert_eq!(parse_instant("1970-01-01T00:00:05Z").unwrap(), 5_000);
        // Offsets are folded into the UTC instant
        assert_eq!(
            parse_instant("1970-01-01T09:30:00+09:30").unwrap(),
            0
        );
    }

    #[test]
    fn test_parse_garbage() {
        assert!(parse_instant("half past nine").is_err());
    }

    #[test]
    fn test_offset_override() {
        let source = SystemTimeSource::new(Some(-150));
        assert_eq!(source.local_offset_minutes(), -150);
        assert_eq!(source.now().local_offset_minutes, -150);
    }
}
