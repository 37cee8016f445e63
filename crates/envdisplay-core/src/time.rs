//! Time helpers for the display: elapsed-time decomposition and wall clock
//! formatting.

use core::fmt::{self, Write as _};

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: u64 = 24 * SECONDS_PER_HOUR;

/// Minute and second of an elapsed duration, within the current hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MinutesSeconds {
    pub minutes: u8,
    pub seconds: u8,
}

impl fmt::Display for MinutesSeconds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.minutes, self.seconds)
    }
}

/// Splits `total_seconds` into minutes and seconds.
///
/// Whole hours are discarded: `3661` gives one minute and one second, not
/// sixty-one minutes.
pub fn seconds_to_minutes_seconds(total_seconds: u32) -> MinutesSeconds {
    let total = u64::from(total_seconds);
    MinutesSeconds {
        minutes: ((total / SECONDS_PER_MINUTE) % 60) as u8,
        seconds: (total % SECONDS_PER_MINUTE) as u8,
    }
}

/// Hour and minute of the day for an epoch timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockTime {
    pub hours: u8,
    pub minutes: u8,
}

impl ClockTime {
    pub fn from_epoch(raw_seconds: u64) -> Self {
        Self {
            hours: ((raw_seconds % SECONDS_PER_DAY) / SECONDS_PER_HOUR) as u8,
            minutes: ((raw_seconds % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE) as u8,
        }
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hours, self.minutes)
    }
}

/// Formats an epoch timestamp as 24-hour `HH:MM`.
pub fn format_clock(raw_seconds: u64) -> heapless::String<5> {
    let mut out = heapless::String::new();
    // hours < 24 and minutes < 60, so this is always exactly five bytes
    let _ = write!(out, "{}", ClockTime::from_epoch(raw_seconds));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_within_one_hour() {
        for t in 0..3600u32 {
            let ms = seconds_to_minutes_seconds(t);
            assert_eq!(ms.seconds as u32, t % 60);
            assert_eq!(ms.minutes as u32, t / 60);
        }
    }

    #[test]
    fn test_hours_are_truncated() {
        let ms = seconds_to_minutes_seconds(3661);
        assert_eq!((ms.minutes, ms.seconds), (1, 1));

        let ms = seconds_to_minutes_seconds(u32::MAX);
        assert!(ms.minutes < 60);
        assert!(ms.seconds < 60);
    }

    #[test]
    fn test_minutes_seconds_display() {
        assert_eq!(seconds_to_minutes_seconds(65).to_string(), "01:05");
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0).as_str(), "00:00");
        assert_eq!(format_clock(3661).as_str(), "01:01");
        assert_eq!(format_clock(86399).as_str(), "23:59");
        assert_eq!(format_clock(86400).as_str(), "00:00");
    }

    #[test]
    fn test_format_clock_real_epoch() {
        // 2023-11-14 22:13:20 UTC
        assert_eq!(format_clock(1_700_000_000).as_str(), "22:13");
    }

    #[test]
    fn test_clock_time_fields() {
        let clock = ClockTime::from_epoch(86399);
        assert_eq!(clock, ClockTime { hours: 23, minutes: 59 });
    }
}
