//! Clock-time value with a signed day offset.
//!
//! `ClockTime` carries a wall-clock time of day plus a day offset, so a
//! single type covers times of day ("06:04:12"), durations ("14:23:00"),
//! and spans past midnight ("+1d 00:42:00"). The total-milliseconds form
//! is the normalization axis: conversion in either direction is lossless.

use std::fmt::{Display, Formatter};

use crate::error::TimeError;
use crate::julian::MILLIS_PER_DAY;

/// A clock time with millisecond precision and a signed day offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClockTime {
    /// Signed whole-day component.
    pub day_offset: i32,
    /// Hour of day, 0–23.
    pub hour: u8,
    /// Minute, 0–59.
    pub minute: u8,
    /// Second, 0–59.
    pub second: u8,
    /// Millisecond, 0–999.
    pub millisecond: u16,
}

impl ClockTime {
    /// Midnight with no day offset.
    pub const MIDNIGHT: ClockTime = ClockTime {
        day_offset: 0,
        hour: 0,
        minute: 0,
        second: 0,
        millisecond: 0,
    };

    /// Create a clock time. Fails if hour ∉ [0,23] or minute/second ∉ [0,59].
    pub fn new(hour: u32, minute: u32, second: u32) -> Result<Self, TimeError> {
        if hour > 23 {
            return Err(TimeError::InvalidClockTime("hour must be in 0..=23"));
        }
        if minute > 59 {
            return Err(TimeError::InvalidClockTime("minute must be in 0..=59"));
        }
        if second > 59 {
            return Err(TimeError::InvalidClockTime("second must be in 0..=59"));
        }
        Ok(Self {
            day_offset: 0,
            hour: hour as u8,
            minute: minute as u8,
            second: second as u8,
            millisecond: 0,
        })
    }

    /// Same clock fields with a different day offset.
    pub fn with_day_offset(self, day_offset: i32) -> Self {
        Self { day_offset, ..self }
    }

    /// Normalize a total-millisecond count into (days, h, m, s, ms).
    ///
    /// Negative totals floor toward the previous day, so the clock
    /// components are always non-negative: −1 ms becomes `-1d 23:59:59.999`.
    pub fn from_total_millis(total: i64) -> Self {
        let days = total.div_euclid(MILLIS_PER_DAY);
        let mut rem = total.rem_euclid(MILLIS_PER_DAY);
        let hour = rem / 3_600_000;
        rem %= 3_600_000;
        let minute = rem / 60_000;
        rem %= 60_000;
        let second = rem / 1_000;
        let millisecond = rem % 1_000;
        Self {
            day_offset: days as i32,
            hour: hour as u8,
            minute: minute as u8,
            second: second as u8,
            millisecond: millisecond as u16,
        }
    }

    /// Total milliseconds represented by this value.
    pub fn total_millis(&self) -> i64 {
        self.day_offset as i64 * MILLIS_PER_DAY
            + self.hour as i64 * 3_600_000
            + self.minute as i64 * 60_000
            + self.second as i64 * 1_000
            + self.millisecond as i64
    }
}

impl Display for ClockTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.day_offset != 0 {
            write!(f, "{:+}d ", self.day_offset)?;
        }
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)?;
        if self.millisecond != 0 {
            write!(f, ".{:03}", self.millisecond)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_construction() {
        let t = ClockTime::new(6, 4, 12).unwrap();
        assert_eq!((t.hour, t.minute, t.second), (6, 4, 12));
        assert_eq!(t.day_offset, 0);
    }

    #[test]
    fn rejects_hour_25() {
        assert_eq!(
            ClockTime::new(25, 0, 0),
            Err(TimeError::InvalidClockTime("hour must be in 0..=23"))
        );
    }

    #[test]
    fn rejects_minute_60() {
        assert!(ClockTime::new(0, 60, 0).is_err());
    }

    #[test]
    fn rejects_second_60() {
        assert!(ClockTime::new(0, 0, 60).is_err());
    }

    #[test]
    fn millis_roundtrip() {
        for &total in &[
            0_i64,
            1,
            999,
            86_399_999,
            86_400_000,
            2 * 86_400_000 + 3_723_004,
            -1,
            -86_400_000,
            -90_061_500,
        ] {
            let t = ClockTime::from_total_millis(total);
            assert_eq!(t.total_millis(), total, "roundtrip failed for {total}");
        }
    }

    #[test]
    fn negative_millis_normalize() {
        let t = ClockTime::from_total_millis(-1);
        assert_eq!(t.day_offset, -1);
        assert_eq!((t.hour, t.minute, t.second, t.millisecond), (23, 59, 59, 999));
    }

    #[test]
    fn day_length_is_one_day() {
        let t = ClockTime::from_total_millis(MILLIS_PER_DAY);
        assert_eq!(t.day_offset, 1);
        assert_eq!((t.hour, t.minute, t.second), (0, 0, 0));
    }

    #[test]
    fn display_forms() {
        assert_eq!(ClockTime::new(6, 4, 0).unwrap().to_string(), "06:04:00");
        let spanning = ClockTime::from_total_millis(MILLIS_PER_DAY + 42 * 60_000);
        assert_eq!(spanning.to_string(), "+1d 00:42:00");
    }
}
