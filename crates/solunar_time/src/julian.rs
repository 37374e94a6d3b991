//! Julian Date ↔ Gregorian calendar conversions and chrono interop.
//!
//! The calendar algorithm is the standard Gregorian formulation from
//! spherical-astronomy references (Meeus ch. 7). Zoned instants convert
//! through the Unix epoch, which sits at JD 2440587.5 on the UT axis.

use chrono::{DateTime, Duration, FixedOffset, NaiveTime, Utc};

use crate::error::TimeError;

/// Julian Date of the J2000.0 epoch (2000-Jan-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Seconds per day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Milliseconds per day.
pub const MILLIS_PER_DAY: i64 = 86_400_000;

/// Julian Date of the Unix epoch (1970-Jan-01 00:00 UT).
const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Convert a Gregorian calendar date to Julian Date.
///
/// `day_frac` is the day of month plus the fraction of the day elapsed
/// (e.g. `20.5` for the 20th at 12:00).
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year as f64 - 1.0, month as f64 + 12.0)
    } else {
        (year as f64, month as f64)
    };
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day_frac + b - 1524.5
}

/// Convert a Julian Date back to `(year, month, day_frac)`.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let z = (jd + 0.5).floor();
    let f = jd + 0.5 - z;
    let a = if z < 2_299_161.0 {
        z
    } else {
        let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
        z + 1.0 + alpha - (alpha / 4.0).floor()
    };
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day_frac = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };
    (year as i32, month as u32, day_frac)
}

/// Julian Date (UT axis) of a zoned instant.
pub fn jd_ut_from_instant(instant: &DateTime<FixedOffset>) -> f64 {
    instant.timestamp_millis() as f64 / MILLIS_PER_DAY as f64 + UNIX_EPOCH_JD
}

/// Zoned instant from a Julian Date (UT axis), rounded to the millisecond.
///
/// Fails with [`TimeError::InstantOutOfRange`] only for dates outside
/// chrono's representable range.
pub fn instant_from_jd_ut(
    jd_ut: f64,
    offset: &FixedOffset,
) -> Result<DateTime<FixedOffset>, TimeError> {
    let millis = ((jd_ut - UNIX_EPOCH_JD) * MILLIS_PER_DAY as f64).round() as i64;
    let utc: DateTime<Utc> =
        DateTime::from_timestamp_millis(millis).ok_or(TimeError::InstantOutOfRange)?;
    Ok(utc.with_timezone(offset))
}

/// Local midnight of the civil day containing the given instant,
/// expressed in the instant's own offset.
pub fn civil_day_start(instant: &DateTime<FixedOffset>) -> DateTime<FixedOffset> {
    // FixedOffset has no gaps, so local midnight always exists.
    let midnight = instant
        .naive_local()
        .date()
        .and_time(NaiveTime::default());
    let utc_naive = midnight - Duration::seconds(instant.offset().local_minus_utc() as i64);
    DateTime::from_naive_utc_and_offset(utc_naive, *instant.offset())
}

/// Offset a zoned instant by a signed fractional number of days.
pub fn offset_instant_days(
    base: &DateTime<FixedOffset>,
    days: f64,
) -> Result<DateTime<FixedOffset>, TimeError> {
    let millis = (days * MILLIS_PER_DAY as f64).round() as i64;
    base.checked_add_signed(Duration::milliseconds(millis))
        .ok_or(TimeError::InstantOutOfRange)
}
