//! Shared projection helpers for the solar and lunar day engines.

use chrono::{DateTime, FixedOffset, NaiveDate, Timelike};

use crate::error::EventError;
use crate::solver::{Crossing, DayScan};
use crate::types::{AbsoluteEvent, RelativeEvent};
use solunar_astro::{Coordinate, Ephemeris};
use solunar_time::{ClockTime, MILLIS_PER_DAY, instant_from_jd_ut};

/// Project a refined crossing into an absolute event.
pub(crate) fn absolute_event<E: Ephemeris>(
    body: &E,
    coord: &Coordinate,
    crossing: &Crossing,
    offset: &FixedOffset,
) -> Result<AbsoluteEvent, EventError> {
    Ok(AbsoluteEvent {
        kind: crossing.kind,
        time: instant_from_jd_ut(crossing.jd_ut, offset)?,
        azimuth_deg: body.horizontal(crossing.jd_ut, coord).azimuth_deg,
    })
}

/// Project a refined crossing into a relative event.
///
/// The clock time is the event's local time of day; its day offset
/// counts civil days from `query_local_date`. The millisecond offset is
/// signed and zero when the event coincides with the query instant.
pub(crate) fn relative_event<E: Ephemeris>(
    body: &E,
    coord: &Coordinate,
    crossing: &Crossing,
    offset: &FixedOffset,
    query_local_date: NaiveDate,
    jd_query_ut: f64,
) -> Result<RelativeEvent, EventError> {
    let time = instant_from_jd_ut(crossing.jd_ut, offset)?;
    let local = time.naive_local();
    let clock = ClockTime::new(local.hour(), local.minute(), local.second())?;
    let time_of_day = ClockTime {
        millisecond: (local.and_utc().timestamp_subsec_millis() % 1_000) as u16,
        ..clock
    }
    .with_day_offset((local.date() - query_local_date).num_days() as i32);

    Ok(RelativeEvent {
        kind: crossing.kind,
        time_of_day,
        millis_from_query: millis_between(jd_query_ut, crossing.jd_ut),
        azimuth_deg: body.horizontal(crossing.jd_ut, coord).azimuth_deg,
    })
}

/// Signed milliseconds from one UT Julian Date to another.
pub(crate) fn millis_between(jd_from: f64, jd_to: f64) -> i64 {
    ((jd_to - jd_from) * MILLIS_PER_DAY as f64).round() as i64
}

/// Milliseconds spent at or above the threshold within
/// `[jd_start, jd_start + span_days]`, from a scan covering the span.
pub(crate) fn above_millis_within(scan: &DayScan, jd_start: f64, span_days: f64) -> i64 {
    let jd_end = jd_start + span_days;
    let mut above = scan.start_above;
    let mut segment_start = jd_start;
    let mut total_days = 0.0;

    for c in &scan.crossings {
        let jd = c.jd_ut.clamp(jd_start, jd_end);
        if above {
            total_days += jd - segment_start;
        }
        segment_start = jd;
        above = c.kind == crate::types::EventKind::Rise;
    }
    if above && segment_start < jd_end {
        total_days += jd_end - segment_start;
    }

    (total_days * MILLIS_PER_DAY as f64).round() as i64
}

/// Convert an optional transit JD to a local clock time of day.
pub(crate) fn transit_clock_time(jd_transit: Option<f64>, jd_day_start: f64) -> Option<ClockTime> {
    jd_transit.map(|jd| ClockTime::from_total_millis(millis_between(jd_day_start, jd)))
}

/// Local midnight of the query's civil day plus its JD, shared by every
/// engine entry point.
pub(crate) fn day_anchor(instant: &DateTime<FixedOffset>) -> (DateTime<FixedOffset>, f64) {
    let day_start = solunar_time::civil_day_start(instant);
    let jd0 = solunar_time::jd_ut_from_instant(&day_start);
    (day_start, jd0)
}
