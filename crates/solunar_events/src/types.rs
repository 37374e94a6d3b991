//! Published result types for event-day, next-event, and magic-hour queries.
//!
//! All types are plain immutable values created fresh per query. Event
//! lists are chronological by construction and azimuths are normalized
//! to [0, 360) before they reach these shapes.

use chrono::{DateTime, FixedOffset};

use crate::lunar_phase::SYNODIC_MONTH_DAYS;
use solunar_time::ClockTime;

/// Direction of a horizon crossing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Ascending crossing: the body moves above the threshold.
    Rise,
    /// Descending crossing: the body moves below the threshold.
    Set,
}

/// An event carrying its full zoned date-time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AbsoluteEvent {
    pub kind: EventKind,
    /// Event time in the caller's UTC offset.
    pub time: DateTime<FixedOffset>,
    /// Azimuth of the body at the event, degrees [0, 360) from north.
    pub azimuth_deg: f64,
}

/// An event expressed relative to the query instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RelativeEvent {
    pub kind: EventKind,
    /// Local clock time of the event; the day offset counts civil days
    /// from the query's civil day (lunar events can spill past midnight).
    pub time_of_day: ClockTime,
    /// Signed milliseconds from the query instant to the event.
    /// Zero means the event coincides with the query instant.
    pub millis_from_query: i64,
    /// Azimuth of the body at the event, degrees [0, 360) from north.
    pub azimuth_deg: f64,
}

/// The shortest event shape: just kind, azimuth, and offset-from-now.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UpcomingEvent {
    pub kind: EventKind,
    /// Milliseconds from the query instant to the event, ≥ 0.
    pub millis_from_query: i64,
    /// Azimuth of the body at the event, degrees [0, 360) from north.
    pub azimuth_deg: f64,
}

/// Classified crossing pattern of a solar civil day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolarDayState {
    /// The Sun was up (or rose) and set; the normal rise-before-set day.
    RisenAndSet,
    /// The Sun set before it rose within the day (or only rose).
    SetAndRisen,
    /// Above the horizon for the whole day.
    PolarDay,
    /// Below the horizon for the whole day.
    PolarNight,
}

/// Classified crossing pattern of a lunar day.
///
/// Richer than the solar set: the lunar day runs ~50 minutes longer than
/// the civil day, so single-crossing and triple-crossing days are routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LunarDayState {
    /// Set first, then rose.
    SetAndRisen,
    /// Rose first, then set.
    RisenAndSet,
    /// Three crossings: set, rise, set.
    SetRiseSet,
    /// Above the threshold the whole day.
    FullDay,
    /// Below the threshold the whole day.
    FullNight,
    /// Single set event (was up at the day start).
    OnlySet,
    /// Single rise event (was down at the day start).
    OnlyRisen,
    /// Crossing pattern outside the defined mapping.
    Error,
}

/// Lunar age and illumination at an instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunarInfo {
    /// Age in days since new moon, [0, synodic month).
    pub age_days: f64,
    /// Illuminated fraction of the disc in percent, [0, 100].
    pub illumination_percent: f64,
}

impl LunarInfo {
    /// Build with the invariants applied: age wraps into the synodic
    /// month, illumination clamps to [0, 100].
    pub fn new(age_days: f64, illumination_percent: f64) -> Self {
        Self {
            age_days: age_days.rem_euclid(SYNODIC_MONTH_DAYS),
            illumination_percent: illumination_percent.clamp(0.0, 100.0),
        }
    }
}

/// Absolute-day solar result: the civil day's events with full date-times.
#[derive(Debug, Clone, PartialEq)]
pub struct SolarEventDay {
    /// Chronological events of the civil day.
    pub events: Vec<AbsoluteEvent>,
    /// State of the queried day.
    pub state: SolarDayState,
    /// State of the preceding civil day.
    pub previous_state: SolarDayState,
}

/// Relative-day solar result: events plus day/night arithmetic.
#[derive(Debug, Clone, PartialEq)]
pub struct RelativeSolarEventDay {
    /// Chronological events of the civil day.
    pub events: Vec<RelativeEvent>,
    pub state: SolarDayState,
    pub previous_state: SolarDayState,
    /// Time above the threshold within the civil day.
    pub day_length: ClockTime,
    /// Complement of `day_length` to 24 h.
    pub night_length: ClockTime,
    /// Local clock time of the meridian (upper) transit, if any.
    pub meridian_crossing: Option<ClockTime>,
    /// Local clock time of the antimeridian (lower) transit, if any.
    pub antimeridian_crossing: Option<ClockTime>,
}

/// Absolute-day lunar result.
#[derive(Debug, Clone, PartialEq)]
pub struct LunarEventDay {
    /// Chronological events of the widened lunar day window.
    pub events: Vec<AbsoluteEvent>,
    pub state: LunarDayState,
    pub previous_state: LunarDayState,
    /// Age and illumination at the query instant.
    pub phase: LunarInfo,
}

/// Relative-day lunar result.
#[derive(Debug, Clone, PartialEq)]
pub struct RelativeLunarEventDay {
    /// Chronological events of the widened lunar day window; entries past
    /// local midnight carry a day offset in their clock time.
    pub events: Vec<RelativeEvent>,
    pub state: LunarDayState,
    pub previous_state: LunarDayState,
    /// Time above the threshold within the civil day.
    pub visible_length: ClockTime,
    /// Complement of `visible_length` to 24 h.
    pub invisible_length: ClockTime,
    /// Local clock time of the meridian transit, if one falls in the day.
    pub meridian_crossing: Option<ClockTime>,
    /// Local clock time of the antimeridian transit, if one falls in the day.
    pub antimeridian_crossing: Option<ClockTime>,
    /// Age and illumination at the query instant.
    pub phase: LunarInfo,
}

/// One end of a magic-hour interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackPoint {
    pub time: DateTime<FixedOffset>,
    /// Solar azimuth at a genuine band-edge crossing; `None` when the
    /// boundary is the day's start or end.
    pub azimuth_deg: Option<f64>,
}

/// A maximal interval with the Sun inside the magic-hour band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MagicHourInterval {
    pub start: TrackPoint,
    pub finish: TrackPoint,
}

impl MagicHourInterval {
    /// Interval duration in milliseconds.
    pub fn duration_millis(&self) -> i64 {
        (self.finish.time - self.start.time).num_milliseconds()
    }
}

/// Magic-hour segmentation of a civil day.
///
/// `daylight` + `darkness` + the interval durations always total exactly
/// 24 hours of wall time.
#[derive(Debug, Clone, PartialEq)]
pub struct MagicHourPeriod {
    /// Chronological in-band intervals.
    pub intervals: Vec<MagicHourInterval>,
    /// Time spent above the band within the civil day.
    pub daylight: ClockTime,
    /// Time spent below the band within the civil day.
    pub darkness: ClockTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lunar_info_clamps_illumination() {
        let info = LunarInfo::new(10.0, 104.2);
        assert_eq!(info.illumination_percent, 100.0);
        let info = LunarInfo::new(10.0, -0.3);
        assert_eq!(info.illumination_percent, 0.0);
    }

    #[test]
    fn lunar_info_wraps_age() {
        let info = LunarInfo::new(SYNODIC_MONTH_DAYS + 1.5, 50.0);
        assert!((info.age_days - 1.5).abs() < 1e-9, "age = {}", info.age_days);
        let info = LunarInfo::new(-1.0, 50.0);
        assert!(
            (0.0..SYNODIC_MONTH_DAYS).contains(&info.age_days),
            "age = {}",
            info.age_days
        );
    }

    #[test]
    fn event_kind_eq() {
        assert_eq!(EventKind::Rise, EventKind::Rise);
        assert_ne!(EventKind::Rise, EventKind::Set);
    }
}
