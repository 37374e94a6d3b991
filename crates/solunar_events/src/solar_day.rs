//! Solar event-day engines: absolute, relative, and next-upcoming shapes.
//!
//! All three reuse the solver and classifier; they differ only in how
//! refined crossings are projected into the published result.

use chrono::{DateTime, FixedOffset};

use crate::classifier::{TerminalState, classify_solar};
use crate::day_util::{
    absolute_event, day_anchor, millis_between, relative_event, transit_clock_time,
    above_millis_within,
};
use crate::error::EventError;
use crate::solver::{SolverConfig, next_crossing, scan_window};
use crate::transit::{TransitKind, find_transit};
use crate::types::{
    AbsoluteEvent, RelativeEvent, RelativeSolarEventDay, SolarEventDay, UpcomingEvent,
};
use solunar_astro::{Coordinate, Ephemeris, SolarThreshold, Sun};
use solunar_time::{ClockTime, MILLIS_PER_DAY, jd_ut_from_instant};

/// Absolute-day query: the civil day's events with full zoned date-times.
pub fn solar_event_day(
    coord: &Coordinate,
    instant: &DateTime<FixedOffset>,
    threshold: SolarThreshold,
    config: &SolverConfig,
) -> Result<SolarEventDay, EventError> {
    let sun = Sun::with_threshold(threshold);
    let (_, jd0) = day_anchor(instant);

    let scan = scan_window(&sun, coord, jd0, sun.scan_window_hours(), config)?;
    let prev_scan = scan_window(&sun, coord, jd0 - 1.0, sun.scan_window_hours(), config)?;

    let state = classify_solar(&scan.pattern(), TerminalState::from_above(scan.start_above));
    let previous_state = classify_solar(
        &prev_scan.pattern(),
        TerminalState::from_above(prev_scan.start_above),
    );

    let events = scan
        .crossings
        .iter()
        .map(|c| absolute_event(&sun, coord, c, instant.offset()))
        .collect::<Result<Vec<AbsoluteEvent>, _>>()?;

    Ok(SolarEventDay {
        events,
        state,
        previous_state,
    })
}

/// Relative-day query: events against the query instant, plus day/night
/// lengths and the meridian/antimeridian transit times.
pub fn relative_solar_event_day(
    coord: &Coordinate,
    instant: &DateTime<FixedOffset>,
    threshold: SolarThreshold,
    config: &SolverConfig,
) -> Result<RelativeSolarEventDay, EventError> {
    let sun = Sun::with_threshold(threshold);
    let (day_start, jd0) = day_anchor(instant);
    let jd_query = jd_ut_from_instant(instant);

    let scan = scan_window(&sun, coord, jd0, sun.scan_window_hours(), config)?;
    let prev_scan = scan_window(&sun, coord, jd0 - 1.0, sun.scan_window_hours(), config)?;

    let state = classify_solar(&scan.pattern(), TerminalState::from_above(scan.start_above));
    let previous_state = classify_solar(
        &prev_scan.pattern(),
        TerminalState::from_above(prev_scan.start_above),
    );

    let query_date = day_start.naive_local().date();
    let events = scan
        .crossings
        .iter()
        .map(|c| relative_event(&sun, coord, c, instant.offset(), query_date, jd_query))
        .collect::<Result<Vec<RelativeEvent>, _>>()?;

    let day_millis = above_millis_within(&scan, jd0, 1.0);
    let day_length = ClockTime::from_total_millis(day_millis);
    let night_length = ClockTime::from_total_millis(MILLIS_PER_DAY - day_millis);

    let meridian = find_transit(&sun, coord, jd0, 24.0, TransitKind::Meridian, config)?;
    let antimeridian =
        find_transit(&sun, coord, jd0, 24.0, TransitKind::Antimeridian, config)?;

    Ok(RelativeSolarEventDay {
        events,
        state,
        previous_state,
        day_length,
        night_length,
        meridian_crossing: transit_clock_time(meridian, jd0),
        antimeridian_crossing: transit_clock_time(antimeridian, jd0),
    })
}

/// Next-upcoming solar event in absolute shape.
///
/// `Ok(None)` when the bounded forward search finds no crossing.
pub fn next_solar_event(
    coord: &Coordinate,
    instant: &DateTime<FixedOffset>,
    threshold: SolarThreshold,
    config: &SolverConfig,
) -> Result<Option<AbsoluteEvent>, EventError> {
    let sun = Sun::with_threshold(threshold);
    let jd_query = jd_ut_from_instant(instant);
    match next_crossing(&sun, coord, jd_query, config)? {
        Some(c) => Ok(Some(absolute_event(&sun, coord, &c, instant.offset())?)),
        None => Ok(None),
    }
}

/// Next-upcoming solar event in relative shape.
pub fn next_solar_event_relative(
    coord: &Coordinate,
    instant: &DateTime<FixedOffset>,
    threshold: SolarThreshold,
    config: &SolverConfig,
) -> Result<Option<RelativeEvent>, EventError> {
    let sun = Sun::with_threshold(threshold);
    let jd_query = jd_ut_from_instant(instant);
    let query_date = instant.naive_local().date();
    match next_crossing(&sun, coord, jd_query, config)? {
        Some(c) => {
            let mut event =
                relative_event(&sun, coord, &c, instant.offset(), query_date, jd_query)?;
            // Boundary inclusion: an event at the query instant is "now".
            event.millis_from_query = event.millis_from_query.max(0);
            Ok(Some(event))
        }
        None => Ok(None),
    }
}

/// Next-upcoming solar event in short shape: kind, azimuth, and the
/// millisecond offset from now (zero if the event is exactly now).
pub fn next_solar_event_short(
    coord: &Coordinate,
    instant: &DateTime<FixedOffset>,
    threshold: SolarThreshold,
    config: &SolverConfig,
) -> Result<Option<UpcomingEvent>, EventError> {
    let sun = Sun::with_threshold(threshold);
    let jd_query = jd_ut_from_instant(instant);
    Ok(next_crossing(&sun, coord, jd_query, config)?.map(|c| UpcomingEvent {
        kind: c.kind,
        millis_from_query: millis_between(jd_query, c.jd_ut).max(0),
        azimuth_deg: sun.horizontal(c.jd_ut, coord).azimuth_deg,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EventKind, SolarDayState};
    use chrono::TimeZone;

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    #[test]
    fn equator_equinox_has_rise_then_set() {
        let coord = Coordinate::new(0.0, 0.0).unwrap();
        let instant = utc().with_ymd_and_hms(2025, 3, 20, 12, 0, 0).unwrap();
        let day = solar_event_day(&coord, &instant, SolarThreshold::Horizon, &SolverConfig::default())
            .unwrap();
        assert_eq!(day.state, SolarDayState::RisenAndSet);
        assert_eq!(day.events.len(), 2);
        assert_eq!(day.events[0].kind, EventKind::Rise);
        assert_eq!(day.events[1].kind, EventKind::Set);
        // Sunrise azimuth near due east, sunset near due west at the equinox.
        assert!((day.events[0].azimuth_deg - 90.0).abs() < 3.0);
        assert!((day.events[1].azimuth_deg - 270.0).abs() < 3.0);
    }

    #[test]
    fn relative_day_lengths_sum_to_24h() {
        let coord = Coordinate::new(48.85, 2.35).unwrap();
        let instant = utc().with_ymd_and_hms(2025, 5, 10, 6, 0, 0).unwrap();
        let day = relative_solar_event_day(
            &coord,
            &instant,
            SolarThreshold::Horizon,
            &SolverConfig::default(),
        )
        .unwrap();
        assert_eq!(
            day.day_length.total_millis() + day.night_length.total_millis(),
            MILLIS_PER_DAY
        );
        assert!(day.meridian_crossing.is_some());
    }

    #[test]
    fn relative_events_straddle_query() {
        // Query at noon: the rise offset is negative, the set positive.
        let coord = Coordinate::new(0.0, 0.0).unwrap();
        let instant = utc().with_ymd_and_hms(2025, 3, 20, 12, 0, 0).unwrap();
        let day = relative_solar_event_day(
            &coord,
            &instant,
            SolarThreshold::Horizon,
            &SolverConfig::default(),
        )
        .unwrap();
        assert_eq!(day.events.len(), 2);
        assert!(day.events[0].millis_from_query < 0);
        assert!(day.events[1].millis_from_query > 0);
    }

    #[test]
    fn next_event_after_noon_is_sunset() {
        let coord = Coordinate::new(0.0, 0.0).unwrap();
        let instant = utc().with_ymd_and_hms(2025, 3, 20, 12, 0, 0).unwrap();
        let next = next_solar_event_short(
            &coord,
            &instant,
            SolarThreshold::Horizon,
            &SolverConfig::default(),
        )
        .unwrap()
        .expect("equator always has a next event");
        assert_eq!(next.kind, EventKind::Set);
        assert!(next.millis_from_query > 0);
        assert!(next.millis_from_query < MILLIS_PER_DAY);
    }

    #[test]
    fn twilight_threshold_widens_the_day() {
        let coord = Coordinate::new(48.85, 2.35).unwrap();
        let instant = utc().with_ymd_and_hms(2025, 5, 10, 6, 0, 0).unwrap();
        let config = SolverConfig::default();
        let horizon =
            relative_solar_event_day(&coord, &instant, SolarThreshold::Horizon, &config).unwrap();
        let civil = relative_solar_event_day(
            &coord,
            &instant,
            SolarThreshold::CivilTwilight,
            &config,
        )
        .unwrap();
        assert!(
            civil.day_length.total_millis() > horizon.day_length.total_millis(),
            "civil day should be longer"
        );
    }
}
