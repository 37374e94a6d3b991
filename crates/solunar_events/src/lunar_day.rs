//! Lunar event-day engines.
//!
//! Structure mirrors the solar engines with two lunar twists: the scan
//! window is widened to 25 h so a drifting moonrise just past local
//! midnight still belongs to the queried day, and every result embeds
//! the phase (age + illumination) at the query instant.

use chrono::{DateTime, FixedOffset};

use crate::classifier::{TerminalState, classify_lunar};
use crate::day_util::{
    absolute_event, day_anchor, relative_event, transit_clock_time, above_millis_within,
};
use crate::error::EventError;
use crate::lunar_phase::lunar_phase;
use crate::solver::{SolverConfig, next_crossing, scan_window};
use crate::transit::{TransitKind, find_transit};
use crate::types::{AbsoluteEvent, LunarEventDay, RelativeEvent, RelativeLunarEventDay};
use solunar_astro::{Coordinate, Ephemeris, Moon};
use solunar_time::{ClockTime, MILLIS_PER_DAY, jd_ut_from_instant};

/// Absolute-day query for the Moon.
pub fn lunar_event_day(
    coord: &Coordinate,
    instant: &DateTime<FixedOffset>,
    config: &SolverConfig,
) -> Result<LunarEventDay, EventError> {
    let moon = Moon::new();
    let (_, jd0) = day_anchor(instant);
    let jd_query = jd_ut_from_instant(instant);
    let window = moon.scan_window_hours();

    let scan = scan_window(&moon, coord, jd0, window, config)?;
    let prev_scan = scan_window(&moon, coord, jd0 - 1.0, window, config)?;

    let state = classify_lunar(&scan.pattern(), TerminalState::from_above(scan.start_above));
    let previous_state = classify_lunar(
        &prev_scan.pattern(),
        TerminalState::from_above(prev_scan.start_above),
    );

    let events = scan
        .crossings
        .iter()
        .map(|c| absolute_event(&moon, coord, c, instant.offset()))
        .collect::<Result<Vec<AbsoluteEvent>, _>>()?;

    Ok(LunarEventDay {
        events,
        state,
        previous_state,
        phase: lunar_phase(jd_query),
    })
}

/// Relative-day query for the Moon: events against the query instant,
/// visible/invisible lengths over the civil day, transits, and phase.
pub fn relative_lunar_event_day(
    coord: &Coordinate,
    instant: &DateTime<FixedOffset>,
    config: &SolverConfig,
) -> Result<RelativeLunarEventDay, EventError> {
    let moon = Moon::new();
    let (day_start, jd0) = day_anchor(instant);
    let jd_query = jd_ut_from_instant(instant);
    let window = moon.scan_window_hours();

    let scan = scan_window(&moon, coord, jd0, window, config)?;
    let prev_scan = scan_window(&moon, coord, jd0 - 1.0, window, config)?;

    let state = classify_lunar(&scan.pattern(), TerminalState::from_above(scan.start_above));
    let previous_state = classify_lunar(
        &prev_scan.pattern(),
        TerminalState::from_above(prev_scan.start_above),
    );

    let query_date = day_start.naive_local().date();
    let events = scan
        .crossings
        .iter()
        .map(|c| relative_event(&moon, coord, c, instant.offset(), query_date, jd_query))
        .collect::<Result<Vec<RelativeEvent>, _>>()?;

    // Lengths integrate over the civil 24 h so visible + invisible is
    // exact even though the event window is wider.
    let visible_millis = above_millis_within(&scan, jd0, 1.0);
    let visible_length = ClockTime::from_total_millis(visible_millis);
    let invisible_length = ClockTime::from_total_millis(MILLIS_PER_DAY - visible_millis);

    let meridian = find_transit(&moon, coord, jd0, 24.0, TransitKind::Meridian, config)?;
    let antimeridian =
        find_transit(&moon, coord, jd0, 24.0, TransitKind::Antimeridian, config)?;

    Ok(RelativeLunarEventDay {
        events,
        state,
        previous_state,
        visible_length,
        invisible_length,
        meridian_crossing: transit_clock_time(meridian, jd0),
        antimeridian_crossing: transit_clock_time(antimeridian, jd0),
        phase: lunar_phase(jd_query),
    })
}

/// Next-upcoming lunar event in relative shape.
pub fn next_lunar_event(
    coord: &Coordinate,
    instant: &DateTime<FixedOffset>,
    config: &SolverConfig,
) -> Result<Option<RelativeEvent>, EventError> {
    let moon = Moon::new();
    let jd_query = jd_ut_from_instant(instant);
    let query_date = instant.naive_local().date();
    match next_crossing(&moon, coord, jd_query, config)? {
        Some(c) => {
            let mut event =
                relative_event(&moon, coord, &c, instant.offset(), query_date, jd_query)?;
            // Boundary inclusion: an event at the query instant is "now".
            event.millis_from_query = event.millis_from_query.max(0);
            Ok(Some(event))
        }
        None => Ok(None),
    }
}
