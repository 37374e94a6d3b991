//! Horizon-crossing solver.
//!
//! Samples `altitude(t) − threshold(t)` at a fixed step across a search
//! window, detects sign changes, and refines each bracket by bisection
//! until it is narrower than the time tolerance. Ascending roots are
//! Rise events, descending roots Set events, in chronological order.
//!
//! The solver never fails for astronomically valid input: windows with
//! no crossing report whether the signal stayed above or below, and the
//! polar cases fall out of that naturally.

use crate::error::EventError;
use crate::types::EventKind;
use solunar_astro::{Coordinate, Ephemeris};
use solunar_time::SECONDS_PER_DAY;

/// Configuration for the crossing scan and refinement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Coarse sampling step in minutes. Default: 60.
    pub step_minutes: f64,
    /// Bracket width at which refinement stops, in seconds. Default: 30.
    pub tolerance_seconds: f64,
    /// Maximum bisection iterations per bracket (default 40).
    pub max_bisections: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            step_minutes: 60.0,
            tolerance_seconds: 30.0,
            max_bisections: 40,
        }
    }
}

impl SolverConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.step_minutes.is_finite() || self.step_minutes <= 0.0 {
            return Err("step_minutes must be positive");
        }
        if !self.tolerance_seconds.is_finite() || self.tolerance_seconds <= 0.0 {
            return Err("tolerance_seconds must be positive");
        }
        if self.max_bisections == 0 {
            return Err("max_bisections must be > 0");
        }
        Ok(())
    }
}

/// A refined threshold crossing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Crossing {
    /// Crossing time as a UT Julian Date.
    pub jd_ut: f64,
    /// Rise for ascending, Set for descending.
    pub kind: EventKind,
}

/// Result of scanning one window for crossings.
#[derive(Debug, Clone, PartialEq)]
pub struct DayScan {
    /// Refined crossings in chronological order.
    pub crossings: Vec<Crossing>,
    /// Whether the signal started at or above the threshold.
    pub start_above: bool,
}

impl DayScan {
    /// No crossings and the body stayed above the threshold.
    pub fn always_above(&self) -> bool {
        self.crossings.is_empty() && self.start_above
    }

    /// No crossings and the body stayed below the threshold.
    pub fn always_below(&self) -> bool {
        self.crossings.is_empty() && !self.start_above
    }

    /// Whether the signal ends the window above the threshold.
    pub fn end_above(&self) -> bool {
        match self.crossings.last() {
            Some(c) => c.kind == EventKind::Rise,
            None => self.start_above,
        }
    }

    /// The chronological crossing-kind pattern.
    pub fn pattern(&self) -> Vec<EventKind> {
        self.crossings.iter().map(|c| c.kind).collect()
    }
}

/// Signal value: altitude minus the body threshold at a UT Julian Date.
fn signal<E: Ephemeris>(body: &E, coord: &Coordinate, jd_ut: f64) -> f64 {
    body.altitude_deg(jd_ut, coord) - body.rise_set_threshold_deg(jd_ut)
}

/// A value exactly on the threshold counts as above (boundary inclusion).
fn is_above(value: f64) -> bool {
    value >= 0.0
}

/// Bisect a sign-change bracket down to the configured tolerance.
fn refine_crossing<E: Ephemeris>(
    body: &E,
    coord: &Coordinate,
    mut lo: f64,
    mut hi: f64,
    lo_above: bool,
    config: &SolverConfig,
) -> f64 {
    let tolerance_days = config.tolerance_seconds / SECONDS_PER_DAY;
    for _ in 0..config.max_bisections {
        if hi - lo < tolerance_days {
            break;
        }
        let mid = 0.5 * (lo + hi);
        if is_above(signal(body, coord, mid)) == lo_above {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    0.5 * (lo + hi)
}

/// Scan a window for threshold crossings.
///
/// `jd_start_ut` is the window start (usually local midnight on the UT
/// axis) and `window_hours` its length — 24 h for the Sun, 25 h for the
/// Moon. The final sample lands exactly on the window end.
pub fn scan_window<E: Ephemeris>(
    body: &E,
    coord: &Coordinate,
    jd_start_ut: f64,
    window_hours: f64,
    config: &SolverConfig,
) -> Result<DayScan, EventError> {
    config.validate().map_err(EventError::InvalidConfig)?;

    let window_days = window_hours / 24.0;
    let step_days = config.step_minutes / 1440.0;
    let steps = (window_days / step_days).ceil() as usize;

    let mut crossings = Vec::new();
    let mut t_prev = jd_start_ut;
    let mut above_prev = is_above(signal(body, coord, t_prev));
    let start_above = above_prev;

    for i in 1..=steps {
        let t_curr = (jd_start_ut + i as f64 * step_days).min(jd_start_ut + window_days);
        let above_curr = is_above(signal(body, coord, t_curr));

        if above_curr != above_prev {
            let jd = refine_crossing(body, coord, t_prev, t_curr, above_prev, config);
            let kind = if above_curr {
                EventKind::Rise
            } else {
                EventKind::Set
            };
            log::trace!("crossing {kind:?} at jd {jd:.6}");
            crossings.push(Crossing { jd_ut: jd, kind });
        }

        t_prev = t_curr;
        above_prev = above_curr;
    }

    Ok(DayScan {
        crossings,
        start_above,
    })
}

/// Find the first crossing at or after `jd_query_ut`, scanning forward
/// window by window up to the hard search bound.
///
/// Boundary inclusion: a crossing within one refinement tolerance
/// before the query counts as happening now — re-refining an event and
/// querying at its reported timestamp must return that event, not skip
/// to the next one. Callers map such a crossing to a zero offset.
///
/// Returns `Ok(None)` when the bound is exhausted — a model edge case
/// (e.g. a body that never crosses at this latitude), not an error.
pub fn next_crossing<E: Ephemeris>(
    body: &E,
    coord: &Coordinate,
    jd_query_ut: f64,
    config: &SolverConfig,
) -> Result<Option<Crossing>, EventError> {
    // Hard cap on the expanding search, in days.
    const MAX_SEARCH_DAYS: f64 = 365.0;

    let slack_days = config.tolerance_seconds / SECONDS_PER_DAY;
    let window_hours = body.scan_window_hours();
    let window_days = window_hours / 24.0;
    let search_start = jd_query_ut - slack_days;
    let mut start = search_start;

    while start - search_start < MAX_SEARCH_DAYS {
        let scan = scan_window(body, coord, start, window_hours, config)?;
        if let Some(c) = scan.crossings.iter().find(|c| c.jd_ut >= search_start) {
            return Ok(Some(*c));
        }
        start += window_days;
    }

    log::debug!(
        "next-crossing search exhausted {MAX_SEARCH_DAYS} days after jd {jd_query_ut:.4}"
    );
    Ok(None)
}
