//! Magic-hour segmentation of the solar altitude curve.
//!
//! The civil day is walked at a fine step and each sample classified
//! against the fixed altitude band (−4° … +6°). Band-edge transitions
//! are refined by bisection against the edge that was crossed, maximal
//! in-band runs become intervals, and the out-of-band remainder splits
//! into daylight (above) and darkness (below). Darkness is computed as
//! the 24 h complement, so the published invariant
//! `daylight + darkness + Σ intervals = 24 h` holds exactly.

use chrono::{DateTime, FixedOffset};

use crate::day_util::day_anchor;
use crate::error::EventError;
use crate::solver::SolverConfig;
use crate::types::{MagicHourInterval, MagicHourPeriod, TrackPoint};
use solunar_astro::{
    Coordinate, Ephemeris, MAGIC_HOUR_LOWER_DEG, MAGIC_HOUR_UPPER_DEG, Sun,
};
use solunar_time::{ClockTime, MILLIS_PER_DAY, SECONDS_PER_DAY};

/// Sampling step for the band walk, minutes. Finer than the solver's
/// hourly default because band passages can be short at low latitudes.
const BAND_STEP_MINUTES: f64 = 10.0;

/// Position of the Sun relative to the magic-hour band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BandState {
    Above,
    InBand,
    Below,
}

fn band_state(altitude_deg: f64) -> BandState {
    if altitude_deg > MAGIC_HOUR_UPPER_DEG {
        BandState::Above
    } else if altitude_deg < MAGIC_HOUR_LOWER_DEG {
        BandState::Below
    } else {
        BandState::InBand
    }
}

/// The band edges crossed when moving between two states, in crossing
/// order, with the state that holds after each edge.
fn edges_between(from: BandState, to: BandState) -> Vec<(f64, BandState)> {
    use BandState::{Above, Below, InBand};
    match (from, to) {
        (Above, InBand) => vec![(MAGIC_HOUR_UPPER_DEG, InBand)],
        (InBand, Above) => vec![(MAGIC_HOUR_UPPER_DEG, Above)],
        (Below, InBand) => vec![(MAGIC_HOUR_LOWER_DEG, InBand)],
        (InBand, Below) => vec![(MAGIC_HOUR_LOWER_DEG, Below)],
        // A full band hop inside one step cannot happen for the Sun
        // (≤ ~2.5° altitude change per 10 min), but resolve it anyway.
        (Above, Below) => vec![
            (MAGIC_HOUR_UPPER_DEG, InBand),
            (MAGIC_HOUR_LOWER_DEG, Below),
        ],
        (Below, Above) => vec![
            (MAGIC_HOUR_LOWER_DEG, InBand),
            (MAGIC_HOUR_UPPER_DEG, Above),
        ],
        _ => Vec::new(),
    }
}

/// Bisect the crossing of one band edge inside a bracket.
fn refine_edge(
    sun: &Sun,
    coord: &Coordinate,
    edge_deg: f64,
    mut lo: f64,
    mut hi: f64,
    config: &SolverConfig,
) -> f64 {
    let lo_above = sun.altitude_deg(lo, coord) >= edge_deg;
    let tolerance_days = config.tolerance_seconds / SECONDS_PER_DAY;
    for _ in 0..config.max_bisections {
        if hi - lo < tolerance_days {
            break;
        }
        let mid = 0.5 * (lo + hi);
        if (sun.altitude_deg(mid, coord) >= edge_deg) == lo_above {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    0.5 * (lo + hi)
}

/// Magic-hour segmentation for the civil day of the query instant.
pub fn magic_hour_period(
    coord: &Coordinate,
    instant: &DateTime<FixedOffset>,
    config: &SolverConfig,
) -> Result<MagicHourPeriod, EventError> {
    config.validate().map_err(EventError::InvalidConfig)?;

    let sun = Sun::new();
    let (day_start, jd0) = day_anchor(instant);
    let jd_end = jd0 + 1.0;
    let step_days = BAND_STEP_MINUTES / 1440.0;
    let steps = (1.0 / step_days).ceil() as usize;

    // Boundary-tagged state segments. Boundaries are snapped to whole
    // milliseconds from the day start so the three published durations
    // partition the day without rounding residue.
    // (start_millis, refined_jd, state, genuine_crossing)
    let mut segments: Vec<(i64, f64, BandState, bool)> = Vec::new();
    let mut state = band_state(sun.altitude_deg(jd0, coord));
    segments.push((0, jd0, state, false));

    let mut t_prev = jd0;
    for i in 1..=steps {
        let t_curr = (jd0 + i as f64 * step_days).min(jd_end);
        let next_state = band_state(sun.altitude_deg(t_curr, coord));
        if next_state != state {
            let mut lo = t_prev;
            for (edge, after) in edges_between(state, next_state) {
                let jd_edge = refine_edge(&sun, coord, edge, lo, t_curr, config);
                let millis = ((jd_edge - jd0) * MILLIS_PER_DAY as f64).round() as i64;
                segments.push((millis.clamp(0, MILLIS_PER_DAY), jd_edge, after, true));
                lo = jd_edge;
            }
            state = next_state;
        }
        t_prev = t_curr;
    }

    // Fold segments into intervals and the daylight total.
    let mut intervals = Vec::new();
    let mut daylight_millis: i64 = 0;
    let mut in_band_millis: i64 = 0;

    for (i, &(start_ms, start_jd, seg_state, genuine_start)) in segments.iter().enumerate() {
        let (end_ms, end_jd, genuine_end) = match segments.get(i + 1) {
            Some(&(ms, jd, _, genuine)) => (ms, jd, genuine),
            None => (MILLIS_PER_DAY, jd_end, false),
        };
        match seg_state {
            BandState::Above => daylight_millis += end_ms - start_ms,
            BandState::InBand => {
                in_band_millis += end_ms - start_ms;
                let point = |ms: i64, jd: f64, genuine: bool| -> Result<TrackPoint, EventError> {
                    Ok(TrackPoint {
                        time: day_start
                            .checked_add_signed(chrono::Duration::milliseconds(ms))
                            .ok_or(solunar_time::TimeError::InstantOutOfRange)?,
                        azimuth_deg: genuine.then(|| sun.horizontal(jd, coord).azimuth_deg),
                    })
                };
                intervals.push(MagicHourInterval {
                    start: point(start_ms, start_jd, genuine_start)?,
                    finish: point(end_ms, end_jd, genuine_end)?,
                });
            }
            BandState::Below => {}
        }
    }

    let darkness_millis = MILLIS_PER_DAY - daylight_millis - in_band_millis;

    Ok(MagicHourPeriod {
        intervals,
        daylight: ClockTime::from_total_millis(daylight_millis),
        darkness: ClockTime::from_total_millis(darkness_millis),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    fn period_for(lat: f64, lon: f64, y: i32, m: u32, d: u32) -> MagicHourPeriod {
        let coord = Coordinate::new(lat, lon).unwrap();
        let instant = utc().with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap();
        magic_hour_period(&coord, &instant, &SolverConfig::default()).unwrap()
    }

    fn total_millis(p: &MagicHourPeriod) -> i64 {
        p.daylight.total_millis()
            + p.darkness.total_millis()
            + p.intervals
                .iter()
                .map(MagicHourInterval::duration_millis)
                .sum::<i64>()
    }

    #[test]
    fn equator_has_morning_and_evening_windows() {
        let p = period_for(0.0, 0.0, 2025, 3, 20);
        assert_eq!(p.intervals.len(), 2, "intervals: {}", p.intervals.len());
        // Near the equator the Sun climbs ~15°/h, so each band passage
        // lasts roughly 40 minutes.
        for iv in &p.intervals {
            let minutes = iv.duration_millis() as f64 / 60_000.0;
            assert!((25.0..70.0).contains(&minutes), "window = {minutes} min");
        }
    }

    #[test]
    fn band_boundaries_carry_azimuth() {
        let p = period_for(0.0, 0.0, 2025, 3, 20);
        for iv in &p.intervals {
            assert!(iv.start.azimuth_deg.is_some());
            assert!(iv.finish.azimuth_deg.is_some());
        }
    }

    #[test]
    fn durations_always_sum_to_24h() {
        for &(lat, m, d) in &[
            (0.0, 3, 20),
            (48.85, 6, 21),
            (68.9585, 6, 21),
            (68.9585, 12, 21),
            (-33.87, 9, 1),
        ] {
            let p = period_for(lat, 0.0, 2025, m, d);
            assert_eq!(total_millis(&p), MILLIS_PER_DAY, "lat {lat} {m}-{d}");
        }
    }

    #[test]
    fn murmansk_midsummer_no_darkness() {
        // The midnight sun dips into the band (min altitude ~2.4°) but
        // never below it: darkness is zero and a window spans midnight.
        let p = period_for(68.9585, 33.0827, 2025, 6, 21);
        assert_eq!(p.darkness.total_millis(), 0);
        assert!(!p.intervals.is_empty());
    }

    #[test]
    fn murmansk_midwinter_band_noon_only() {
        // Midwinter noon peaks near -2.4°, inside the band, so a window
        // exists around noon while daylight is zero and darkness
        // dominates the rest of the day.
        let p = period_for(68.9585, 33.0827, 2025, 12, 21);
        assert_eq!(p.daylight.total_millis(), 0);
        assert!(p.darkness.total_millis() > 18 * 3_600_000);
    }
}
