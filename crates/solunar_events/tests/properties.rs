//! Cross-cutting property tests over a grid of locations and seasons.

use chrono::{FixedOffset, TimeZone};

use solunar_astro::{Coordinate, SolarThreshold};
use solunar_events::{
    MagicHourInterval, SolverConfig, lunar_event_day, magic_hour_period, next_solar_event_short,
    relative_solar_event_day, solar_event_day,
};
use solunar_time::{ClockTime, MILLIS_PER_DAY};

fn utc() -> FixedOffset {
    FixedOffset::east_opt(0).unwrap()
}

const LATITUDES: [f64; 5] = [-60.0, -30.0, 0.0, 30.0, 60.0];
const DATES: [(u32, u32); 4] = [(3, 20), (6, 21), (9, 22), (12, 21)];

/// Events are chronological and azimuths normalized, everywhere.
#[test]
fn events_sorted_and_azimuths_normalized() {
    let config = SolverConfig::default();
    for &lat in &LATITUDES {
        let coord = Coordinate::new(lat, 11.0).unwrap();
        for &(m, d) in &DATES {
            let instant = utc().with_ymd_and_hms(2025, m, d, 12, 0, 0).unwrap();

            let sun = solar_event_day(&coord, &instant, SolarThreshold::Horizon, &config).unwrap();
            for pair in sun.events.windows(2) {
                assert!(pair[0].time <= pair[1].time, "lat {lat} {m}-{d}");
            }
            for e in &sun.events {
                assert!((0.0..360.0).contains(&e.azimuth_deg), "az {}", e.azimuth_deg);
            }

            let moon = lunar_event_day(&coord, &instant, &config).unwrap();
            for pair in moon.events.windows(2) {
                assert!(pair[0].time <= pair[1].time, "lat {lat} {m}-{d} (moon)");
            }
            for e in &moon.events {
                assert!((0.0..360.0).contains(&e.azimuth_deg), "az {}", e.azimuth_deg);
            }
        }
    }
}

/// Identical inputs give identical outputs: no hidden clock or random
/// dependency anywhere in the pipeline.
#[test]
fn idempotent_queries() {
    let coord = Coordinate::new(47.37, 8.54).unwrap();
    let instant = utc().with_ymd_and_hms(2025, 10, 5, 7, 45, 0).unwrap();
    let config = SolverConfig::default();

    let a = relative_solar_event_day(&coord, &instant, SolarThreshold::Horizon, &config).unwrap();
    let b = relative_solar_event_day(&coord, &instant, SolarThreshold::Horizon, &config).unwrap();
    assert_eq!(a, b);

    let ma = lunar_event_day(&coord, &instant, &config).unwrap();
    let mb = lunar_event_day(&coord, &instant, &config).unwrap();
    assert_eq!(ma, mb);
}

/// The 24 h accounting invariant holds across the grid.
#[test]
fn magic_hour_invariant_over_grid() {
    let config = SolverConfig::default();
    for &lat in &LATITUDES {
        let coord = Coordinate::new(lat, -47.0).unwrap();
        for &(m, d) in &DATES {
            let instant = utc().with_ymd_and_hms(2025, m, d, 12, 0, 0).unwrap();
            let p = magic_hour_period(&coord, &instant, &config).unwrap();
            let total = p.daylight.total_millis()
                + p.darkness.total_millis()
                + p.intervals
                    .iter()
                    .map(MagicHourInterval::duration_millis)
                    .sum::<i64>();
            assert_eq!(total, MILLIS_PER_DAY, "lat {lat} {m}-{d}");
        }
    }
}

/// Day and night always complement to 24 h, polar cases included.
#[test]
fn day_night_complement_over_grid() {
    let config = SolverConfig::default();
    for &lat in &[-80.0, -60.0, 0.0, 60.0, 80.0] {
        let coord = Coordinate::new(lat, 0.0).unwrap();
        for &(m, d) in &DATES {
            let instant = utc().with_ymd_and_hms(2025, m, d, 12, 0, 0).unwrap();
            let day = relative_solar_event_day(&coord, &instant, SolarThreshold::Horizon, &config)
                .unwrap();
            assert_eq!(
                day.day_length.total_millis() + day.night_length.total_millis(),
                MILLIS_PER_DAY,
                "lat {lat} {m}-{d}"
            );
        }
    }
}

/// Querying at a previously reported event timestamp returns that same
/// event (never skipped to the following one, never negative), with the
/// offset collapsing to "now" within the refinement tolerance.
#[test]
fn boundary_event_is_included_not_skipped() {
    let coord = Coordinate::new(0.0, 0.0).unwrap();
    let noon = utc().with_ymd_and_hms(2025, 3, 20, 12, 0, 0).unwrap();
    let config = SolverConfig::default();

    let sunset = next_solar_event_short(&coord, &noon, SolarThreshold::Horizon, &config)
        .unwrap()
        .expect("sunset exists");
    let sunset_instant = solar_event_day(&coord, &noon, SolarThreshold::Horizon, &config)
        .unwrap()
        .events[1]
        .time;

    let at_tie = next_solar_event_short(&coord, &sunset_instant, SolarThreshold::Horizon, &config)
        .unwrap()
        .expect("event at the tie instant");
    assert_eq!(at_tie.kind, sunset.kind, "must not skip to the next event");
    assert!(at_tie.millis_from_query >= 0);
    // Two independent refinements of the same root agree to within
    // a couple of tolerance widths (30 s each).
    assert!(
        at_tie.millis_from_query <= 90_000,
        "offset at tie = {} ms",
        at_tie.millis_from_query
    );
}

/// Clock-time validation and normalization properties.
#[test]
fn clock_time_contract() {
    assert!(ClockTime::new(25, 0, 0).is_err());
    assert!(ClockTime::new(23, 60, 0).is_err());
    assert!(ClockTime::new(23, 59, 60).is_err());
    for &ms in &[0_i64, 1, 59_999, MILLIS_PER_DAY - 1, MILLIS_PER_DAY + 1, -42] {
        assert_eq!(ClockTime::from_total_millis(ms).total_millis(), ms);
    }
}
