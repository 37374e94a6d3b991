//! Meridian and antimeridian transit search.
//!
//! Roots of the wrapped hour angle: H = 0 for the upper (meridian)
//! transit, H = ±180° for the lower (antimeridian) one. The wrapped
//! difference function jumps by 360° once per cycle, so sign changes are
//! screened for genuineness before bisection, the same way the
//! conjunction-style searches screen angular differences.

use crate::error::EventError;
use crate::solver::SolverConfig;
use solunar_astro::{Coordinate, Ephemeris};
use solunar_time::{SECONDS_PER_DAY, gmst_deg, local_sidereal_deg};

/// Which transit to search for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitKind {
    /// Upper transit: hour angle 0.
    Meridian,
    /// Lower transit: hour angle 180°.
    Antimeridian,
}

impl TransitKind {
    fn target_deg(self) -> f64 {
        match self {
            Self::Meridian => 0.0,
            Self::Antimeridian => 180.0,
        }
    }
}

/// Normalize an angle to (-180, +180].
fn normalize_to_pm180(deg: f64) -> f64 {
    let d = deg.rem_euclid(360.0);
    if d > 180.0 { d - 360.0 } else { d }
}

/// Wrapped distance of the body's hour angle from the transit target.
fn transit_offset_deg<E: Ephemeris>(
    body: &E,
    coord: &Coordinate,
    jd_ut: f64,
    target_deg: f64,
) -> f64 {
    let lst = local_sidereal_deg(gmst_deg(jd_ut), coord.longitude_deg);
    let hour_angle = lst - body.equatorial(jd_ut).ra_deg;
    normalize_to_pm180(hour_angle - target_deg)
}

/// A sign change is a genuine root only when it is not the ±180° wrap.
fn is_genuine_crossing(f_a: f64, f_b: f64) -> bool {
    f_a * f_b < 0.0 && (f_a - f_b).abs() < 270.0
}

/// Find the first transit of the given kind within a window.
///
/// Returns the transit as a UT Julian Date, or `None` when the window
/// holds no such transit (possible for the Moon, whose hour angle gains
/// slightly less than a full turn per civil day).
pub fn find_transit<E: Ephemeris>(
    body: &E,
    coord: &Coordinate,
    jd_start_ut: f64,
    window_hours: f64,
    kind: TransitKind,
    config: &SolverConfig,
) -> Result<Option<f64>, EventError> {
    config.validate().map_err(EventError::InvalidConfig)?;

    let target = kind.target_deg();
    let window_days = window_hours / 24.0;
    let step_days = config.step_minutes / 1440.0;
    let steps = (window_days / step_days).ceil() as usize;
    let tolerance_days = config.tolerance_seconds / SECONDS_PER_DAY;

    let mut t_prev = jd_start_ut;
    let mut f_prev = transit_offset_deg(body, coord, t_prev, target);

    for i in 1..=steps {
        let t_curr = (jd_start_ut + i as f64 * step_days).min(jd_start_ut + window_days);
        let f_curr = transit_offset_deg(body, coord, t_curr, target);

        if is_genuine_crossing(f_prev, f_curr) {
            let (mut lo, mut f_lo, mut hi) = (t_prev, f_prev, t_curr);
            for _ in 0..config.max_bisections {
                if hi - lo < tolerance_days {
                    break;
                }
                let mid = 0.5 * (lo + hi);
                let f_mid = transit_offset_deg(body, coord, mid, target);
                if f_lo * f_mid <= 0.0 {
                    hi = mid;
                } else {
                    lo = mid;
                    f_lo = f_mid;
                }
            }
            return Ok(Some(0.5 * (lo + hi)));
        }

        t_prev = t_curr;
        f_prev = f_curr;
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use solunar_astro::{Moon, Sun};
    use solunar_time::calendar_to_jd;

    #[test]
    fn normalize_wraps_correctly() {
        assert!((normalize_to_pm180(190.0) + 170.0).abs() < 1e-12);
        assert!((normalize_to_pm180(-190.0) - 170.0).abs() < 1e-12);
        assert!((normalize_to_pm180(180.0) - 180.0).abs() < 1e-12);
    }

    #[test]
    fn wrap_jump_is_not_genuine() {
        assert!(!is_genuine_crossing(179.0, -179.0));
        assert!(is_genuine_crossing(-3.0, 4.0));
    }

    #[test]
    fn solar_noon_greenwich_equinox() {
        // At longitude 0 on 2025-03-20 the Sun transits ~12:07 UT
        // (equation of time ≈ -7 min).
        let sun = Sun::new();
        let coord = Coordinate::new(51.5, 0.0).unwrap();
        let jd0 = calendar_to_jd(2025, 3, 20.0);
        let jd_t = find_transit(&sun, &coord, jd0, 24.0, TransitKind::Meridian, &SolverConfig::default())
            .unwrap()
            .expect("sun transits every day");
        let hours = (jd_t - jd0) * 24.0;
        assert!((hours - 12.12).abs() < 0.1, "transit at {hours:.3} h UT");
    }

    #[test]
    fn solar_day_has_both_transits() {
        let sun = Sun::new();
        let coord = Coordinate::new(40.0, -75.0).unwrap();
        let jd0 = calendar_to_jd(2025, 7, 4.0);
        let config = SolverConfig::default();
        let upper = find_transit(&sun, &coord, jd0, 24.0, TransitKind::Meridian, &config).unwrap();
        let lower =
            find_transit(&sun, &coord, jd0, 24.0, TransitKind::Antimeridian, &config).unwrap();
        assert!(upper.is_some());
        assert!(lower.is_some());
    }

    #[test]
    fn lunar_transit_sometimes_absent() {
        // Over a month of civil days at least one lacks a meridian
        // transit (the lunar day outruns the civil day).
        let moon = Moon::new();
        let coord = Coordinate::new(48.85, 2.35).unwrap();
        let config = SolverConfig::default();
        let mut missing = 0;
        for day in 0..31 {
            let jd0 = calendar_to_jd(2025, 5, 1.0) + day as f64;
            if find_transit(&moon, &coord, jd0, 24.0, TransitKind::Meridian, &config)
                .unwrap()
                .is_none()
            {
                missing += 1;
            }
        }
        assert!(missing >= 1, "expected at least one transit-free day");
        assert!(missing <= 2, "too many transit-free days: {missing}");
    }
}
