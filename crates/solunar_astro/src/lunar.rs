//! Geocentric lunar position from the truncated Meeus ch. 47 series.
//!
//! The leading periodic terms of tables 47.A/47.B (plus the A1/A2/A3
//! additives and the eccentricity damping of the M-dependent terms) give
//! roughly 0.3° in longitude and a few hundred km in distance — enough
//! for sub-minute rise/set timing once the parallax-adjusted threshold
//! is applied.

use crate::coords::{Equatorial, ecliptic_to_equatorial};
use crate::solar::{centuries_tt, normalize_deg, obliquity_corrected};

/// Earth equatorial radius in km, for horizontal parallax.
const EARTH_RADIUS_KM: f64 = 6_378.14;

/// Mean lunar distance term of the series, km.
const MEAN_DISTANCE_KM: f64 = 385_000.56;

/// Geocentric ecliptic position of the Moon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunarEcliptic {
    /// Ecliptic longitude in degrees, [0, 360).
    pub lon_deg: f64,
    /// Ecliptic latitude in degrees.
    pub lat_deg: f64,
    /// Earth–Moon distance in km.
    pub distance_km: f64,
}

/// Longitude/distance periodic terms (table 47.A, leading rows).
/// Multipliers of (D, M, M', F); amplitudes in 1e-6 deg and 1e-3 km.
#[rustfmt::skip]
const TERMS_LON_DIST: [(i8, i8, i8, i8, f64, f64); 20] = [
    (0,  0,  1,  0,  6_288_774.0, -20_905_355.0),
    (2,  0, -1,  0,  1_274_027.0,  -3_699_111.0),
    (2,  0,  0,  0,    658_314.0,  -2_955_968.0),
    (0,  0,  2,  0,    213_618.0,    -569_925.0),
    (0,  1,  0,  0,   -185_116.0,      48_888.0),
    (0,  0,  0,  2,   -114_332.0,      -3_149.0),
    (2,  0, -2,  0,     58_793.0,     246_158.0),
    (2, -1, -1,  0,     57_066.0,    -152_138.0),
    (2,  0,  1,  0,     53_322.0,    -170_733.0),
    (2, -1,  0,  0,     45_758.0,    -204_586.0),
    (0,  1, -1,  0,    -40_923.0,    -129_620.0),
    (1,  0,  0,  0,    -34_720.0,     108_743.0),
    (0,  1,  1,  0,    -30_383.0,     104_755.0),
    (2,  0,  0, -2,     15_327.0,      10_321.0),
    (0,  0,  1,  2,    -12_528.0,           0.0),
    (0,  0,  1, -2,     10_980.0,      79_661.0),
    (4,  0, -1,  0,     10_675.0,     -34_782.0),
    (0,  0,  3,  0,     10_034.0,     -23_210.0),
    (4,  0, -2,  0,      8_548.0,     -21_636.0),
    (2,  1, -1,  0,     -7_888.0,      24_208.0),
];

/// Latitude periodic terms (table 47.B, leading rows).
/// Multipliers of (D, M, M', F); amplitudes in 1e-6 deg.
#[rustfmt::skip]
const TERMS_LAT: [(i8, i8, i8, i8, f64); 20] = [
    (0,  0,  0,  1,  5_128_122.0),
    (0,  0,  1,  1,    280_602.0),
    (0,  0,  1, -1,    277_693.0),
    (2,  0,  0, -1,    173_237.0),
    (2,  0, -1,  1,     55_413.0),
    (2,  0, -1, -1,     46_271.0),
    (2,  0,  0,  1,     32_573.0),
    (0,  0,  2,  1,     17_198.0),
    (2,  0,  1, -1,      9_266.0),
    (0,  0,  2, -1,      8_822.0),
    (2, -1,  0, -1,      8_216.0),
    (2,  0, -2, -1,      4_324.0),
    (2,  0,  1,  1,      4_200.0),
    (2,  1,  0, -1,     -3_359.0),
    (2, -1, -1,  1,      2_463.0),
    (2, -1,  0,  1,      2_211.0),
    (2, -1, -1, -1,      2_065.0),
    (0,  1, -1, -1,     -1_870.0),
    (4,  0, -1, -1,      1_828.0),
    (0,  1,  0,  1,     -1_794.0),
];

/// Mean longitude L' of the Moon, degrees.
fn mean_longitude(t: f64) -> f64 {
    normalize_deg(
        218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t * t + t.powi(3) / 538_841.0
            - t.powi(4) / 65_194_000.0,
    )
}

/// Mean elongation D of the Moon from the Sun, degrees.
fn mean_elongation(t: f64) -> f64 {
    normalize_deg(
        297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t * t + t.powi(3) / 545_868.0
            - t.powi(4) / 113_065_000.0,
    )
}

/// Mean anomaly M of the Sun, degrees (ch. 47 form).
fn sun_mean_anomaly(t: f64) -> f64 {
    normalize_deg(357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t * t + t.powi(3) / 24_490_000.0)
}

/// Mean anomaly M' of the Moon, degrees.
fn moon_mean_anomaly(t: f64) -> f64 {
    normalize_deg(
        134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t * t + t.powi(3) / 69_699.0
            - t.powi(4) / 14_712_000.0,
    )
}

/// Argument of latitude F of the Moon, degrees.
fn argument_of_latitude(t: f64) -> f64 {
    normalize_deg(
        93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t * t - t.powi(3) / 3_526_000.0
            + t.powi(4) / 863_310_000.0,
    )
}

/// Damping factor for terms involving the Sun's mean anomaly.
fn eccentricity_factor(m_mult: i8, e: f64) -> f64 {
    match m_mult.abs() {
        1 => e,
        2 => e * e,
        _ => 1.0,
    }
}

/// Geocentric ecliptic longitude, latitude, and distance of the Moon
/// at a TT Julian Date.
pub fn lunar_ecliptic(jd_tt: f64) -> LunarEcliptic {
    let t = centuries_tt(jd_tt);
    let lp = mean_longitude(t);
    let d = mean_elongation(t);
    let m = sun_mean_anomaly(t);
    let mp = moon_mean_anomaly(t);
    let f = argument_of_latitude(t);
    let e = 1.0 - 0.002_516 * t - 0.000_007_4 * t * t;

    let mut sum_lon = 0.0;
    let mut sum_dist = 0.0;
    for &(td, tm, tmp, tf, amp_l, amp_r) in &TERMS_LON_DIST {
        let arg = (td as f64 * d + tm as f64 * m + tmp as f64 * mp + tf as f64 * f).to_radians();
        let ef = eccentricity_factor(tm, e);
        sum_lon += amp_l * ef * arg.sin();
        sum_dist += amp_r * ef * arg.cos();
    }

    let mut sum_lat = 0.0;
    for &(td, tm, tmp, tf, amp_b) in &TERMS_LAT {
        let arg = (td as f64 * d + tm as f64 * m + tmp as f64 * mp + tf as f64 * f).to_radians();
        sum_lat += amp_b * eccentricity_factor(tm, e) * arg.sin();
    }

    // Venus, Jupiter, and flattening additives (A1, A2, A3).
    let a1 = normalize_deg(119.75 + 131.849 * t);
    let a2 = normalize_deg(53.09 + 479_264.290 * t);
    let a3 = normalize_deg(313.45 + 481_266.484 * t);

    sum_lon += 3958.0 * a1.to_radians().sin()
        + 1962.0 * (lp - f).to_radians().sin()
        + 318.0 * a2.to_radians().sin();

    sum_lat += -2235.0 * lp.to_radians().sin()
        + 382.0 * a3.to_radians().sin()
        + 175.0 * (a1 - f).to_radians().sin()
        + 175.0 * (a1 + f).to_radians().sin()
        + 127.0 * (lp - mp).to_radians().sin()
        - 115.0 * (lp + mp).to_radians().sin();

    LunarEcliptic {
        lon_deg: normalize_deg(lp + sum_lon / 1e6),
        lat_deg: sum_lat / 1e6,
        distance_km: MEAN_DISTANCE_KM + sum_dist / 1e3,
    }
}

/// Geocentric equatorial position of the Moon at a TT Julian Date.
pub fn lunar_equatorial(jd_tt: f64) -> Equatorial {
    let ecl = lunar_ecliptic(jd_tt);
    let eps = obliquity_corrected(centuries_tt(jd_tt));
    ecliptic_to_equatorial(ecl.lon_deg, ecl.lat_deg, eps)
}

/// Equatorial horizontal parallax of the Moon in degrees, from distance.
pub fn horizontal_parallax_deg(distance_km: f64) -> f64 {
    (EARTH_RADIUS_KM / distance_km).asin().to_degrees()
}
