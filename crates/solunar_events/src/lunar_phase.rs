//! Lunar age and illumination from Sun–Earth–Moon geometry.

use crate::types::LunarInfo;
use solunar_astro::{lunar_ecliptic, solar_apparent_longitude_deg};
use solunar_time::jd_tt_from_ut;

/// Mean length of the synodic month in days.
pub const SYNODIC_MONTH_DAYS: f64 = 29.530_588_853;

/// Lunar age and illuminated fraction at a UT Julian Date.
///
/// Age maps the Moon–Sun elongation in longitude onto the synodic month;
/// illumination comes from the full angular separation ψ (elongation
/// corrected for ecliptic latitude) via (1 − cos ψ)/2.
pub fn lunar_phase(jd_ut: f64) -> LunarInfo {
    let jd_tt = jd_tt_from_ut(jd_ut);
    let moon = lunar_ecliptic(jd_tt);
    let sun_lon = solar_apparent_longitude_deg(jd_tt);

    let elongation_deg = (moon.lon_deg - sun_lon).rem_euclid(360.0);
    let age_days = elongation_deg / 360.0 * SYNODIC_MONTH_DAYS;

    let cos_psi = moon.lat_deg.to_radians().cos()
        * (moon.lon_deg - sun_lon).to_radians().cos();
    let psi = cos_psi.clamp(-1.0, 1.0).acos();
    let illumination_percent = (1.0 - psi.cos()) / 2.0 * 100.0;

    LunarInfo::new(age_days, illumination_percent)
}
