//! Coordinate systems and the ecliptic → equatorial → horizontal chain.

/// Geocentric equatorial position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Equatorial {
    /// Right ascension in degrees, [0, 360).
    pub ra_deg: f64,
    /// Declination in degrees, [-90, 90].
    pub dec_deg: f64,
}

/// Horizontal position for an observer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Horizontal {
    /// Altitude above the geometric horizon in degrees.
    pub altitude_deg: f64,
    /// Azimuth in degrees, [0, 360), clockwise from north.
    pub azimuth_deg: f64,
}

/// Convert ecliptic longitude/latitude to equatorial coordinates.
pub fn ecliptic_to_equatorial(lon_deg: f64, lat_deg: f64, obliquity_deg: f64) -> Equatorial {
    let lon = lon_deg.to_radians();
    let lat = lat_deg.to_radians();
    let eps = obliquity_deg.to_radians();

    let ra = (lon.sin() * eps.cos() - lat.tan() * eps.sin())
        .atan2(lon.cos())
        .to_degrees()
        .rem_euclid(360.0);
    let dec = (lat.sin() * eps.cos() + lat.cos() * eps.sin() * lon.sin())
        .asin()
        .to_degrees();
    Equatorial {
        ra_deg: ra,
        dec_deg: dec,
    }
}

/// Convert equatorial coordinates to horizontal for an observer.
///
/// Hour angle H = LST − RA. Altitude and azimuth follow the standard
/// spherical triangle; azimuth is rotated to measure clockwise from
/// north and normalized to [0, 360).
pub fn equatorial_to_horizontal(
    equ: &Equatorial,
    latitude_deg: f64,
    lst_deg: f64,
) -> Horizontal {
    let h = (lst_deg - equ.ra_deg).to_radians();
    let phi = latitude_deg.to_radians();
    let dec = equ.dec_deg.to_radians();

    let altitude = (phi.sin() * dec.sin() + phi.cos() * dec.cos() * h.cos()).asin();
    // atan2 form measures from south; +180° re-anchors at north.
    let azimuth = h
        .sin()
        .atan2(h.cos() * phi.sin() - dec.tan() * phi.cos())
        .to_degrees()
        + 180.0;

    Horizontal {
        altitude_deg: altitude.to_degrees(),
        azimuth_deg: azimuth.rem_euclid(360.0),
    }
}

/// Bennett's atmospheric refraction in degrees for a true altitude.
///
/// Returns the amount by which the body appears lifted. Zero well below
/// the horizon, where the formula is meaningless.
pub fn bennett_refraction_deg(altitude_deg: f64) -> f64 {
    if altitude_deg < -1.0 {
        return 0.0;
    }
    let arg = (altitude_deg + 10.3 / (altitude_deg + 5.11)).to_radians();
    1.02 / (60.0 * arg.tan())
}
