//! Validated geographic coordinate.

use crate::error::AstroError;

/// Geographic location on Earth's surface.
///
/// Construction validates the ranges, so every `Coordinate` in
/// circulation is usable without re-checking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
}

impl Coordinate {
    /// Create a coordinate. Fails before any computation if latitude is
    /// outside [-90, 90] or longitude outside [-180, 180].
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Result<Self, AstroError> {
        if !latitude_deg.is_finite() || !(-90.0..=90.0).contains(&latitude_deg) {
            return Err(AstroError::InvalidCoordinate(
                "latitude must be in [-90, 90] degrees",
            ));
        }
        if !longitude_deg.is_finite() || !(-180.0..=180.0).contains(&longitude_deg) {
            return Err(AstroError::InvalidCoordinate(
                "longitude must be in [-180, 180] degrees",
            ));
        }
        Ok(Self {
            latitude_deg,
            longitude_deg,
        })
    }

    /// Latitude in radians.
    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }
}
