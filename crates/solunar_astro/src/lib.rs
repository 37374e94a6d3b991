//! Geocentric Sun/Moon positions and horizontal-coordinate transforms.
//!
//! This crate provides:
//! - Truncated-series solar and lunar ecliptic positions (Meeus)
//! - Ecliptic → equatorial → horizontal coordinate chain
//! - Body-specific rise/set altitude thresholds and twilight depressions
//! - The [`Ephemeris`] capability trait with the [`Sun`] and [`Moon`]
//!   variant implementations consumed by the horizon solver
//!
//! Accuracy target is sub-minute event timing and ≤ 1° azimuth, not
//! observatory-grade ephemeris precision.

pub mod body;
pub mod coordinate;
pub mod coords;
pub mod error;
pub mod lunar;
pub mod solar;

pub use body::{
    Ephemeris, MAGIC_HOUR_LOWER_DEG, MAGIC_HOUR_UPPER_DEG, Moon, SolarThreshold, Sun,
};
pub use coordinate::Coordinate;
pub use coords::{
    Equatorial, Horizontal, bennett_refraction_deg, ecliptic_to_equatorial,
    equatorial_to_horizontal,
};
pub use error::AstroError;
pub use lunar::{LunarEcliptic, horizontal_parallax_deg, lunar_ecliptic, lunar_equatorial};
pub use solar::{solar_apparent_longitude_deg, solar_equatorial};
