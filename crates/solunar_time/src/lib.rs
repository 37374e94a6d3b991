//! Time conversions for horizon-event computation.
//!
//! This crate provides:
//! - Gregorian calendar ↔ Julian Date conversions and chrono interop
//! - ΔT (TT − UT) polynomial approximation with graceful extrapolation
//! - Greenwich/local mean sidereal time
//! - `ClockTime`, a validated clock-time value with a signed day offset
//!
//! All functions are pure arithmetic: no I/O, no system clock, no shared
//! state. A given instant always produces the same result.

pub mod clock;
pub mod delta_t;
pub mod error;
pub mod julian;
pub mod sidereal;

pub use clock::ClockTime;
pub use delta_t::{delta_t_seconds, jd_tt_from_ut};
pub use error::TimeError;
pub use julian::{
    J2000_JD, MILLIS_PER_DAY, SECONDS_PER_DAY, calendar_to_jd, civil_day_start,
    instant_from_jd_ut, jd_to_calendar, jd_ut_from_instant, offset_instant_days,
};
pub use sidereal::{gmst_deg, local_sidereal_deg};
