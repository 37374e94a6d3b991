//! Unified entry point for the solunar horizon-event engine.
//!
//! Wraps the event engines behind two calculators that accept raw
//! latitude/longitude (validated here) and a zoned instant, with the
//! default solver configuration applied.
//!
//! # Quick start
//!
//! ```rust
//! use chrono::{FixedOffset, TimeZone};
//! use solunar_rs::Solunar;
//!
//! let utc = FixedOffset::east_opt(0).unwrap();
//! let instant = utc.with_ymd_and_hms(2025, 3, 20, 12, 0, 0).unwrap();
//!
//! let day = Solunar::solar()
//!     .event_day(0.0, 0.0, &instant)
//!     .expect("valid coordinate");
//! for event in &day.events {
//!     println!("{:?} at {} (az {:.1}°)", event.kind, event.time, event.azimuth_deg);
//! }
//!
//! let moon_day = Solunar::lunar()
//!     .event_day(0.0, 0.0, &instant)
//!     .expect("valid coordinate");
//! println!("moon age {:.1} d", moon_day.phase.age_days);
//! ```

pub mod calculator;

pub use calculator::{LunarCalculator, SolarCalculator, Solunar};

// Re-export the published result and input types so callers only need
// `use solunar_rs::*`.
pub use solunar_astro::{Coordinate, SolarThreshold};
pub use solunar_events::{
    AbsoluteEvent, EventError, EventKind, LunarDayState, LunarEventDay, LunarInfo,
    MagicHourInterval, MagicHourPeriod, RelativeEvent, RelativeLunarEventDay,
    RelativeSolarEventDay, SYNODIC_MONTH_DAYS, SolarDayState, SolarEventDay, SolverConfig,
    TrackPoint, UpcomingEvent, lunar_phase,
};
pub use solunar_time::{ClockTime, jd_ut_from_instant};
