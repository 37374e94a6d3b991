//! Horizon-crossing event engine: solar/lunar event days, next-event
//! search, magic-hour segmentation, and lunar phase.
//!
//! This crate provides:
//! - A fixed-step + bisection solver for altitude threshold crossings
//! - A closed-table classifier from crossing patterns to day states
//! - Absolute-day, relative-day, and next-upcoming engines per body
//! - Magic-hour band segmentation with exact 24 h accounting
//! - Lunar age and illumination
//!
//! Everything is a pure function of (coordinate, instant, config);
//! results are freshly built immutable values.

pub mod classifier;
pub(crate) mod day_util;
pub mod error;
pub mod lunar_day;
pub mod lunar_phase;
pub mod magic_hour;
pub mod solar_day;
pub mod solver;
pub mod transit;
pub mod types;

pub use classifier::{TerminalState, classify_lunar, classify_solar};
pub use error::EventError;
pub use lunar_day::{lunar_event_day, next_lunar_event, relative_lunar_event_day};
pub use lunar_phase::{SYNODIC_MONTH_DAYS, lunar_phase};
pub use magic_hour::magic_hour_period;
pub use solar_day::{
    next_solar_event, next_solar_event_relative, next_solar_event_short, relative_solar_event_day,
    solar_event_day,
};
pub use solver::{Crossing, DayScan, SolverConfig, next_crossing, scan_window};
pub use transit::{TransitKind, find_transit};
pub use types::{
    AbsoluteEvent, EventKind, LunarDayState, LunarEventDay, LunarInfo, MagicHourInterval,
    MagicHourPeriod, RelativeEvent, RelativeLunarEventDay, RelativeSolarEventDay, SolarDayState,
    SolarEventDay, TrackPoint, UpcomingEvent,
};
