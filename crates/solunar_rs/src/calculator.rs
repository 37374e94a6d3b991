//! Solar and lunar calculators over the event engines.

use chrono::{DateTime, FixedOffset};

use solunar_astro::{Coordinate, SolarThreshold};
use solunar_events::{
    AbsoluteEvent, EventError, LunarEventDay, MagicHourPeriod, RelativeEvent,
    RelativeLunarEventDay, RelativeSolarEventDay, SolarEventDay, SolverConfig, UpcomingEvent,
    lunar_event_day, magic_hour_period, next_lunar_event, next_solar_event,
    next_solar_event_relative, next_solar_event_short, relative_lunar_event_day,
    relative_solar_event_day, solar_event_day,
};

/// Factory exposing the two calculators as a single entry point.
#[derive(Debug, Clone, Copy, Default)]
pub struct Solunar;

impl Solunar {
    /// Solar calculator with the default configuration.
    pub fn solar() -> SolarCalculator {
        SolarCalculator::new()
    }

    /// Lunar calculator with the default configuration.
    pub fn lunar() -> LunarCalculator {
        LunarCalculator::new()
    }
}

/// Solar queries for arbitrary raw coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarCalculator {
    /// Threshold used for rise/set classification (default: horizon).
    pub threshold: SolarThreshold,
    /// Solver sampling and refinement parameters.
    pub config: SolverConfig,
}

impl Default for SolarCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl SolarCalculator {
    pub fn new() -> Self {
        Self {
            threshold: SolarThreshold::Horizon,
            config: SolverConfig::default(),
        }
    }

    /// Same calculator with a twilight threshold instead of the horizon.
    pub fn with_threshold(threshold: SolarThreshold) -> Self {
        Self {
            threshold,
            ..Self::new()
        }
    }

    /// Absolute-day events for the civil day of `instant`.
    pub fn event_day(
        &self,
        latitude_deg: f64,
        longitude_deg: f64,
        instant: &DateTime<FixedOffset>,
    ) -> Result<SolarEventDay, EventError> {
        let coord = Coordinate::new(latitude_deg, longitude_deg)?;
        solar_event_day(&coord, instant, self.threshold, &self.config)
    }

    /// Relative-day events plus day/night lengths and transits.
    pub fn relative_event_day(
        &self,
        latitude_deg: f64,
        longitude_deg: f64,
        instant: &DateTime<FixedOffset>,
    ) -> Result<RelativeSolarEventDay, EventError> {
        let coord = Coordinate::new(latitude_deg, longitude_deg)?;
        relative_solar_event_day(&coord, instant, self.threshold, &self.config)
    }

    /// Next upcoming event with its absolute date-time.
    pub fn next_event(
        &self,
        latitude_deg: f64,
        longitude_deg: f64,
        instant: &DateTime<FixedOffset>,
    ) -> Result<Option<AbsoluteEvent>, EventError> {
        let coord = Coordinate::new(latitude_deg, longitude_deg)?;
        next_solar_event(&coord, instant, self.threshold, &self.config)
    }

    /// Next upcoming event relative to the query instant.
    pub fn next_event_relative(
        &self,
        latitude_deg: f64,
        longitude_deg: f64,
        instant: &DateTime<FixedOffset>,
    ) -> Result<Option<RelativeEvent>, EventError> {
        let coord = Coordinate::new(latitude_deg, longitude_deg)?;
        next_solar_event_relative(&coord, instant, self.threshold, &self.config)
    }

    /// Next upcoming event in the short shape.
    pub fn next_event_short(
        &self,
        latitude_deg: f64,
        longitude_deg: f64,
        instant: &DateTime<FixedOffset>,
    ) -> Result<Option<UpcomingEvent>, EventError> {
        let coord = Coordinate::new(latitude_deg, longitude_deg)?;
        next_solar_event_short(&coord, instant, self.threshold, &self.config)
    }

    /// Magic-hour segmentation of the civil day.
    pub fn magic_hour(
        &self,
        latitude_deg: f64,
        longitude_deg: f64,
        instant: &DateTime<FixedOffset>,
    ) -> Result<MagicHourPeriod, EventError> {
        let coord = Coordinate::new(latitude_deg, longitude_deg)?;
        magic_hour_period(&coord, instant, &self.config)
    }
}

/// Lunar queries for arbitrary raw coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunarCalculator {
    /// Solver sampling and refinement parameters.
    pub config: SolverConfig,
}

impl Default for LunarCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl LunarCalculator {
    pub fn new() -> Self {
        Self {
            config: SolverConfig::default(),
        }
    }

    /// Absolute-day events with embedded phase.
    pub fn event_day(
        &self,
        latitude_deg: f64,
        longitude_deg: f64,
        instant: &DateTime<FixedOffset>,
    ) -> Result<LunarEventDay, EventError> {
        let coord = Coordinate::new(latitude_deg, longitude_deg)?;
        lunar_event_day(&coord, instant, &self.config)
    }

    /// Relative-day events, visibility lengths, transits, and phase.
    pub fn relative_event_day(
        &self,
        latitude_deg: f64,
        longitude_deg: f64,
        instant: &DateTime<FixedOffset>,
    ) -> Result<RelativeLunarEventDay, EventError> {
        let coord = Coordinate::new(latitude_deg, longitude_deg)?;
        relative_lunar_event_day(&coord, instant, &self.config)
    }

    /// Next upcoming event relative to the query instant.
    pub fn next_event_relative(
        &self,
        latitude_deg: f64,
        longitude_deg: f64,
        instant: &DateTime<FixedOffset>,
    ) -> Result<Option<RelativeEvent>, EventError> {
        let coord = Coordinate::new(latitude_deg, longitude_deg)?;
        next_lunar_event(&coord, instant, &self.config)
    }
}
