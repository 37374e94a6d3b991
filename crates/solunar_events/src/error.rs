//! Error types for event computation.

use std::error::Error;
use std::fmt::{Display, Formatter};

use solunar_astro::AstroError;
use solunar_time::TimeError;

/// Errors from event-day and search computations.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EventError {
    /// Error from coordinate validation.
    Astro(AstroError),
    /// Error from time conversion or clock-time construction.
    Time(TimeError),
    /// Invalid solver configuration parameter.
    InvalidConfig(&'static str),
}

impl Display for EventError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Astro(e) => write!(f, "astro error: {e}"),
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl Error for EventError {}

impl From<AstroError> for EventError {
    fn from(e: AstroError) -> Self {
        Self::Astro(e)
    }
}

impl From<TimeError> for EventError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
