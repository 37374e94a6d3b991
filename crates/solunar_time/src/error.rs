//! Error types for time conversions.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from clock-time construction or instant arithmetic.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Clock-time field outside its valid range.
    InvalidClockTime(&'static str),
    /// Instant arithmetic left chrono's representable date range.
    InstantOutOfRange,
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidClockTime(msg) => write!(f, "invalid clock time: {msg}"),
            Self::InstantOutOfRange => write!(f, "instant outside representable date range"),
        }
    }
}

impl Error for TimeError {}
