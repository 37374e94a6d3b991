//! Error types for position calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from observer-input validation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum AstroError {
    /// Latitude or longitude outside its valid range.
    InvalidCoordinate(&'static str),
}

impl Display for AstroError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCoordinate(msg) => write!(f, "invalid coordinate: {msg}"),
        }
    }
}

impl Error for AstroError {}
