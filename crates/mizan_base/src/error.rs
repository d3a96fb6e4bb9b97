//! Error types for reading mizan vocabularies from text.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from converting a name into one of the closed enums.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseError {
    /// Not one of fire, water, air, earth.
    UnknownElement(String),
    /// Not one of the seven classical planets.
    UnknownPlanet(String),
    /// Not a zodiac sign name (Arabic or western).
    UnknownBurj(String),
    /// Not a day of the week.
    UnknownWeekday(String),
    /// Not one of the five favorability levels.
    UnknownLevel(String),
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownElement(s) => write!(f, "unknown element: {s:?}"),
            Self::UnknownPlanet(s) => write!(f, "unknown planet: {s:?}"),
            Self::UnknownBurj(s) => write!(f, "unknown burj: {s:?}"),
            Self::UnknownWeekday(s) => write!(f, "unknown weekday: {s:?}"),
            Self::UnknownLevel(s) => write!(f, "unknown level: {s:?}"),
        }
    }
}

impl Error for ParseError {}
