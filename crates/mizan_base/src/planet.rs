//! The seven classical planets (al-kawakib al-sab'a).
//!
//! Planets rule the days of the week and the planetary hours. Each planet
//! carries a ruling element, which becomes the element of the hour it rules.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::element::Element;
use crate::error::ParseError;

/// The 7 classical planets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Planet {
    Sun,
    Moon,
    Mars,
    Mercury,
    Jupiter,
    Venus,
    Saturn,
}

/// All 7 planets in code order (weekday order, Sun first).
pub const ALL_PLANETS: [Planet; 7] = [
    Planet::Sun,
    Planet::Moon,
    Planet::Mars,
    Planet::Mercury,
    Planet::Jupiter,
    Planet::Venus,
    Planet::Saturn,
];

/// Chaldean order, slowest to fastest. Successive planetary hours step
/// through this sequence.
pub const CHALDEAN_ORDER: [Planet; 7] = [
    Planet::Saturn,
    Planet::Jupiter,
    Planet::Mars,
    Planet::Sun,
    Planet::Venus,
    Planet::Mercury,
    Planet::Moon,
];

impl Planet {
    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mars => "Mars",
            Self::Mercury => "Mercury",
            Self::Jupiter => "Jupiter",
            Self::Venus => "Venus",
            Self::Saturn => "Saturn",
        }
    }

    /// Arabic name (transliterated).
    pub const fn arabic_name(self) -> &'static str {
        match self {
            Self::Sun => "Shams",
            Self::Moon => "Qamar",
            Self::Mars => "Mirrikh",
            Self::Mercury => "Utarid",
            Self::Jupiter => "Mushtari",
            Self::Venus => "Zuhra",
            Self::Saturn => "Zuhal",
        }
    }

    /// 0-based index into ALL_PLANETS.
    pub const fn index(self) -> u8 {
        match self {
            Self::Sun => 0,
            Self::Moon => 1,
            Self::Mars => 2,
            Self::Mercury => 3,
            Self::Jupiter => 4,
            Self::Venus => 5,
            Self::Saturn => 6,
        }
    }

    /// Planet for a 0-based index. Returns None if index >= 7.
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 7 {
            Some(ALL_PLANETS[index as usize])
        } else {
            None
        }
    }

    /// 0-based position in CHALDEAN_ORDER.
    pub const fn chaldean_index(self) -> u8 {
        match self {
            Self::Saturn => 0,
            Self::Jupiter => 1,
            Self::Mars => 2,
            Self::Sun => 3,
            Self::Venus => 4,
            Self::Mercury => 5,
            Self::Moon => 6,
        }
    }

    /// Ruling element. This is the element of any hour the planet rules.
    ///
    /// Sun/Mars fire, Moon/Venus water, Mercury/Jupiter air, Saturn earth.
    pub const fn element(self) -> Element {
        match self {
            Self::Sun | Self::Mars => Element::Fire,
            Self::Moon | Self::Venus => Element::Water,
            Self::Mercury | Self::Jupiter => Element::Air,
            Self::Saturn => Element::Earth,
        }
    }

    /// Luminaries never station retrograde.
    pub const fn is_luminary(self) -> bool {
        matches!(self, Self::Sun | Self::Moon)
    }
}

impl Display for Planet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Planet {
    type Err = ParseError;

    /// Case-insensitive on the English or Arabic name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        ALL_PLANETS
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(t) || p.arabic_name().eq_ignore_ascii_case(t))
            .ok_or_else(|| ParseError::UnknownPlanet(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_planets_count() {
        assert_eq!(ALL_PLANETS.len(), 7);
    }

    #[test]
    fn indices_sequential() {
        for (i, p) in ALL_PLANETS.iter().enumerate() {
            assert_eq!(p.index() as usize, i);
            assert_eq!(Planet::from_index(i as u8), Some(*p));
        }
        assert_eq!(Planet::from_index(7), None);
    }

    #[test]
    fn chaldean_indices_sequential() {
        for (i, p) in CHALDEAN_ORDER.iter().enumerate() {
            assert_eq!(p.chaldean_index() as usize, i);
        }
    }

    #[test]
    fn chaldean_order_is_permutation() {
        for p in ALL_PLANETS {
            assert_eq!(CHALDEAN_ORDER.iter().filter(|c| **c == p).count(), 1);
        }
    }

    #[test]
    fn elements() {
        assert_eq!(Planet::Mars.element(), Element::Fire);
        assert_eq!(Planet::Moon.element(), Element::Water);
        assert_eq!(Planet::Jupiter.element(), Element::Air);
        assert_eq!(Planet::Saturn.element(), Element::Earth);
    }

    #[test]
    fn parse_english_and_arabic() {
        assert_eq!("mars".parse::<Planet>(), Ok(Planet::Mars));
        assert_eq!("SATURN".parse::<Planet>(), Ok(Planet::Saturn));
        assert_eq!("Zuhra".parse::<Planet>(), Ok(Planet::Venus));
        assert!("Pluto".parse::<Planet>().is_err());
    }

    #[test]
    fn only_luminaries_flagged() {
        let count = ALL_PLANETS.iter().filter(|p| p.is_luminary()).count();
        assert_eq!(count, 2);
    }
}
