//! The four classical elements.
//!
//! Elements are assigned to people (from their name or birth sign), to
//! planets, to zodiac signs, and through the ruling planet to each
//! planetary hour. The set is closed.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::ParseError;

/// Fire, water, air, earth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Element {
    Fire,
    Water,
    Air,
    Earth,
}

/// All 4 elements in code order (0 = Fire, 3 = Earth).
pub const ALL_ELEMENTS: [Element; 4] = [Element::Fire, Element::Water, Element::Air, Element::Earth];

impl Element {
    /// Lowercase name, as used by the application.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fire => "fire",
            Self::Water => "water",
            Self::Air => "air",
            Self::Earth => "earth",
        }
    }

    /// Arabic name (transliterated).
    pub const fn arabic_name(self) -> &'static str {
        match self {
            Self::Fire => "Nar",
            Self::Water => "Ma'",
            Self::Air => "Hawa'",
            Self::Earth => "Turab",
        }
    }

    /// 0-based index into ALL_ELEMENTS.
    pub const fn index(self) -> u8 {
        match self {
            Self::Fire => 0,
            Self::Water => 1,
            Self::Air => 2,
            Self::Earth => 3,
        }
    }

    /// Element for a 0-based index. Returns None if index >= 4.
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 4 {
            Some(ALL_ELEMENTS[index as usize])
        } else {
            None
        }
    }

    /// The opposing element: fire/water, air/earth.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Fire => Self::Water,
            Self::Water => Self::Fire,
            Self::Air => Self::Earth,
            Self::Earth => Self::Air,
        }
    }
}

impl Display for Element {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Element {
    type Err = ParseError;

    /// Case-insensitive on the English name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        ALL_ELEMENTS
            .into_iter()
            .find(|e| e.name().eq_ignore_ascii_case(t))
            .ok_or_else(|| ParseError::UnknownElement(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, e) in ALL_ELEMENTS.iter().enumerate() {
            assert_eq!(e.index() as usize, i);
            assert_eq!(Element::from_index(i as u8), Some(*e));
        }
        assert_eq!(Element::from_index(4), None);
    }

    #[test]
    fn opposite_is_involution() {
        for e in ALL_ELEMENTS {
            assert_ne!(e.opposite(), e);
            assert_eq!(e.opposite().opposite(), e);
        }
    }

    #[test]
    fn opposite_pairs() {
        assert_eq!(Element::Fire.opposite(), Element::Water);
        assert_eq!(Element::Air.opposite(), Element::Earth);
    }

    #[test]
    fn parse_any_case() {
        assert_eq!("fire".parse::<Element>(), Ok(Element::Fire));
        assert_eq!("WATER".parse::<Element>(), Ok(Element::Water));
        assert_eq!(" Air ".parse::<Element>(), Ok(Element::Air));
        assert!("aether".parse::<Element>().is_err());
    }

    #[test]
    fn display_matches_name() {
        assert_eq!(Element::Earth.to_string(), "earth");
    }
}
