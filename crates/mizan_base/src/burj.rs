//! Burj (zodiac sign) lookup.
//!
//! The ecliptic circle is divided into 12 signs of 30 degrees each, Hamal
//! (Aries) starting at 0 deg. Each sign belongs to one element by
//! triplicity and has one traditional ruling planet.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::element::Element;
use crate::error::ParseError;
use crate::planet::Planet;
use crate::util::normalize_360;

/// The 12 burj starting from Hamal (Aries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Burj {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 burj in order (0 = Aries, 11 = Pisces).
pub const ALL_BURJ: [Burj; 12] = [
    Burj::Aries,
    Burj::Taurus,
    Burj::Gemini,
    Burj::Cancer,
    Burj::Leo,
    Burj::Virgo,
    Burj::Libra,
    Burj::Scorpio,
    Burj::Sagittarius,
    Burj::Capricorn,
    Burj::Aquarius,
    Burj::Pisces,
];

impl Burj {
    /// Arabic name (transliterated).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Hamal",
            Self::Taurus => "Thawr",
            Self::Gemini => "Jawza",
            Self::Cancer => "Saratan",
            Self::Leo => "Asad",
            Self::Virgo => "Sunbula",
            Self::Libra => "Mizan",
            Self::Scorpio => "Aqrab",
            Self::Sagittarius => "Qaws",
            Self::Capricorn => "Jadi",
            Self::Aquarius => "Dalw",
            Self::Pisces => "Hut",
        }
    }

    /// Western (English) name.
    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// 0-based index (Aries=0 .. Pisces=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Aries => 0,
            Self::Taurus => 1,
            Self::Gemini => 2,
            Self::Cancer => 3,
            Self::Leo => 4,
            Self::Virgo => 5,
            Self::Libra => 6,
            Self::Scorpio => 7,
            Self::Sagittarius => 8,
            Self::Capricorn => 9,
            Self::Aquarius => 10,
            Self::Pisces => 11,
        }
    }

    /// Burj for a 0-based index. Returns None if index >= 12.
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 12 {
            Some(ALL_BURJ[index as usize])
        } else {
            None
        }
    }

    /// Element by triplicity: signs cycle fire, earth, air, water from Aries.
    pub const fn element(self) -> Element {
        match self.index() % 4 {
            0 => Element::Fire,
            1 => Element::Earth,
            2 => Element::Air,
            _ => Element::Water,
        }
    }

    /// Traditional ruling planet (domicile lord).
    pub const fn ruler(self) -> Planet {
        match self {
            Self::Aries | Self::Scorpio => Planet::Mars,
            Self::Taurus | Self::Libra => Planet::Venus,
            Self::Gemini | Self::Virgo => Planet::Mercury,
            Self::Cancer => Planet::Moon,
            Self::Leo => Planet::Sun,
            Self::Sagittarius | Self::Pisces => Planet::Jupiter,
            Self::Capricorn | Self::Aquarius => Planet::Saturn,
        }
    }

    /// The sign 180 deg away.
    pub const fn opposite(self) -> Self {
        ALL_BURJ[((self.index() + 6) % 12) as usize]
    }
}

impl Display for Burj {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.western_name())
    }
}

impl FromStr for Burj {
    type Err = ParseError;

    /// Case-insensitive on the western or Arabic name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        ALL_BURJ
            .into_iter()
            .find(|b| b.western_name().eq_ignore_ascii_case(t) || b.name().eq_ignore_ascii_case(t))
            .ok_or_else(|| ParseError::UnknownBurj(s.to_string()))
    }
}

/// Position of a longitude within its burj.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct BurjInfo {
    /// The sign containing the longitude.
    pub burj: Burj,
    /// Decimal degrees within the sign [0.0, 30.0).
    pub degree_in_sign: f64,
}

/// Determine the burj for an ecliptic longitude in degrees.
///
/// Each sign spans 30 degrees: Aries = [0, 30), Taurus = [30, 60), etc.
/// Any finite longitude is accepted and wrapped into [0, 360).
pub fn burj_from_longitude(lon_deg: f64) -> BurjInfo {
    let lon = normalize_360(lon_deg);
    // Clamp to 11 at the top of the range
    let idx = ((lon / 30.0).floor() as u8).min(11);
    BurjInfo {
        burj: ALL_BURJ[idx as usize],
        degree_in_sign: lon - (idx as f64) * 30.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, b) in ALL_BURJ.iter().enumerate() {
            assert_eq!(b.index() as usize, i);
            assert_eq!(Burj::from_index(i as u8), Some(*b));
        }
        assert_eq!(Burj::from_index(12), None);
    }

    #[test]
    fn triplicities() {
        assert_eq!(Burj::Aries.element(), Element::Fire);
        assert_eq!(Burj::Leo.element(), Element::Fire);
        assert_eq!(Burj::Sagittarius.element(), Element::Fire);
        assert_eq!(Burj::Taurus.element(), Element::Earth);
        assert_eq!(Burj::Capricorn.element(), Element::Earth);
        assert_eq!(Burj::Gemini.element(), Element::Air);
        assert_eq!(Burj::Aquarius.element(), Element::Air);
        assert_eq!(Burj::Cancer.element(), Element::Water);
        assert_eq!(Burj::Pisces.element(), Element::Water);
    }

    #[test]
    fn each_element_has_three_signs() {
        for e in crate::element::ALL_ELEMENTS {
            assert_eq!(ALL_BURJ.iter().filter(|b| b.element() == e).count(), 3);
        }
    }

    #[test]
    fn opposite_signs() {
        assert_eq!(Burj::Aries.opposite(), Burj::Libra);
        assert_eq!(Burj::Pisces.opposite(), Burj::Virgo);
        for b in ALL_BURJ {
            assert_eq!(b.opposite().opposite(), b);
        }
    }

    #[test]
    fn rulers() {
        assert_eq!(Burj::Leo.ruler(), Planet::Sun);
        assert_eq!(Burj::Cancer.ruler(), Planet::Moon);
        assert_eq!(Burj::Aquarius.ruler(), Planet::Saturn);
    }

    #[test]
    fn boundary_0() {
        let info = burj_from_longitude(0.0);
        assert_eq!(info.burj, Burj::Aries);
        assert!(info.degree_in_sign.abs() < 1e-10);
    }

    #[test]
    fn tiny_negative_is_start_of_aries() {
        let info = burj_from_longitude(-1e-15);
        assert_eq!(info.burj, Burj::Aries);
        assert!((0.0..30.0).contains(&info.degree_in_sign));
    }

    #[test]
    fn all_boundaries() {
        for i in 0..12u8 {
            let info = burj_from_longitude(i as f64 * 30.0);
            assert_eq!(info.burj.index(), i);
        }
    }

    #[test]
    fn last_sign() {
        let info = burj_from_longitude(359.9);
        assert_eq!(info.burj, Burj::Pisces);
        assert!((info.degree_in_sign - 29.9).abs() < 1e-9);
    }

    #[test]
    fn negative_wraps() {
        let info = burj_from_longitude(-10.0);
        assert_eq!(info.burj, Burj::Pisces);
        assert!((info.degree_in_sign - 20.0).abs() < 1e-10);
    }

    #[test]
    fn parse_names() {
        assert_eq!("leo".parse::<Burj>(), Ok(Burj::Leo));
        assert_eq!("Hamal".parse::<Burj>(), Ok(Burj::Aries));
        assert!("Ophiuchus".parse::<Burj>().is_err());
    }
}
