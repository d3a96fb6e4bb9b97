//! Essential dignity of a planet in a burj.
//!
//! Exaltation and domicile tables for the seven classical planets, and the
//! derived fall (opposite exaltation) and detriment (opposite domicile).

use crate::burj::Burj;
use crate::planet::Planet;

/// Essential dignity, strongest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Dignity {
    Exaltation,
    Domicile,
    Peregrine,
    Detriment,
    Fall,
}

/// Exaltation sign: Sun Aries, Moon Taurus, Mars Capricorn, Mercury Virgo,
/// Jupiter Cancer, Venus Pisces, Saturn Libra.
pub const fn exaltation_burj(planet: Planet) -> Burj {
    match planet {
        Planet::Sun => Burj::Aries,
        Planet::Moon => Burj::Taurus,
        Planet::Mars => Burj::Capricorn,
        Planet::Mercury => Burj::Virgo,
        Planet::Jupiter => Burj::Cancer,
        Planet::Venus => Burj::Pisces,
        Planet::Saturn => Burj::Libra,
    }
}

/// Degree of exact exaltation within the exaltation sign.
///
/// Sun 19, Moon 3, Mars 28, Mercury 15, Jupiter 15, Venus 27, Saturn 21.
pub const fn exaltation_degree(planet: Planet) -> f64 {
    match planet {
        Planet::Sun => 19.0,
        Planet::Moon => 3.0,
        Planet::Mars => 28.0,
        Planet::Mercury => 15.0,
        Planet::Jupiter => 15.0,
        Planet::Venus => 27.0,
        Planet::Saturn => 21.0,
    }
}

/// Fall sign = opposite of exaltation.
pub const fn fall_burj(planet: Planet) -> Burj {
    exaltation_burj(planet).opposite()
}

/// Signs the planet rules.
pub fn domicile_burj(planet: Planet) -> &'static [Burj] {
    match planet {
        Planet::Sun => &[Burj::Leo],
        Planet::Moon => &[Burj::Cancer],
        Planet::Mars => &[Burj::Aries, Burj::Scorpio],
        Planet::Mercury => &[Burj::Gemini, Burj::Virgo],
        Planet::Jupiter => &[Burj::Sagittarius, Burj::Pisces],
        Planet::Venus => &[Burj::Taurus, Burj::Libra],
        Planet::Saturn => &[Burj::Capricorn, Burj::Aquarius],
    }
}

/// Whether the burj is opposite one of the planet's domiciles.
fn in_detriment(planet: Planet, burj: Burj) -> bool {
    domicile_burj(planet).iter().any(|d| d.opposite() == burj)
}

/// Dignity of `planet` in `burj`.
///
/// First match wins: exaltation, domicile, fall, detriment, peregrine.
/// Mercury in Virgo is therefore exalted, not merely domiciled.
pub fn dignity_in_burj(planet: Planet, burj: Burj) -> Dignity {
    if exaltation_burj(planet) == burj {
        Dignity::Exaltation
    } else if domicile_burj(planet).contains(&burj) {
        Dignity::Domicile
    } else if fall_burj(planet) == burj {
        Dignity::Fall
    } else if in_detriment(planet, burj) {
        Dignity::Detriment
    } else {
        Dignity::Peregrine
    }
}
