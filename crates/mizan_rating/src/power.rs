//! Planetary power: how strongly a planet acts in its current position.
//!
//! The engine only needs a number in [0, 100] for a planet, its transit and
//! the Sun's transit. [`PlanetaryPowerService`] is that seam; any closure of
//! the right shape is a service. [`DignityPowerModel`] is the default:
//!
//! 1. Essential dignity of the planet in its burj (exaltation, domicile,
//!    fall, detriment), with a bonus near the exact exaltation degree
//! 2. Solar phase: cazimi, combust, or under the beams
//! 3. Retrograde motion
//!
//! The sum is clamped to [0, 100].

use mizan_base::{
    Dignity, Planet, angular_distance, dignity_in_burj, exaltation_burj, exaltation_degree,
};

use crate::transit::TransitData;

/// Lowest power a service should report.
pub const MIN_POWER: f64 = 0.0;
/// Highest power a service should report.
pub const MAX_POWER: f64 = 100.0;

/// Source of raw planetary power.
pub trait PlanetaryPowerService {
    /// Power of `planet` in `transit`, with `sun` as the solar reference.
    fn planetary_power(&self, planet: Planet, transit: &TransitData, sun: &TransitData) -> f64;
}

impl<F> PlanetaryPowerService for F
where
    F: Fn(Planet, &TransitData, &TransitData) -> f64,
{
    fn planetary_power(&self, planet: Planet, transit: &TransitData, sun: &TransitData) -> f64 {
        self(planet, transit, sun)
    }
}

/// Configurable weights for [`DignityPowerModel`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerConfig {
    /// Starting power before any adjustment. Default: 50.
    pub base: f64,
    /// Planet in its exaltation sign. Default: 25.
    pub exaltation_bonus: f64,
    /// Extra bonus within `exact_exaltation_orb_deg` of the exaltation
    /// degree. Default: 5.
    pub exact_exaltation_bonus: f64,
    /// Default: 3 deg.
    pub exact_exaltation_orb_deg: f64,
    /// Planet in a sign it rules. Default: 20.
    pub domicile_bonus: f64,
    /// Planet opposite a sign it rules. Default: 20.
    pub detriment_penalty: f64,
    /// Planet opposite its exaltation sign. Default: 25.
    pub fall_penalty: f64,
    /// Retrograde planet (never applied to Sun or Moon). Default: 10.
    pub retrograde_penalty: f64,
    /// Distance from the Sun counting as cazimi. Default: 17 arcmin.
    pub cazimi_orb_deg: f64,
    /// Default: 15.
    pub cazimi_bonus: f64,
    /// Distance from the Sun counting as combust. Default: 8.5 deg.
    pub combust_orb_deg: f64,
    /// Default: 30.
    pub combust_penalty: f64,
    /// Distance from the Sun counting as under the beams. Default: 17 deg.
    pub beams_orb_deg: f64,
    /// Default: 10.
    pub beams_penalty: f64,
}

impl Default for PowerConfig {
    fn default() -> Self {
        Self {
            base: 50.0,
            exaltation_bonus: 25.0,
            exact_exaltation_bonus: 5.0,
            exact_exaltation_orb_deg: 3.0,
            domicile_bonus: 20.0,
            detriment_penalty: 20.0,
            fall_penalty: 25.0,
            retrograde_penalty: 10.0,
            cazimi_orb_deg: 17.0 / 60.0,
            cazimi_bonus: 15.0,
            combust_orb_deg: 8.5,
            combust_penalty: 30.0,
            beams_orb_deg: 17.0,
            beams_penalty: 10.0,
        }
    }
}

/// Relation of a planet to the Sun.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SolarPhase {
    /// In the heart of the Sun.
    Cazimi,
    Combust,
    UnderBeams,
    /// Far enough from the Sun to be unaffected.
    Clear,
    /// The Sun itself.
    Luminary,
}

/// Itemized result of the default model.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PowerBreakdown {
    pub dignity: Dignity,
    pub dignity_score: f64,
    pub solar_phase: SolarPhase,
    pub solar_score: f64,
    pub retrograde_score: f64,
    /// Clamped to [0, 100].
    pub total: f64,
}

/// Default power model from dignity, solar phase and motion.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DignityPowerModel {
    pub config: PowerConfig,
}

impl DignityPowerModel {
    pub fn new(config: PowerConfig) -> Self {
        Self { config }
    }

    /// Contribution of essential dignity.
    pub fn dignity_score(&self, planet: Planet, transit: &TransitData) -> (Dignity, f64) {
        let c = &self.config;
        let dignity = dignity_in_burj(planet, transit.sign);
        let score = match dignity {
            Dignity::Exaltation => {
                let offset = (transit.degree - exaltation_degree(planet)).abs();
                let near_exact = transit.sign == exaltation_burj(planet)
                    && offset <= c.exact_exaltation_orb_deg;
                if near_exact {
                    c.exaltation_bonus + c.exact_exaltation_bonus
                } else {
                    c.exaltation_bonus
                }
            }
            Dignity::Domicile => c.domicile_bonus,
            Dignity::Peregrine => 0.0,
            Dignity::Detriment => -c.detriment_penalty,
            Dignity::Fall => -c.fall_penalty,
        };
        (dignity, score)
    }

    /// Solar phase by shortest angular distance to the Sun.
    ///
    /// Orbs are checked tightest first; a planet exactly on an orb boundary
    /// falls outside it.
    pub fn solar_phase(
        &self,
        planet: Planet,
        transit: &TransitData,
        sun: &TransitData,
    ) -> SolarPhase {
        if planet == Planet::Sun {
            return SolarPhase::Luminary;
        }
        let c = &self.config;
        let dist = angular_distance(transit.longitude, sun.longitude);
        if dist < c.cazimi_orb_deg {
            SolarPhase::Cazimi
        } else if dist < c.combust_orb_deg {
            SolarPhase::Combust
        } else if dist < c.beams_orb_deg {
            SolarPhase::UnderBeams
        } else {
            SolarPhase::Clear
        }
    }

    fn solar_score(&self, phase: SolarPhase) -> f64 {
        let c = &self.config;
        match phase {
            SolarPhase::Cazimi => c.cazimi_bonus,
            SolarPhase::Combust => -c.combust_penalty,
            SolarPhase::UnderBeams => -c.beams_penalty,
            SolarPhase::Clear | SolarPhase::Luminary => 0.0,
        }
    }

    /// Full itemized computation.
    pub fn breakdown(
        &self,
        planet: Planet,
        transit: &TransitData,
        sun: &TransitData,
    ) -> PowerBreakdown {
        let (dignity, dignity_score) = self.dignity_score(planet, transit);
        let solar_phase = self.solar_phase(planet, transit, sun);
        let solar_score = self.solar_score(solar_phase);
        let retrograde_score = if transit.retrograde && !planet.is_luminary() {
            -self.config.retrograde_penalty
        } else {
            0.0
        };
        let raw = self.config.base + dignity_score + solar_score + retrograde_score;
        PowerBreakdown {
            dignity,
            dignity_score,
            solar_phase,
            solar_score,
            retrograde_score,
            total: raw.clamp(MIN_POWER, MAX_POWER),
        }
    }
}

impl PlanetaryPowerService for DignityPowerModel {
    fn planetary_power(&self, planet: Planet, transit: &TransitData, sun: &TransitData) -> f64 {
        self.breakdown(planet, transit, sun).total
    }
}
