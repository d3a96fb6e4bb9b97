//! Timing rating engine for planetary hours.
//!
//! Given the planet ruling an hour, that hour's element, a user's element
//! and the ruler's strength, produces an [`AuthenticTimingRating`]:
//!
//! 1. [`classify_strength`] maps strength to a primary level
//! 2. [`element_modifier`] compares user and hour elements
//! 3. [`compose_level`] shifts the primary level by the modifier, saturating
//! 4. [`presentation_for`] attaches stars, label key and color
//!
//! Strength can come from a [`TransitSnapshot`] through any
//! [`PlanetaryPowerService`]; [`DignityPowerModel`] is provided. A missing
//! transit entry yields `None`, never an error.
//!
//! Every function is pure. Nothing here performs I/O or holds state.

pub mod compatibility;
pub mod composer;
pub mod extractor;
pub mod power;
pub mod presentation;
pub mod rating;
pub mod recommendations;
pub mod strength;
pub mod transit;

pub use compatibility::{ElementRelation, ElementalModifier, element_modifier, element_relation};
pub use composer::compose_level;
pub use extractor::{compute_hour_ruler_strength, compute_hour_ruler_strength_from_transits};
pub use power::{
    DignityPowerModel, MAX_POWER, MIN_POWER, PlanetaryPowerService, PowerBreakdown, PowerConfig,
    SolarPhase,
};
pub use presentation::{Presentation, presentation_for};
pub use rating::{
    AuthenticTimingRating, RatingRequest, build_authentic_rating, rate_hour_from_transits,
};
pub use recommendations::{
    PlanetaryMetadataService, PlanetaryRecommendations, StaticPlanetaryMetadata,
    get_planetary_recommendations,
};
pub use strength::{
    EXCELLENT_THRESHOLD, GOOD_THRESHOLD, MODERATE_THRESHOLD, PrimaryRating, StrengthReason,
    WEAK_THRESHOLD, classify_strength,
};
pub use transit::{TransitData, TransitSnapshot};

// Vocabulary re-exports so callers need only this crate.
pub use mizan_base::{Element, OrdinalLevel, Planet};
