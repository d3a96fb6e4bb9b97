//! Authentic timing rating: classification, element modifier, composition
//! and presentation in one value.

use mizan_base::{Element, OrdinalLevel, Planet};

use crate::compatibility::{ElementalModifier, element_modifier};
use crate::composer::compose_level;
use crate::extractor::compute_hour_ruler_strength_from_transits;
use crate::power::PlanetaryPowerService;
use crate::presentation::presentation_for;
use crate::strength::{PrimaryRating, classify_strength};
use crate::transit::TransitSnapshot;

/// Inputs to [`build_authentic_rating`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RatingRequest {
    pub hour_planet: Planet,
    pub hour_element: Element,
    pub user_element: Element,
    /// Usually 0–100; any value is accepted.
    pub planet_strength: f64,
}

/// Result of one rating evaluation.
///
/// Owns its primary rating and modifier; `final_level` and the presentation
/// fields are plain copies derived from them.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AuthenticTimingRating {
    pub hour_planet: Planet,
    pub hour_element: Element,
    pub user_element: Element,
    pub planet_strength: f64,
    pub primary: PrimaryRating,
    pub modifier: ElementalModifier,
    pub final_level: OrdinalLevel,
    pub stars: &'static str,
    pub label_key: &'static str,
    pub color: &'static str,
}

/// Build a rating from an hour's planet, elements and ruler strength.
///
/// Total over well-typed input. The strength is passed through unchanged.
pub fn build_authentic_rating(request: &RatingRequest) -> AuthenticTimingRating {
    let primary = classify_strength(request.planet_strength);
    let modifier = element_modifier(request.user_element, request.hour_element);
    let final_level = compose_level(&primary, &modifier);
    let presentation = presentation_for(final_level);

    AuthenticTimingRating {
        hour_planet: request.hour_planet,
        hour_element: request.hour_element,
        user_element: request.user_element,
        planet_strength: request.planet_strength,
        primary,
        modifier,
        final_level,
        stars: presentation.stars,
        label_key: presentation.label_key,
        color: presentation.color,
    }
}

/// Rate the hour ruled by `hour_planet` using strength from a transit
/// snapshot. The hour element is the planet's own element.
///
/// Returns None when the snapshot lacks the planet or the Sun.
pub fn rate_hour_from_transits<S>(
    hour_planet: Planet,
    user_element: Element,
    transits: &TransitSnapshot,
    service: &S,
) -> Option<AuthenticTimingRating>
where
    S: PlanetaryPowerService + ?Sized,
{
    let planet_strength =
        compute_hour_ruler_strength_from_transits(hour_planet, transits, service)?;
    Some(build_authentic_rating(&RatingRequest {
        hour_planet,
        hour_element: hour_planet.element(),
        user_element,
        planet_strength,
    }))
}
