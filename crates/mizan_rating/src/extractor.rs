//! Hour-ruler strength from a transit snapshot.

use mizan_base::Planet;

use crate::power::{DignityPowerModel, PlanetaryPowerService};
use crate::transit::TransitSnapshot;

/// Strength of `hour_planet` according to `service`, rounded to the nearest
/// integer (halves away from zero).
///
/// Returns None when the snapshot has no entry for the planet or for the
/// Sun. Callers should skip rating in that case rather than assume zero.
pub fn compute_hour_ruler_strength_from_transits<S>(
    hour_planet: Planet,
    transits: &TransitSnapshot,
    service: &S,
) -> Option<f64>
where
    S: PlanetaryPowerService + ?Sized,
{
    let transit = transits.planet(hour_planet)?;
    let sun = transits.planet(Planet::Sun)?;
    Some(service.planetary_power(hour_planet, transit, sun).round())
}

/// [`compute_hour_ruler_strength_from_transits`] with the default
/// [`DignityPowerModel`].
pub fn compute_hour_ruler_strength(hour_planet: Planet, transits: &TransitSnapshot) -> Option<f64> {
    let model = DignityPowerModel::default();
    compute_hour_ruler_strength_from_transits(hour_planet, transits, &model)
}
