//! Composition of strength and elemental modifier into the final level.

use mizan_base::{LEVEL_ORDER, MAX_LEVEL_INDEX, OrdinalLevel};

use crate::compatibility::ElementalModifier;
use crate::strength::PrimaryRating;

/// Shift the primary level by the modifier's adjustment, saturating at
/// VeryWeak and Excellent.
pub fn compose_level(primary: &PrimaryRating, modifier: &ElementalModifier) -> OrdinalLevel {
    let idx = i16::from(primary.level.index()) + i16::from(modifier.adjustment);
    let idx = idx.clamp(0, i16::from(MAX_LEVEL_INDEX));
    LEVEL_ORDER[idx as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compatibility::ElementRelation;

    fn compose(level: OrdinalLevel, relation: ElementRelation) -> OrdinalLevel {
        compose_level(
            &PrimaryRating::from_level(level),
            &ElementalModifier::from(relation),
        )
    }

    #[test]
    fn saturates_at_bottom() {
        assert_eq!(
            compose(OrdinalLevel::VeryWeak, ElementRelation::MinorTension),
            OrdinalLevel::VeryWeak
        );
    }

    #[test]
    fn saturates_at_top() {
        assert_eq!(
            compose(OrdinalLevel::Excellent, ElementRelation::PerfectAlignment),
            OrdinalLevel::Excellent
        );
    }

    #[test]
    fn moderate_shifts_both_ways() {
        assert_eq!(
            compose(OrdinalLevel::Moderate, ElementRelation::PerfectAlignment),
            OrdinalLevel::Good
        );
        assert_eq!(
            compose(OrdinalLevel::Moderate, ElementRelation::MinorTension),
            OrdinalLevel::Weak
        );
    }

    #[test]
    fn zero_adjustment_keeps_level() {
        for l in LEVEL_ORDER {
            assert_eq!(compose(l, ElementRelation::SupportiveFlow), l);
            assert_eq!(compose(l, ElementRelation::Neutral), l);
        }
    }

    #[test]
    fn oversized_adjustment_still_clamped() {
        let m = ElementalModifier {
            adjustment: i8::MIN,
            note: ElementRelation::MinorTension,
        };
        let p = PrimaryRating::from_level(OrdinalLevel::Good);
        assert_eq!(compose_level(&p, &m), OrdinalLevel::VeryWeak);
    }
}
