//! Planetary strength classification.
//!
//! Maps a raw strength score onto the five-point scale with a strict
//! threshold ladder. Each band is closed on its lower bound.

use mizan_base::OrdinalLevel;

/// Lower bound of the Excellent band.
pub const EXCELLENT_THRESHOLD: f64 = 90.0;
/// Lower bound of the Good band.
pub const GOOD_THRESHOLD: f64 = 70.0;
/// Lower bound of the Moderate band.
pub const MODERATE_THRESHOLD: f64 = 50.0;
/// Lower bound of the Weak band.
pub const WEAK_THRESHOLD: f64 = 30.0;

/// Reason attached to a strength classification, one per level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StrengthReason {
    ExceptionalStrength,
    StrongInfluence,
    BalancedInfluence,
    WeakInfluence,
    VeryWeakInfluence,
}

impl StrengthReason {
    /// Reason for a level (1:1).
    pub const fn for_level(level: OrdinalLevel) -> Self {
        match level {
            OrdinalLevel::Excellent => Self::ExceptionalStrength,
            OrdinalLevel::Good => Self::StrongInfluence,
            OrdinalLevel::Moderate => Self::BalancedInfluence,
            OrdinalLevel::Weak => Self::WeakInfluence,
            OrdinalLevel::VeryWeak => Self::VeryWeakInfluence,
        }
    }

    /// Translation key.
    pub const fn key(self) -> &'static str {
        match self {
            Self::ExceptionalStrength => "exceptional_strength",
            Self::StrongInfluence => "strong_influence",
            Self::BalancedInfluence => "balanced_influence",
            Self::WeakInfluence => "weak_influence",
            Self::VeryWeakInfluence => "very_weak_influence",
        }
    }
}

/// Classification of the raw planetary strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PrimaryRating {
    pub level: OrdinalLevel,
    #[cfg_attr(feature = "serde", serde(rename = "descriptionKey"))]
    pub description: StrengthReason,
}

impl PrimaryRating {
    /// Rating for a level with its matching reason.
    pub const fn from_level(level: OrdinalLevel) -> Self {
        Self {
            level,
            description: StrengthReason::for_level(level),
        }
    }
}

/// Classify a strength score.
///
/// Expected range is 0–100 but any value is accepted: negatives fall to
/// VeryWeak, values above 100 land in Excellent, NaN lands in VeryWeak.
pub fn classify_strength(score: f64) -> PrimaryRating {
    let level = if score >= EXCELLENT_THRESHOLD {
        OrdinalLevel::Excellent
    } else if score >= GOOD_THRESHOLD {
        OrdinalLevel::Good
    } else if score >= MODERATE_THRESHOLD {
        OrdinalLevel::Moderate
    } else if score >= WEAK_THRESHOLD {
        OrdinalLevel::Weak
    } else {
        OrdinalLevel::VeryWeak
    };
    PrimaryRating::from_level(level)
}
