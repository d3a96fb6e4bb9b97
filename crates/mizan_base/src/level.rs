//! Five-point favorability scale.
//!
//! The same scale classifies raw planetary strength and the final composed
//! rating. Ordering is fixed: VeryWeak < Weak < Moderate < Good < Excellent.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::ParseError;

/// Ordinal favorability level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum OrdinalLevel {
    VeryWeak,
    Weak,
    Moderate,
    Good,
    Excellent,
}

/// All 5 levels in ascending order. Position in this array is the level index.
pub const LEVEL_ORDER: [OrdinalLevel; 5] = [
    OrdinalLevel::VeryWeak,
    OrdinalLevel::Weak,
    OrdinalLevel::Moderate,
    OrdinalLevel::Good,
    OrdinalLevel::Excellent,
];

/// Highest valid level index.
pub const MAX_LEVEL_INDEX: u8 = 4;

impl OrdinalLevel {
    /// camelCase name, as used by the application.
    pub const fn name(self) -> &'static str {
        match self {
            Self::VeryWeak => "veryWeak",
            Self::Weak => "weak",
            Self::Moderate => "moderate",
            Self::Good => "good",
            Self::Excellent => "excellent",
        }
    }

    /// 0-based index into LEVEL_ORDER (VeryWeak=0 .. Excellent=4).
    pub const fn index(self) -> u8 {
        match self {
            Self::VeryWeak => 0,
            Self::Weak => 1,
            Self::Moderate => 2,
            Self::Good => 3,
            Self::Excellent => 4,
        }
    }

    /// Level for a 0-based index. Returns None if index > 4.
    pub const fn from_index(index: u8) -> Option<Self> {
        if index <= MAX_LEVEL_INDEX {
            Some(LEVEL_ORDER[index as usize])
        } else {
            None
        }
    }
}

impl Display for OrdinalLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OrdinalLevel {
    type Err = ParseError;

    /// Case-insensitive; accepts `veryWeak`, `very_weak` and `very-weak`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect();
        LEVEL_ORDER
            .into_iter()
            .find(|l| l.name().eq_ignore_ascii_case(&folded))
            .ok_or_else(|| ParseError::UnknownLevel(s.to_string()))
    }
}
