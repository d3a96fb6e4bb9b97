//! Display attributes for a final level: star glyph, label key, color.

use mizan_base::OrdinalLevel;

/// Stars, label key and color for one level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Presentation {
    pub stars: &'static str,
    pub label_key: &'static str,
    /// `#RRGGBB`.
    pub color: &'static str,
}

/// One row per level, in LEVEL_ORDER.
const PRESENTATION_TABLE: [Presentation; 5] = [
    Presentation {
        stars: "🔴",
        label_key: "unfavorable",
        color: "#F44336",
    },
    Presentation {
        stars: "⚠️",
        label_key: "weak",
        color: "#FF9800",
    },
    Presentation {
        stars: "⭐",
        label_key: "moderate",
        color: "#FFC107",
    },
    Presentation {
        stars: "⭐⭐",
        label_key: "good",
        color: "#8BC34A",
    },
    Presentation {
        stars: "⭐⭐⭐",
        label_key: "excellent",
        color: "#4CAF50",
    },
];

/// Presentation row for a level.
pub const fn presentation_for(level: OrdinalLevel) -> Presentation {
    PRESENTATION_TABLE[level.index() as usize]
}

impl Presentation {
    /// Color as a packed `0xRRGGBB` integer.
    pub fn rgb(&self) -> u32 {
        u32::from_str_radix(self.color.trim_start_matches('#'), 16).unwrap_or(0)
    }
}
