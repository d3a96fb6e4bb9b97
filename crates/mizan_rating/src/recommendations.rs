//! Activities and dhikr associated with each planet's hour.
//!
//! Static reference data, returned verbatim.

use mizan_base::Planet;

/// Guidance for an hour ruled by one planet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PlanetaryRecommendations {
    pub recommended: &'static [&'static str],
    pub avoid: &'static [&'static str],
    /// Transliterated dhikr.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub dhikr: Option<&'static str>,
    /// Dhikr in Arabic script.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub dhikr_arabic: Option<&'static str>,
}

/// Source of per-planet guidance.
pub trait PlanetaryMetadataService {
    fn recommendations(&self, planet: Planet) -> PlanetaryRecommendations;
}

/// The built-in guidance table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StaticPlanetaryMetadata;

impl PlanetaryMetadataService for StaticPlanetaryMetadata {
    fn recommendations(&self, planet: Planet) -> PlanetaryRecommendations {
        RECOMMENDATIONS[planet.index() as usize]
    }
}

/// Guidance from the built-in table.
pub fn get_planetary_recommendations(planet: Planet) -> PlanetaryRecommendations {
    StaticPlanetaryMetadata.recommendations(planet)
}

// Indexed by Planet::index().
const RECOMMENDATIONS: [PlanetaryRecommendations; 7] = [
    // Sun
    PlanetaryRecommendations {
        recommended: &[
            "Meeting leaders and officials",
            "Starting work that needs authority",
            "Matters of honor and reputation",
            "Practices for health and vitality",
        ],
        avoid: &["Pride and boasting", "Confronting superiors"],
        dhikr: Some("Ya Nur"),
        dhikr_arabic: Some("يَا نُورُ"),
    },
    // Moon
    PlanetaryRecommendations {
        recommended: &[
            "Travel and journeys",
            "Matters of home and family",
            "Reconciliation and emotional healing",
            "Planting and cultivation",
        ],
        avoid: &["Signing binding contracts", "Irreversible decisions"],
        dhikr: Some("Ya Latif"),
        dhikr_arabic: Some("يَا لَطِيفُ"),
    },
    // Mars
    PlanetaryRecommendations {
        recommended: &[
            "Physical effort and exercise",
            "Acts of courage and defense",
            "Breaking harmful habits",
        ],
        avoid: &[
            "Quarrels and disputes",
            "Hasty decisions",
            "Elective surgery",
        ],
        dhikr: Some("Ya Qawiyy"),
        dhikr_arabic: Some("يَا قَوِيُّ"),
    },
    // Mercury
    PlanetaryRecommendations {
        recommended: &[
            "Study and memorization",
            "Writing and correspondence",
            "Trade and negotiation",
            "Teaching",
        ],
        avoid: &["Idle talk and gossip", "Careless promises"],
        dhikr: Some("Ya 'Alim"),
        dhikr_arabic: Some("يَا عَلِيمُ"),
    },
    // Jupiter
    PlanetaryRecommendations {
        recommended: &[
            "Seeking knowledge from scholars",
            "Charity and generosity",
            "Legal and religious matters",
            "Marriage proposals",
        ],
        avoid: &["Wastefulness", "Neglecting obligations"],
        dhikr: Some("Ya Karim"),
        dhikr_arabic: Some("يَا كَرِيمُ"),
    },
    // Venus
    PlanetaryRecommendations {
        recommended: &[
            "Friendship and reconciliation",
            "Marriage and matters of love",
            "Art, beauty and adornment",
            "Hospitality",
        ],
        avoid: &["Excess in pleasures", "Jealousy and envy"],
        dhikr: Some("Ya Wadud"),
        dhikr_arabic: Some("يَا وَدُودُ"),
    },
    // Saturn
    PlanetaryRecommendations {
        recommended: &[
            "Patient, long-term work",
            "Repentance and retreat",
            "Matters of land and buildings",
        ],
        avoid: &["Starting new ventures", "Travel", "Celebrations"],
        dhikr: Some("Ya Sabur"),
        dhikr_arabic: Some("يَا صَبُورُ"),
    },
];
