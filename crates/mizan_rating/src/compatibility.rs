//! Elemental compatibility between the user and the current hour.
//!
//! Relations are checked in a fixed order: identity, opposition,
//! supportive pair, then the neutral fallback. Over the closed set of four
//! elements the 16 ordered pairs split evenly, 4 per relation.

use mizan_base::Element;

/// Opposing elements. Looked up in both directions.
const OPPOSITION: [(Element, Element); 2] = [
    (Element::Fire, Element::Water),
    (Element::Air, Element::Earth),
];

/// Supportive ordered pairs (user, hour).
const SUPPORTIVE_PAIRS: [(Element, Element); 4] = [
    (Element::Fire, Element::Air),
    (Element::Air, Element::Fire),
    (Element::Water, Element::Earth),
    (Element::Earth, Element::Water),
];

/// How the user's element relates to the hour's element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ElementRelation {
    /// Same element.
    PerfectAlignment,
    /// Opposing elements.
    MinorTension,
    /// Supportive pair.
    SupportiveFlow,
    /// Anything else (fire/earth, water/air in either direction).
    Neutral,
}

impl ElementRelation {
    /// Level adjustment applied by the composer.
    pub const fn adjustment(self) -> i8 {
        match self {
            Self::PerfectAlignment => 1,
            Self::MinorTension => -1,
            Self::SupportiveFlow | Self::Neutral => 0,
        }
    }

    /// Translation key.
    pub const fn key(self) -> &'static str {
        match self {
            Self::PerfectAlignment => "perfect_alignment",
            Self::MinorTension => "minor_tension",
            Self::SupportiveFlow => "supportive_flow",
            Self::Neutral => "neutral",
        }
    }
}

/// Signed adjustment with the relation that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ElementalModifier {
    /// One of -1, 0, +1.
    pub adjustment: i8,
    #[cfg_attr(feature = "serde", serde(rename = "noteKey"))]
    pub note: ElementRelation,
}

impl From<ElementRelation> for ElementalModifier {
    fn from(note: ElementRelation) -> Self {
        Self {
            adjustment: note.adjustment(),
            note,
        }
    }
}

fn are_opposed(a: Element, b: Element) -> bool {
    OPPOSITION
        .iter()
        .any(|&(x, y)| (x == a && y == b) || (x == b && y == a))
}

/// Relation between `user` and `hour`, first match wins.
pub fn element_relation(user: Element, hour: Element) -> ElementRelation {
    if user == hour {
        ElementRelation::PerfectAlignment
    } else if are_opposed(user, hour) {
        ElementRelation::MinorTension
    } else if SUPPORTIVE_PAIRS.contains(&(user, hour)) {
        ElementRelation::SupportiveFlow
    } else {
        ElementRelation::Neutral
    }
}

/// Modifier for a (user, hour) element pair.
pub fn element_modifier(user: Element, hour: Element) -> ElementalModifier {
    ElementalModifier::from(element_relation(user, hour))
}
