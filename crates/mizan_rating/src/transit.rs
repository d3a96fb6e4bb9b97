//! Transit snapshot supplied by the caller.
//!
//! A snapshot maps planet names to their current sign, degree, ecliptic
//! longitude and retrograde flag. Names are matched case-insensitively.
//! The engine only ever borrows a snapshot.

use std::collections::BTreeMap;

use mizan_base::{Burj, Planet, burj_from_longitude};

/// One planet's position in a snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TransitData {
    /// Burj the planet occupies.
    pub sign: Burj,
    /// Degrees within the sign [0, 30).
    pub degree: f64,
    /// Ecliptic longitude in degrees [0, 360).
    pub longitude: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub retrograde: bool,
}

impl TransitData {
    /// Build from an ecliptic longitude, deriving sign and degree.
    pub fn from_longitude(longitude: f64, retrograde: bool) -> Self {
        let info = burj_from_longitude(longitude);
        Self {
            sign: info.burj,
            degree: info.degree_in_sign,
            longitude: info.burj.index() as f64 * 30.0 + info.degree_in_sign,
            retrograde,
        }
    }
}

/// Planet name to transit data.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TransitSnapshot {
    entries: BTreeMap<String, TransitData>,
}

impl TransitSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry under `name`, returning any entry it replaced.
    pub fn insert(&mut self, name: impl Into<String>, data: TransitData) -> Option<TransitData> {
        self.entries.insert(name.into(), data)
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, name: impl Into<String>, data: TransitData) -> Self {
        self.insert(name, data);
        self
    }

    /// Insert an entry keyed by the planet's English name.
    pub fn with_planet(self, planet: Planet, data: TransitData) -> Self {
        self.with(planet.name(), data)
    }

    /// Look up an entry by name, ignoring ASCII case.
    ///
    /// An exact match wins over a case-folded one. Among several case-folded
    /// matches the first in sorted key order wins.
    pub fn get(&self, name: &str) -> Option<&TransitData> {
        if let Some(data) = self.entries.get(name) {
            return Some(data);
        }
        self.entries
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v)
    }

    /// Look up a planet's entry by its English name.
    pub fn planet(&self, planet: Planet) -> Option<&TransitData> {
        self.get(planet.name())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TransitData)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>> FromIterator<(K, TransitData)> for TransitSnapshot {
    fn from_iter<I: IntoIterator<Item = (K, TransitData)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
