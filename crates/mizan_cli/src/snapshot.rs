//! Transit snapshot files.
//!
//! A snapshot file is a JSON object keyed by planet name (English or
//! Arabic, any case). Each value gives the tropical longitude and an
//! optional retrograde flag:
//!
//! ```json
//! { "Sun": { "longitude": 1.2 }, "Mars": { "longitude": 75.0, "retrograde": true } }
//! ```
//!
//! Sign and degree are derived from the longitude.

use std::collections::BTreeMap;
use std::path::Path;

use mizan_base::Planet;
use mizan_rating::{TransitData, TransitSnapshot};
use serde::Deserialize;

use crate::error::CliError;

#[derive(Debug, Deserialize)]
struct SnapshotEntry {
    longitude: f64,
    #[serde(default)]
    retrograde: bool,
}

/// Parse snapshot JSON text.
pub fn parse_snapshot(text: &str) -> Result<TransitSnapshot, CliError> {
    let raw: BTreeMap<String, SnapshotEntry> = serde_json::from_str(text)?;
    let mut snapshot = TransitSnapshot::new();
    for (name, entry) in raw {
        let planet: Planet = name.parse()?;
        if !entry.longitude.is_finite() {
            return Err(CliError::InvalidInput(format!(
                "longitude for {planet} is not finite"
            )));
        }
        snapshot.insert(
            planet.name(),
            TransitData::from_longitude(entry.longitude, entry.retrograde),
        );
    }
    Ok(snapshot)
}

/// Read and parse a snapshot file.
pub fn load_snapshot(path: &Path) -> Result<TransitSnapshot, CliError> {
    let text = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_snapshot(&text)
}
