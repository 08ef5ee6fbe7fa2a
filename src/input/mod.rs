use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::model::{Athlete, AttributeTable, RankObservation};

pub mod defs;

pub use defs::builtin_roster;

/// Reads a JSON roster: `[{"name": ..., "ratings": {"Sprint": 9.5, ...}}]`.
/// Unknown attribute names are rejected.
pub fn load_roster(path: &Path) -> Result<AttributeTable> {
    let athletes: Vec<Athlete> = read_json(path)?;
    crate::info!(path = %path.display(), athletes = athletes.len(), "loaded roster");
    AttributeTable::new(athletes)
}

/// Reads JSON stage results: `{"athlete": rank, ...}`.
pub fn load_results(path: &Path) -> Result<RankObservation> {
    let observation: RankObservation = read_json(path)?;
    let invalid = observation.iter().filter(|(_, r)| *r < 1).count();
    if invalid > 0 {
        crate::warn!(path = %path.display(), invalid, "ignoring ranks below 1");
    }
    Ok(observation)
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|e| Error::Input {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    serde_json::from_str(&content).map_err(|e| Error::Input {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
