//! Loading of the static unit dataset.

use std::{collections::HashSet, fs, io, path::Path};

use serde::Deserialize;
use thiserror::Error;

use crate::{
    domain::Unit,
    util::{
        assets::{asset_bytes, UNITS_DATASET},
        config::CodexConfig,
    },
};

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("dataset `{0}` is not bundled with the application")]
    Missing(String),
    #[error("failed to read dataset: {0}")]
    Io(#[from] io::Error),
    #[error("invalid dataset: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate unit id {0}")]
    DuplicateId(u32),
}

#[derive(Deserialize)]
struct UnitsDocument {
    units: Vec<Unit>,
}

/// Parses a `{ "units": [...] }` document and checks ids are unique.
pub fn parse_units(bytes: &[u8]) -> Result<Vec<Unit>, DatasetError> {
    let document: UnitsDocument = serde_json::from_slice(bytes)?;
    let mut seen = HashSet::with_capacity(document.units.len());
    if let Some(duplicate) = document.units.iter().find(|unit| !seen.insert(unit.id)) {
        return Err(DatasetError::DuplicateId(duplicate.id));
    }
    Ok(document.units)
}

pub fn load_from_path(path: &Path) -> Result<Vec<Unit>, DatasetError> {
    let bytes = fs::read(path)?;
    parse_units(&bytes)
}

pub fn load_embedded() -> Result<Vec<Unit>, DatasetError> {
    let bytes =
        asset_bytes(UNITS_DATASET).ok_or_else(|| DatasetError::Missing(UNITS_DATASET.to_string()))?;
    parse_units(&bytes)
}

/// Loads the configured dataset, or the embedded one when no override is set.
pub async fn load_units(config: &CodexConfig) -> Result<Vec<Unit>, DatasetError> {
    let result = match config.dataset_path.as_deref() {
        Some(path) => {
            tracing::info!("loading units from {}", path.display());
            load_from_path(path)
        }
        None => load_embedded(),
    };

    match &result {
        Ok(units) => tracing::info!("loaded {} units", units.len()),
        Err(err) => tracing::warn!("unit dataset failed to load: {err}"),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Age;

    #[test]
    fn embedded_dataset_parses() {
        let units = load_embedded().unwrap();
        assert!(!units.is_empty());
        assert!(units.iter().any(|unit| unit.age == Age::Imperial));
        assert!(units.iter().any(|unit| unit.cost.is_none()));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let json = br#"{ "units": [
            { "id": 1, "name": "Militia", "age": "Dark", "cost": { "Food": 60 }, "hit_points": 40 },
            { "id": 1, "name": "Villager", "age": "Dark", "cost": { "Food": 50 }, "hit_points": 25 }
        ] }"#;
        assert!(matches!(parse_units(json), Err(DatasetError::DuplicateId(1))));
    }

    #[test]
    fn rejects_malformed_documents() {
        assert!(matches!(parse_units(b"[]"), Err(DatasetError::Parse(_))));
        assert!(matches!(parse_units(b"{ \"units\": "), Err(DatasetError::Parse(_))));
    }

    #[test]
    fn missing_override_file_is_an_io_error() {
        let err = load_from_path(Path::new("/definitely/not/here/units.json")).unwrap_err();
        assert!(matches!(err, DatasetError::Io(_)));
        assert!(err.to_string().starts_with("failed to read dataset"));
    }
}
