use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

use super::{Catalogs, GameConfig};

pub fn load_catalogs_from_path(path: impl AsRef<Path>) -> Result<Catalogs> {
    read_json(path.as_ref(), "part catalog")
}

pub fn load_config_from_path(path: impl AsRef<Path>) -> Result<GameConfig> {
    read_json(path.as_ref(), "game config")
}

/// Catalogs named by the config, falling back to the bundled tables.
pub fn load_catalogs(config: &GameConfig) -> Result<Catalogs> {
    match &config.catalog_path {
        Some(path) => load_catalogs_from_path(path),
        None => Catalogs::bundled(),
    }
}

fn read_json<T>(path: &Path, label: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed reading {label} file: {}", path.display()))?;

    serde_json::from_str(&raw)
        .with_context(|| format!("failed parsing {label} file as JSON: {}", path.display()))
}
