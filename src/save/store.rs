use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use log::{debug, info};

use super::codec::{load_from_json_string, save_to_json_string};
use super::{SaveData, SaveKey};

/// Key-value persistence behind the game. Reads and writes hit the in-memory
/// copy; only `create`, `load` and `save` touch the backing medium.
pub trait Store {
    /// Whether a save exists on the backing medium.
    fn check(&self) -> bool;
    /// Writes a fresh default save to the backing medium.
    fn create(&mut self) -> Result<()>;
    /// Replaces the in-memory values with the persisted ones.
    fn load(&mut self) -> Result<()>;
    /// Flushes the in-memory values to the backing medium.
    fn save(&mut self) -> Result<()>;
    fn get_data(&self, key: SaveKey) -> i64;
    fn set_data(&mut self, key: SaveKey, value: i64);
}

#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    data: SaveData,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            data: SaveData::default(),
        }
    }

    fn write(&self, data: &SaveData) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed creating save directory: {}", parent.display()))?;
        }
        let json = save_to_json_string(data)?;
        fs::write(&self.path, json)
            .with_context(|| format!("failed writing save file: {}", self.path.display()))
    }
}

impl Store for FileStore {
    fn check(&self) -> bool {
        self.path.is_file()
    }

    fn create(&mut self) -> Result<()> {
        info!("creating save file at {}", self.path.display());
        self.write(&SaveData::default())
    }

    fn load(&mut self) -> Result<()> {
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("failed reading save file: {}", self.path.display()))?;
        self.data = load_from_json_string(&raw)
            .with_context(|| format!("in save file: {}", self.path.display()))?;
        info!("loaded save file from {}", self.path.display());
        Ok(())
    }

    fn save(&mut self) -> Result<()> {
        self.write(&self.data)?;
        debug!("saved to {}", self.path.display());
        Ok(())
    }

    fn get_data(&self, key: SaveKey) -> i64 {
        self.data.get(key)
    }

    fn set_data(&mut self, key: SaveKey, value: i64) {
        self.data.set(key, value);
    }
}

/// Store whose "disk" is another in-memory copy. Counts flushes so callers can
/// see exactly when persistence happened.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    persisted: Option<SaveData>,
    data: SaveData,
    save_count: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_save(save: SaveData) -> Self {
        Self {
            persisted: Some(save),
            data: SaveData::default(),
            save_count: 0,
        }
    }

    pub fn persisted(&self) -> Option<&SaveData> {
        self.persisted.as_ref()
    }

    pub fn data(&self) -> &SaveData {
        &self.data
    }

    pub fn save_count(&self) -> usize {
        self.save_count
    }
}

impl Store for MemoryStore {
    fn check(&self) -> bool {
        self.persisted.is_some()
    }

    fn create(&mut self) -> Result<()> {
        self.persisted = Some(SaveData::default());
        Ok(())
    }

    fn load(&mut self) -> Result<()> {
        let persisted = self
            .persisted
            .as_ref()
            .ok_or_else(|| anyhow!("no save data to load"))?;
        self.data = persisted.clone();
        Ok(())
    }

    fn save(&mut self) -> Result<()> {
        self.persisted = Some(self.data.clone());
        self.save_count += 1;
        Ok(())
    }

    fn get_data(&self, key: SaveKey) -> i64 {
        self.data.get(key)
    }

    fn set_data(&mut self, key: SaveKey, value: i64) {
        self.data.set(key, value);
    }
}
