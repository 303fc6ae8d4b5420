use std::path::Path;

use anyhow::Result;
use bevy::prelude::*;
use idle_miner::{
    FileStore, GameConfig, GameController, GameEvent, ScreenModel, load_config_from_path,
};

const CONFIG_FILE: &str = "idle_miner.json";

#[derive(Resource, Debug, Clone, Default)]
pub struct RuntimeConfig(pub GameConfig);

impl RuntimeConfig {
    /// Reads `idle_miner.json` from the working directory when present.
    pub fn discover() -> Result<Self> {
        let path = Path::new(CONFIG_FILE);
        if !path.is_file() {
            return Ok(Self::default());
        }
        Ok(Self(load_config_from_path(path)?))
    }
}

#[derive(Resource, Debug)]
pub struct SessionState {
    pub controller: GameController<FileStore>,
    pub last_error: Option<String>,
}

#[derive(Resource, Debug, Default)]
pub struct UiState(pub ScreenModel);

#[derive(Event, Debug, Clone, Copy)]
pub struct UiInput(pub GameEvent);

#[derive(Component)]
pub struct HudText;
