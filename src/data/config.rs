use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub save_path: PathBuf,
    pub tick_period_ms: u64,
    pub autosave_every_ticks: u64,
    pub notify_duration_ms: u64,
    pub catalog_path: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            save_path: PathBuf::from("user.dat"),
            tick_period_ms: 1000,
            autosave_every_ticks: 60,
            notify_duration_ms: 3000,
            catalog_path: None,
        }
    }
}

impl GameConfig {
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_period_ms.max(1))
    }

    pub fn notify_duration(&self) -> Duration {
        Duration::from_millis(self.notify_duration_ms)
    }

    pub fn autosave_every(&self) -> u64 {
        self.autosave_every_ticks.max(1)
    }
}
