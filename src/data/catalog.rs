use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::{PartIndex, PartSlot};

const BUNDLED_CATALOGS: &str = include_str!("../../assets/data/parts.json");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartDefinition {
    pub name: String,
    /// Coin mined per second while the part is installed.
    pub coin: i64,
}

/// Read-only CPU, RAM and VGA tables, indexed by the values kept in the save.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalogs {
    #[serde(default)]
    pub cpu: Vec<PartDefinition>,
    #[serde(default)]
    pub ram: Vec<PartDefinition>,
    #[serde(default)]
    pub vga: Vec<PartDefinition>,
}

impl Catalogs {
    pub fn bundled() -> Result<Self> {
        serde_json::from_str(BUNDLED_CATALOGS).context("failed parsing bundled part catalogs")
    }

    pub fn table(&self, slot: PartSlot) -> &[PartDefinition] {
        match slot {
            PartSlot::Psu => &[],
            PartSlot::Cpu => &self.cpu,
            PartSlot::Ram => &self.ram,
            PartSlot::Vga => &self.vga,
        }
    }

    pub fn lookup(&self, slot: PartSlot, index: PartIndex) -> Option<&PartDefinition> {
        self.table(slot).get(index.position()?)
    }

    /// Sum of the three yields, or 0 when any part is broken or unknown.
    pub fn coin_per_second(&self, cpu: PartIndex, ram: PartIndex, vga: PartIndex) -> i64 {
        let parts = (
            self.lookup(PartSlot::Cpu, cpu),
            self.lookup(PartSlot::Ram, ram),
            self.lookup(PartSlot::Vga, vga),
        );
        match parts {
            (Some(cpu), Some(ram), Some(vga)) => cpu.coin + ram.coin + vga.coin,
            _ => 0,
        }
    }
}
