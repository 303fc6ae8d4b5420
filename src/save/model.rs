use serde::{Deserialize, Serialize};

use super::SaveKey;

pub const SAVE_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SaveData {
    pub version: u32,
    pub tutorial: i64,
    pub cpu: i64,
    pub ram: i64,
    pub vga: i64,
    pub cpu_lv: i64,
    pub ram_lv: i64,
    pub vga_lv: i64,
    pub psu: i64,
    pub coin: i64,
    pub money: i64,
}

impl Default for SaveData {
    fn default() -> Self {
        Self {
            version: SAVE_VERSION,
            tutorial: 1,
            cpu: 0,
            ram: 0,
            vga: 0,
            cpu_lv: 0,
            ram_lv: 0,
            vga_lv: 0,
            psu: 0,
            coin: 0,
            money: 0,
        }
    }
}

impl SaveData {
    pub fn get(&self, key: SaveKey) -> i64 {
        match key {
            SaveKey::Tutorial => self.tutorial,
            SaveKey::Cpu => self.cpu,
            SaveKey::Ram => self.ram,
            SaveKey::Vga => self.vga,
            SaveKey::CpuLevel => self.cpu_lv,
            SaveKey::RamLevel => self.ram_lv,
            SaveKey::VgaLevel => self.vga_lv,
            SaveKey::Psu => self.psu,
            SaveKey::Coin => self.coin,
            SaveKey::Money => self.money,
        }
    }

    pub fn set(&mut self, key: SaveKey, value: i64) {
        let slot = match key {
            SaveKey::Tutorial => &mut self.tutorial,
            SaveKey::Cpu => &mut self.cpu,
            SaveKey::Ram => &mut self.ram,
            SaveKey::Vga => &mut self.vga,
            SaveKey::CpuLevel => &mut self.cpu_lv,
            SaveKey::RamLevel => &mut self.ram_lv,
            SaveKey::VgaLevel => &mut self.vga_lv,
            SaveKey::Psu => &mut self.psu,
            SaveKey::Coin => &mut self.coin,
            SaveKey::Money => &mut self.money,
        };
        *slot = value;
    }
}
