use std::fmt;
use std::str::FromStr;

use anyhow::{Error, anyhow};

/// Every value the save file knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SaveKey {
    Tutorial,
    Cpu,
    Ram,
    Vga,
    CpuLevel,
    RamLevel,
    VgaLevel,
    Psu,
    Coin,
    Money,
}

impl SaveKey {
    pub const ALL: [SaveKey; 10] = [
        SaveKey::Tutorial,
        SaveKey::Cpu,
        SaveKey::Ram,
        SaveKey::Vga,
        SaveKey::CpuLevel,
        SaveKey::RamLevel,
        SaveKey::VgaLevel,
        SaveKey::Psu,
        SaveKey::Coin,
        SaveKey::Money,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tutorial => "tutorial",
            Self::Cpu => "cpu",
            Self::Ram => "ram",
            Self::Vga => "vga",
            Self::CpuLevel => "cpuLv",
            Self::RamLevel => "ramLv",
            Self::VgaLevel => "vgaLv",
            Self::Psu => "psu",
            Self::Coin => "coin",
            Self::Money => "money",
        }
    }
}

impl fmt::Display for SaveKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SaveKey {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == name)
            .ok_or_else(|| anyhow!("unknown save key: {name}"))
    }
}
