use std::fmt;

use crate::save::SaveKey;

/// Hardware slot inside the player's computer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartSlot {
    Psu,
    Cpu,
    Ram,
    Vga,
}

impl PartSlot {
    pub const ALL: [PartSlot; 4] = [PartSlot::Psu, PartSlot::Cpu, PartSlot::Ram, PartSlot::Vga];

    pub fn id(self) -> &'static str {
        match self {
            Self::Psu => "psu",
            Self::Cpu => "cpu",
            Self::Ram => "ram",
            Self::Vga => "vga",
        }
    }

    /// Key holding the installed catalog index. The power supply has no catalog
    /// and is always installed at index 0.
    pub fn index_key(self) -> Option<SaveKey> {
        match self {
            Self::Psu => None,
            Self::Cpu => Some(SaveKey::Cpu),
            Self::Ram => Some(SaveKey::Ram),
            Self::Vga => Some(SaveKey::Vga),
        }
    }

    pub fn level_key(self) -> SaveKey {
        match self {
            Self::Psu => SaveKey::Psu,
            Self::Cpu => SaveKey::CpuLevel,
            Self::Ram => SaveKey::RamLevel,
            Self::Vga => SaveKey::VgaLevel,
        }
    }
}

impl fmt::Display for PartSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Installed catalog index for a slot; `-1` marks a broken or missing part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PartIndex(pub i64);

impl PartIndex {
    pub const BROKEN: PartIndex = PartIndex(-1);

    pub fn is_broken(self) -> bool {
        self == Self::BROKEN
    }

    /// Position inside a catalog table, `None` for the sentinel or any other
    /// negative value.
    pub fn position(self) -> Option<usize> {
        if self.0 < 0 {
            return None;
        }
        usize::try_from(self.0).ok()
    }
}
