use crate::data::Catalogs;
use crate::text;

use super::component::{PartIndex, PartSlot};

/// A part as handed to the popup: what sits in the slot and how far it is
/// overclocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopupItem {
    pub slot: PartSlot,
    pub index: PartIndex,
    pub level: i64,
}

impl PopupItem {
    pub fn new(slot: PartSlot, index: PartIndex, level: i64) -> Self {
        Self { slot, index, level }
    }

    pub fn is_broken(&self) -> bool {
        self.index.is_broken()
    }
}

/// One rendered row of the popup list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupEntry {
    pub title: String,
    pub slot: PartSlot,
    pub module_name: String,
    pub level_label: String,
    pub overclock_cost_label: String,
    pub broken: bool,
}

impl PopupEntry {
    pub fn render(item: &PopupItem, catalogs: &Catalogs) -> Self {
        let module_name = if item.is_broken() {
            text::BROKEN_PART.to_string()
        } else {
            match item.slot {
                PartSlot::Psu => String::new(),
                slot => catalogs
                    .lookup(slot, item.index)
                    .map(|part| part.name.clone())
                    .unwrap_or_default(),
            }
        };

        Self {
            title: text::part_title(item.slot).to_string(),
            slot: item.slot,
            module_name,
            level_label: text::overclock_level(item.level),
            overclock_cost_label: text::OVERCLOCK_COST_PLACEHOLDER.to_string(),
            broken: item.is_broken(),
        }
    }

    /// Functioning parts offer the overclock button; broken ones render inert.
    pub fn interactive(&self) -> bool {
        !self.broken
    }
}
