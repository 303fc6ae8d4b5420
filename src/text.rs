//! User-visible strings.

use crate::model::PartSlot;

pub const NO_SAVE_FILE: &str = "No save file found.";
pub const BROKEN_PART_OVERCLOCK: &str = "Broken parts cannot be overclocked.";
pub const CONFIRM_EXIT: &str = "Do you really want to quit?";
pub const MY_COMPUTER: &str = "My Computer";
pub const BROKEN_PART: &str = "Broken";
pub const OVERCLOCK_COST_PLACEHOLDER: &str = "Overclock cost: 0 won";

pub fn part_title(slot: PartSlot) -> &'static str {
    match slot {
        PartSlot::Psu => "Power Supply",
        PartSlot::Cpu => "CPU",
        PartSlot::Ram => "RAM",
        PartSlot::Vga => "Graphics Card",
    }
}

pub fn overclock_level(level: i64) -> String {
    format!("Overclock level: {level}")
}

pub fn money(amount: i64) -> String {
    format!("{amount} won")
}

pub fn coin(amount: i64) -> String {
    format!("{amount} BTC")
}

pub fn coin_rate(rate: i64) -> String {
    format!("{rate} BTC/s")
}
