mod component;
mod popup;

pub use component::{PartIndex, PartSlot};
pub use popup::{PopupEntry, PopupItem};
