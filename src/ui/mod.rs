//! Boundary between the game core and whatever draws it.

mod command;
mod screen;

pub use command::{DialogKind, GameEvent, Screen, StatusReadout, UiCommand, View};
pub use screen::ScreenModel;
