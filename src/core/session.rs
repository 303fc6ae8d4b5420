use crate::model::PopupEntry;
use crate::ui::{DialogKind, View};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    #[default]
    Uninitialized,
    Menu,
    Running,
}

/// Everything the controller tracks for one play session besides the save.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub phase: SessionPhase,
    /// Fixed when the game screen opens; not recomputed afterwards.
    pub coin_per_second: i64,
    /// A save exists and "continue" may resume it.
    pub resumable: bool,
    pub drawer_open: bool,
    pub popup_open: bool,
    pub popup_entries: Vec<PopupEntry>,
    pub pending_dialog: Option<DialogKind>,
    pub tutorial_visible: bool,
    pub view: View,
}
