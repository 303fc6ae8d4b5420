use crate::model::{PartSlot, PopupEntry};
use crate::text;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Menu,
    Game,
}

/// Which half of the game screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    City,
}

/// Tag telling the dialog resolver what a confirmation is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    ExitGame,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusReadout {
    pub money: i64,
    pub coin: i64,
    pub coin_per_second: i64,
}

impl StatusReadout {
    pub fn money_label(&self) -> String {
        text::money(self.money)
    }

    pub fn coin_label(&self) -> String {
        text::coin(self.coin)
    }

    pub fn rate_label(&self) -> String {
        text::coin_rate(self.coin_per_second)
    }
}

/// What the core asks the rendering surface to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    ShowScreen(Screen),
    SetContinueEnabled(bool),
    SetTutorialVisible(bool),
    SetDrawerVisible(bool),
    ShowView(View),
    RenderStatus(StatusReadout),
    ShowNotify(String),
    HideNotify,
    ShowDialog { message: String, kind: DialogKind },
    HideDialog,
    OpenPopup { title: String, entries: Vec<PopupEntry> },
    HidePopup,
}

/// What the rendering surface reports back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    NewGame,
    Continue,
    ToggleDrawer,
    ComputerClicked,
    DoorClicked,
    ReturnHome,
    ClosePopup,
    ExitRequested,
    DialogConfirmed,
    DialogCancelled,
    TutorialDismissed,
    Overclock(PartSlot),
}
