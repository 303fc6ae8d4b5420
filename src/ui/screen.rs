use crate::model::PopupEntry;

use super::command::{DialogKind, Screen, StatusReadout, UiCommand, View};

/// Headless rendering surface: folds commands into the state a real UI would
/// be showing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScreenModel {
    pub screen: Screen,
    pub continue_enabled: bool,
    pub tutorial_visible: bool,
    pub drawer_visible: bool,
    pub view: View,
    pub status: StatusReadout,
    pub notification: Option<String>,
    pub dialog: Option<(String, DialogKind)>,
    pub popup_visible: bool,
    pub popup_title: String,
    pub popup_entries: Vec<PopupEntry>,
    /// Number of times the popup list was rebuilt.
    pub popup_renders: usize,
}

impl ScreenModel {
    pub fn apply(&mut self, command: &UiCommand) {
        match command {
            UiCommand::ShowScreen(screen) => self.screen = *screen,
            UiCommand::SetContinueEnabled(enabled) => self.continue_enabled = *enabled,
            UiCommand::SetTutorialVisible(visible) => self.tutorial_visible = *visible,
            UiCommand::SetDrawerVisible(visible) => self.drawer_visible = *visible,
            UiCommand::ShowView(view) => self.view = *view,
            UiCommand::RenderStatus(status) => self.status = *status,
            UiCommand::ShowNotify(message) => self.notification = Some(message.clone()),
            UiCommand::HideNotify => self.notification = None,
            UiCommand::ShowDialog { message, kind } => {
                self.dialog = Some((message.clone(), *kind));
            }
            UiCommand::HideDialog => self.dialog = None,
            UiCommand::OpenPopup { title, entries } => {
                self.popup_title = title.clone();
                self.popup_entries = entries.clone();
                self.popup_visible = true;
                self.popup_renders += 1;
            }
            // Content stays in place while hidden.
            UiCommand::HidePopup => self.popup_visible = false,
        }
    }

    pub fn apply_all<'a>(&mut self, commands: impl IntoIterator<Item = &'a UiCommand>) {
        for command in commands {
            self.apply(command);
        }
    }
}
