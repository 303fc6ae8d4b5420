use bevy::prelude::*;
use bevy::window::WindowCloseRequested;

use super::resources::{SessionState, UiInput, UiState};

pub fn apply_ui_events(
    mut events: EventReader<UiInput>,
    mut session: ResMut<SessionState>,
    mut ui: ResMut<UiState>,
) {
    for UiInput(event) in events.read() {
        match session.controller.handle(*event) {
            Ok(commands) => ui.0.apply_all(&commands),
            Err(err) => {
                error!("{event:?} failed: {err:#}");
                session.last_error = Some(format!("{err:#}"));
            }
        }
    }
}

pub fn advance_session(
    time: Res<Time>,
    mut session: ResMut<SessionState>,
    mut ui: ResMut<UiState>,
) {
    let report = session.controller.advance(time.delta());
    if !report.commands.is_empty() {
        ui.0.apply_all(&report.commands);
    }
    if let Some(err) = report.save_error {
        error!("autosave failed: {err:#}");
        session.last_error = Some(format!("{err:#}"));
    }
}

pub fn save_on_close(
    mut close_requests: EventReader<WindowCloseRequested>,
    mut session: ResMut<SessionState>,
) {
    if close_requests.read().next().is_none() {
        return;
    }
    if !session.controller.session().resumable {
        return;
    }
    if let Err(err) = session.controller.save() {
        error!("save on close failed: {err:#}");
    }
}
