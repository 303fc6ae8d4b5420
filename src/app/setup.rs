use bevy::prelude::*;
use idle_miner::{FileStore, GameController, load_catalogs};

use super::resources::{RuntimeConfig, SessionState, UiState};
use super::state::AppPhase;

pub fn spawn_camera(mut commands: Commands) {
    commands.spawn((Name::new("PrimaryCamera"), Camera2d));
}

pub fn bootstrap_session(
    mut commands: Commands,
    mut ui: ResMut<UiState>,
    mut next_phase: ResMut<NextState<AppPhase>>,
    mut exit: EventWriter<AppExit>,
) {
    let config = match RuntimeConfig::discover() {
        Ok(config) => config,
        Err(err) => {
            error!("could not read config: {err:#}");
            exit.send(AppExit::error());
            return;
        }
    };

    let catalogs = match load_catalogs(&config.0) {
        Ok(catalogs) => catalogs,
        Err(err) => {
            error!("could not load part catalogs: {err:#}");
            exit.send(AppExit::error());
            return;
        }
    };

    let store = FileStore::new(&config.0.save_path);
    let mut controller = GameController::new(store, catalogs, config.0.clone());
    let last_error = match controller.init() {
        Ok(ui_commands) => {
            ui.0.apply_all(&ui_commands);
            None
        }
        Err(err) => {
            error!("could not load save: {err:#}");
            Some(format!("{err:#}"))
        }
    };

    commands.insert_resource(config);
    commands.insert_resource(SessionState {
        controller,
        last_error,
    });
    next_phase.set(AppPhase::Playing);
}
