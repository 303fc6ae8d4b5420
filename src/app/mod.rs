mod input;
mod resources;
mod setup;
mod simulation;
mod state;
mod view;

use bevy::prelude::*;

use resources::{UiInput, UiState};
use state::AppPhase;

pub struct MinerAppPlugin;

impl Plugin for MinerAppPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<AppPhase>()
            .init_resource::<UiState>()
            .add_event::<UiInput>()
            .add_systems(Startup, (setup::spawn_camera, view::spawn_hud))
            .add_systems(OnEnter(AppPhase::Boot), setup::bootstrap_session)
            .add_systems(
                Update,
                (
                    input::emit_key_events,
                    simulation::apply_ui_events,
                    simulation::advance_session,
                    simulation::save_on_close,
                    view::refresh_hud,
                )
                    .chain()
                    .run_if(in_state(AppPhase::Playing)),
            );
    }
}
