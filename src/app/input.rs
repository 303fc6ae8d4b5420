use bevy::prelude::*;
use idle_miner::{GameEvent, PartSlot};

use super::resources::UiInput;

const KEY_BINDINGS: [(KeyCode, GameEvent); 15] = [
    (KeyCode::KeyN, GameEvent::NewGame),
    (KeyCode::KeyC, GameEvent::Continue),
    (KeyCode::Tab, GameEvent::ToggleDrawer),
    (KeyCode::KeyM, GameEvent::ComputerClicked),
    (KeyCode::KeyD, GameEvent::DoorClicked),
    (KeyCode::KeyH, GameEvent::ReturnHome),
    (KeyCode::KeyP, GameEvent::ClosePopup),
    (KeyCode::Escape, GameEvent::ExitRequested),
    (KeyCode::Enter, GameEvent::DialogConfirmed),
    (KeyCode::Backspace, GameEvent::DialogCancelled),
    (KeyCode::KeyT, GameEvent::TutorialDismissed),
    (KeyCode::Digit1, GameEvent::Overclock(PartSlot::Psu)),
    (KeyCode::Digit2, GameEvent::Overclock(PartSlot::Cpu)),
    (KeyCode::Digit3, GameEvent::Overclock(PartSlot::Ram)),
    (KeyCode::Digit4, GameEvent::Overclock(PartSlot::Vga)),
];

pub fn emit_key_events(keys: Res<ButtonInput<KeyCode>>, mut events: EventWriter<UiInput>) {
    for (key, event) in KEY_BINDINGS {
        if keys.just_pressed(key) {
            events.send(UiInput(event));
        }
    }
}
