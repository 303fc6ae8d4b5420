use std::fmt::Write as _;

use bevy::prelude::*;
use idle_miner::{Screen, ScreenModel, View};

use super::resources::{HudText, SessionState, UiState};

pub fn spawn_hud(mut commands: Commands) {
    commands.spawn((
        Name::new("HudText"),
        HudText,
        Text::new("Loading..."),
        TextFont {
            font_size: 18.0,
            ..default()
        },
        TextColor(Color::srgb(0.94, 0.97, 0.99)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(16.0),
            top: Val::Px(12.0),
            ..default()
        },
    ));
}

pub fn refresh_hud(
    ui: Res<UiState>,
    session: Res<SessionState>,
    mut hud_query: Query<&mut Text, With<HudText>>,
) {
    let Ok(mut hud) = hud_query.get_single_mut() else {
        return;
    };

    let mut body = hud_text(&ui.0);
    if let Some(err) = session.last_error.as_deref() {
        let _ = write!(body, "\n\nError: {err}");
    }
    *hud = Text::new(body);
}

fn hud_text(model: &ScreenModel) -> String {
    let mut out = String::new();

    match model.screen {
        Screen::Menu => {
            out.push_str("IDLE MINER\n\n[N] New game\n");
            if model.continue_enabled {
                out.push_str("[C] Continue\n");
            } else {
                out.push_str("[C] Continue (no save)\n");
            }
        }
        Screen::Game => {
            let _ = writeln!(
                out,
                "Money: {}   Coin: {}   Rate: {}",
                model.status.money_label(),
                model.status.coin_label(),
                model.status.rate_label()
            );
            match model.view {
                View::Home => out.push_str("At home  [M] Computer  [D] Go outside\n"),
                View::City => out.push_str("In the city  [H] Go home\n"),
            }
            out.push_str("[Tab] Menu drawer  [Esc] Quit\n");

            if model.drawer_visible {
                out.push_str("\n-- Drawer --\n[Esc] Quit to main menu\n");
            }
            if model.tutorial_visible {
                out.push_str(
                    "\n-- Tutorial --\nYour computer mines coin every second.\n\
                     Click the computer to inspect its parts.  [T] Got it\n",
                );
            }
            if model.popup_visible {
                let _ = writeln!(out, "\n-- {} --  [P] Close", model.popup_title);
                for (row, entry) in model.popup_entries.iter().enumerate() {
                    let _ = writeln!(
                        out,
                        "{}. {}: {}  {}  {}{}",
                        row + 1,
                        entry.title,
                        entry.module_name,
                        entry.level_label,
                        entry.overclock_cost_label,
                        if entry.interactive() {
                            "  [Overclock]"
                        } else {
                            ""
                        }
                    );
                }
            }
        }
    }

    if let Some((message, _)) = &model.dialog {
        let _ = writeln!(out, "\n{message}  [Enter] Yes  [Backspace] No");
    }
    if let Some(message) = &model.notification {
        let _ = writeln!(out, "\n>> {message}");
    }

    out
}
