use super::{
    action::Action,
    command::Command,
    state::{AppMode, AppState, CaptureController, CatalogState, ErrorState, KeyHooks},
};
use crate::domain::interface::{ButtonAction, ButtonId, GenerateOutcome, Interface};
use std::time::Instant;

pub const POWER_ON: &str = "powerOn";
pub const POWER_OFF: &str = "powerOff";

pub fn update(state: &mut AppState, action: Action) -> Option<Command> {
    match action {
        Action::Tick => {
            state.frame_count = state.frame_count.wrapping_add(1);
        }
        Action::Resize(_, _) => {}
        Action::Quit => {
            state.should_quit = true;
        }
        Action::Load => return load(state),

        // --- Focus ---
        Action::FocusNext => move_focus(state, 1),
        Action::FocusPrev => move_focus(state, -1),

        // --- Buttons ---
        Action::PressFocused => {
            if let Some(id) = state.focused_button() {
                return press(state, id);
            }
        }
        Action::Press(id) => {
            if let Some(idx) = state.interface.focus_order().iter().position(|b| *b == id) {
                state.focus = Some(idx);
            }
            return press(state, id);
        }
        Action::PressPower => return press(state, ButtonId::PowerToggle),
        Action::SendCommand(name) => return Some(send(state, name)),
        Action::ToggleCapture(force) => toggle_capture(state, force),

        // --- Overlays ---
        Action::ToggleHelp => {
            state.mode = match state.mode {
                AppMode::Help => AppMode::Normal,
                AppMode::Normal => AppMode::Help,
                other => other,
            };
        }
        Action::DismissAlert => {
            state.last_error = None;
            if state.mode == AppMode::Alert {
                state.mode = AppMode::Normal;
            }
        }

        // --- Async Results ---
        Action::StatusLoaded {
            epoch,
            startup,
            result,
        } => {
            state.in_flight = state.in_flight.saturating_sub(1);
            if epoch != state.epoch {
                return None;
            }
            if let Ok(status) = result {
                state.last_power_command = status.last_power_command;
            }
            if startup {
                state.in_flight += 1;
                return Some(Command::LoadCatalog { epoch });
            }
        }
        Action::CatalogLoaded { epoch, result } => {
            state.in_flight = state.in_flight.saturating_sub(1);
            if epoch != state.epoch {
                return None;
            }
            match result {
                Ok(catalog) => {
                    let outcome = state.interface.generate(&catalog, &state.document);
                    state.catalog = CatalogState::Loaded(catalog.commands.len());
                    state.status_message = Some(match outcome {
                        GenerateOutcome::Complete { sections, .. } => format!(
                            "Loaded {} commands in {sections} groups",
                            catalog.commands.len()
                        ),
                        GenerateOutcome::NoContainer { .. } => {
                            format!("Loaded {} commands", catalog.commands.len())
                        }
                    });
                }
                Err(e) => {
                    state.catalog = CatalogState::Failed(e.to_string());
                    state.status_message = Some("Command list unavailable".to_string());
                }
            }
            install_capture(state);
            if state.mode == AppMode::Loading {
                state.mode = AppMode::Normal;
            }
            if state.focus.is_none() && !state.interface.focus_order().is_empty() {
                state.focus = Some(0);
            }
        }
        Action::CommandSent(name, result) => {
            state.in_flight = state.in_flight.saturating_sub(1);
            match result {
                Ok(()) => state.status_message = Some(format!("Sent {name}")),
                Err(e) if e.is_transport() => {
                    state.last_error = Some(ErrorState::new(format!(
                        "Error sending command {name}: {e}"
                    )));
                    state.mode = AppMode::Alert;
                }
                Err(e) => {
                    state.status_message = Some(format!("Failed to send {name}: {e}"));
                }
            }
        }
    }
    None
}

/// Resets everything a page load would and starts the status → catalog sequence.
fn load(state: &mut AppState) -> Option<Command> {
    state.epoch += 1;
    state.mode = AppMode::Loading;
    state.interface = Interface::from_document(&state.document);
    state.catalog = CatalogState::Pending;
    state.last_power_command = None;
    state.keyboard_captured = false;
    state.hooks = KeyHooks::default();
    state.capture = None;
    state.focus = None;
    state.panel_scroll = 0;
    state.last_pressed = None;
    state.last_error = None;
    state.status_message = Some(format!("Connecting to {}...", state.base_url));
    state.in_flight += 1;
    Some(Command::LoadStatus {
        epoch: state.epoch,
        startup: true,
    })
}

fn install_capture(state: &mut AppState) {
    if state.capture.is_none() && state.interface.install_capture_toggle() {
        state.capture = Some(CaptureController::new(&mut state.hooks));
    }
}

fn move_focus(state: &mut AppState, delta: isize) {
    let len = state.interface.focus_order().len();
    if len == 0 {
        state.focus = None;
        return;
    }
    let current = state.focus.unwrap_or(0).min(len - 1) as isize;
    let next = if state.focus.is_none() {
        0
    } else {
        (current + delta).rem_euclid(len as isize)
    };
    state.focus = Some(next as usize);
}

fn press(state: &mut AppState, id: ButtonId) -> Option<Command> {
    let action = state.interface.button(id).and_then(|b| b.action.clone());
    let Some(action) = action else {
        tracing::debug!("Pressed {id:?}, which has no handler");
        return None;
    };
    state.last_pressed = Some((id, Instant::now()));

    match action {
        ButtonAction::Send(name) => Some(send(state, name)),
        ButtonAction::PowerToggle => {
            let power_on = state.last_power_command != Some(true);
            // One request for the command, one for the status refresh.
            state.in_flight += 2;
            Some(Command::TogglePower {
                power_on,
                epoch: state.epoch,
            })
        }
        ButtonAction::CaptureToggle => {
            toggle_capture(state, None);
            None
        }
    }
}

fn send(state: &mut AppState, name: String) -> Command {
    state.in_flight += 1;
    Command::Send(name)
}

fn toggle_capture(state: &mut AppState, force: Option<bool>) {
    let Some(capture) = state.capture else {
        tracing::debug!("Keyboard capture is not available");
        return;
    };
    let captured = capture.apply(&mut state.keyboard_captured, force, &mut state.hooks);
    tracing::info!("Keyboard capture {}", if captured { "on" } else { "off" });
}
