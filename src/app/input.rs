use crate::app::keymap::{capture_key, CaptureKey};
use crate::app::{action::Action, state::AppMode, state::AppState, ui};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::layout::{Rect, Size};

pub fn map_event_to_action(
    event: Event,
    app_state: &AppState,
    terminal_size: Size,
) -> Option<Action> {
    if let Event::Key(key) = &event {
        if key.kind == KeyEventKind::Release {
            return None;
        }
    }

    let area = Rect::new(0, 0, terminal_size.width, terminal_size.height);

    match app_state.mode {
        AppMode::Alert => match event {
            Event::Key(key) => match key.code {
                KeyCode::Esc | KeyCode::Enter => Some(Action::DismissAlert),
                _ => None,
            },
            Event::Resize(w, h) => Some(Action::Resize(w, h)),
            _ => None,
        },
        AppMode::Help => match event {
            Event::Key(key) => match key.code {
                KeyCode::Esc | KeyCode::Char('q' | '?') => Some(Action::ToggleHelp),
                _ => None,
            },
            Event::Resize(w, h) => Some(Action::Resize(w, h)),
            _ => None,
        },
        AppMode::Loading => match event {
            Event::Key(key) => match key.code {
                KeyCode::Char('q') => Some(Action::Quit),
                _ => None,
            },
            Event::Resize(w, h) => Some(Action::Resize(w, h)),
            _ => None,
        },
        AppMode::Normal => match event {
            Event::Resize(w, h) => Some(Action::Resize(w, h)),
            Event::Key(key) if app_state.is_capturing() => map_captured_key(key),
            Event::Key(key) => app_state.keymap.get_action(key),
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => {
                    ui::button_at(area, app_state, mouse.column, mouse.row).map(Action::Press)
                }
                MouseEventKind::ScrollDown if !app_state.is_capturing() => {
                    Some(Action::FocusNext)
                }
                MouseEventKind::ScrollUp if !app_state.is_capturing() => {
                    Some(Action::FocusPrev)
                }
                _ => None,
            },
            _ => None,
        },
    }
}

/// Routes a key through the capture hook.
fn map_captured_key(key: KeyEvent) -> Option<Action> {
    match capture_key(key.code) {
        CaptureKey::Send(command) => Some(Action::SendCommand(command.to_string())),
        CaptureKey::Release => Some(Action::ToggleCapture(Some(false))),
        CaptureKey::Unmapped => {
            tracing::debug!("Unknown key {:?}", key);
            None
        }
    }
}
