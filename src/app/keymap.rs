use super::action::Action;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// What a key does while the keyboard is captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureKey {
    Send(&'static str),
    Release,
    Unmapped,
}

#[must_use]
pub fn capture_key(code: KeyCode) -> CaptureKey {
    match code {
        KeyCode::Up => CaptureKey::Send("menuUp"),
        KeyCode::Down => CaptureKey::Send("menuDown"),
        KeyCode::Left => CaptureKey::Send("menuLeft"),
        KeyCode::Right => CaptureKey::Send("menuRight"),
        KeyCode::Enter => CaptureKey::Send("menuOk"),
        KeyCode::Backspace => CaptureKey::Send("menuToggle"),
        KeyCode::Esc => CaptureKey::Release,
        _ => CaptureKey::Unmapped,
    }
}

/// Bindings used while the keyboard is not captured.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyMap {
    pub normal: HashMap<KeyEvent, Action>,
}

impl Default for KeyMap {
    fn default() -> Self {
        let mut normal = HashMap::new();

        normal.insert(key(KeyCode::Char('q')), Action::Quit);
        normal.insert(key(KeyCode::Char('?')), Action::ToggleHelp);
        normal.insert(key(KeyCode::Char('r')), Action::Load);
        normal.insert(key(KeyCode::Char('p')), Action::PressPower);
        normal.insert(key(KeyCode::Char('c')), Action::ToggleCapture(None));

        normal.insert(key(KeyCode::Enter), Action::PressFocused);
        normal.insert(key(KeyCode::Char(' ')), Action::PressFocused);

        for next in [
            key(KeyCode::Right),
            key(KeyCode::Down),
            key(KeyCode::Tab),
            key(KeyCode::Char('l')),
            key(KeyCode::Char('j')),
        ] {
            normal.insert(next, Action::FocusNext);
        }
        for prev in [
            key(KeyCode::Left),
            key(KeyCode::Up),
            key(KeyCode::BackTab),
            key(KeyCode::Char('h')),
            key(KeyCode::Char('k')),
        ] {
            normal.insert(prev, Action::FocusPrev);
        }

        Self { normal }
    }
}

impl KeyMap {
    pub fn get_action(&self, event: KeyEvent) -> Option<Action> {
        // Shift is implied by the character itself ('?', capitals) and by BackTab.
        let modifiers = match event.code {
            KeyCode::Char(_) | KeyCode::BackTab => event.modifiers.difference(KeyModifiers::SHIFT),
            _ => event.modifiers,
        };
        self.normal
            .get(&KeyEvent::new(event.code, modifiers))
            .cloned()
    }
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}
