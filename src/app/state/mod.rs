use super::keymap::KeyMap;
use crate::domain::interface::{ButtonId, Document, Interface};
use std::sync::Arc;
use std::time::Instant;

pub mod capture;
pub mod error;

// Re-exports
pub use capture::{capture_label, CaptureController, HookId, KeyHooks};
pub use error::ErrorState;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum AppMode {
    Loading, // Start-up requests in flight
    Normal,  // Interface ready (capturing or not)
    Alert,   // Blocking error, must be acknowledged
    Help,    // Showing the help overlay
}

#[derive(Debug, Clone, PartialEq)]
pub enum CatalogState {
    Pending,
    Loaded(usize),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    // --- Connectivity & Status ---
    pub should_quit: bool,
    pub mode: AppMode,
    pub base_url: String,
    pub last_error: Option<ErrorState>,
    pub status_message: Option<String>,
    pub in_flight: usize,
    /// Bumped on every (re)load; late answers from an older load are dropped.
    pub epoch: u64,

    // --- Device ---
    pub catalog: CatalogState,
    pub last_power_command: Option<bool>,

    // --- Interface ---
    pub document: Document,
    pub interface: Interface,
    pub focus: Option<usize>,
    /// Top content row of the command panel, kept in step with the focus by the loop.
    pub panel_scroll: u16,
    pub last_pressed: Option<(ButtonId, Instant)>,

    // --- Keyboard Capture ---
    pub keyboard_captured: bool,
    pub hooks: KeyHooks,
    pub capture: Option<CaptureController>,

    // --- Animation ---
    pub frame_count: u64,

    // --- Config ---
    pub keymap: Arc<KeyMap>,
    pub theme: crate::theme::Theme,
}

impl AppState {
    #[must_use]
    pub fn new(document: Document, base_url: String) -> Self {
        Self {
            interface: Interface::from_document(&document),
            document,
            base_url,
            ..Default::default()
        }
    }

    /// True while the capture hook is installed.
    #[must_use]
    pub fn is_capturing(&self) -> bool {
        self.capture
            .as_ref()
            .is_some_and(|c| c.is_capturing(&self.hooks))
    }

    #[must_use]
    pub fn focused_button(&self) -> Option<ButtonId> {
        let order = self.interface.focus_order();
        self.focus.and_then(|i| order.get(i).copied())
    }

    #[must_use]
    pub fn spinner(&self) -> &'static str {
        let frames = crate::theme::glyphs::SPINNER;
        frames[(self.frame_count as usize) % frames.len()]
    }
}

impl Default for AppState {
    fn default() -> Self {
        let document = Document::default();
        Self {
            should_quit: false,
            mode: AppMode::Loading,
            base_url: String::new(),
            last_error: None,
            status_message: None,
            in_flight: 0,
            epoch: 0,
            catalog: CatalogState::Pending,
            last_power_command: None,
            interface: Interface::from_document(&document),
            document,
            focus: None,
            panel_scroll: 0,
            last_pressed: None,
            keyboard_captured: false,
            hooks: KeyHooks::default(),
            capture: None,
            frame_count: 0,
            keymap: Arc::new(KeyMap::default()),
            theme: crate::theme::Theme::default(),
        }
    }
}
