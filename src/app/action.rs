use crate::domain::interface::ButtonId;
use crate::domain::models::{CommandCatalog, DeviceStatus};
use crate::domain::remote::ApiError;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- System / Terminal ---
    Tick,
    Resize(u16, u16),
    Quit,
    Load, // Start-up sequence, also used for reload

    // --- Focus ---
    FocusNext,
    FocusPrev,

    // --- Buttons ---
    PressFocused,
    Press(ButtonId),
    PressPower,                  // Shortcut for the power toggle
    SendCommand(String),         // Captured key
    ToggleCapture(Option<bool>), // None flips, Some forces

    // --- Overlays ---
    ToggleHelp,
    DismissAlert,

    // --- Async Results ---
    StatusLoaded {
        epoch: u64,
        startup: bool,
        result: Result<DeviceStatus, ApiError>,
    },
    CatalogLoaded {
        epoch: u64,
        result: Result<CommandCatalog, ApiError>,
    },
    CommandSent(String, Result<(), ApiError>),
}
