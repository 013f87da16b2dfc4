use crate::domain::label::{capitalize, prettify_command};
use crate::domain::models::CommandCatalog;
use serde::{Deserialize, Serialize};

/// Which elements exist on screen before any command is known.
///
/// `pinned` lists hand-placed command buttons by command id. Each of the flags
/// stands for one fixed element: the power toggle, the capture-keyboard toggle
/// and the container the generated command groups are placed in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Document {
    pub pinned: Vec<String>,
    pub power_toggle: bool,
    pub capture_keyboard: bool,
    pub command_interface: bool,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            pinned: Vec::new(),
            power_toggle: true,
            capture_keyboard: true,
            command_interface: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonId {
    Pinned(usize),
    PowerToggle,
    CaptureToggle,
    Group { section: usize, index: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ButtonAction {
    Send(String),
    PowerToggle,
    CaptureToggle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub id: ButtonId,
    pub label: String,
    /// `None` until a handler is attached; pressing an unbound button does nothing.
    pub action: Option<ButtonAction>,
}

impl Button {
    fn unbound(id: ButtonId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            action: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub buttons: Vec<Button>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateOutcome {
    Complete { bound_pinned: usize, sections: usize },
    NoContainer { bound_pinned: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Interface {
    pub pinned: Vec<Button>,
    pub power_toggle: Option<Button>,
    pub capture_toggle: Option<Button>,
    pub has_container: bool,
    pub sections: Vec<Section>,
}

impl Interface {
    /// The static elements, all still unbound.
    #[must_use]
    pub fn from_document(document: &Document) -> Self {
        Self {
            pinned: document
                .pinned
                .iter()
                .enumerate()
                .map(|(i, command)| Button::unbound(ButtonId::Pinned(i), prettify_command(command)))
                .collect(),
            power_toggle: document
                .power_toggle
                .then(|| Button::unbound(ButtonId::PowerToggle, "Power")),
            capture_toggle: document
                .capture_keyboard
                .then(|| Button::unbound(ButtonId::CaptureToggle, "Click to capture keyboard")),
            has_container: document.command_interface,
            sections: Vec::new(),
        }
    }

    /// Binds pinned buttons and the power toggle, then fills the container with
    /// one section per group.
    pub fn generate(&mut self, catalog: &CommandCatalog, document: &Document) -> GenerateOutcome {
        let mismatches = catalog.mismatches();
        if !mismatches.unknown_in_groups.is_empty() {
            tracing::warn!(
                "Groups reference unknown commands: {}",
                mismatches.unknown_in_groups.join(", ")
            );
        }
        if !mismatches.ungrouped.is_empty() {
            tracing::warn!(
                "Commands without a group: {}",
                mismatches.ungrouped.join(", ")
            );
        }

        let mut bound_pinned = 0;
        for command in &catalog.commands {
            for (button, id) in self.pinned.iter_mut().zip(&document.pinned) {
                if id == command {
                    button.action = Some(ButtonAction::Send(command.clone()));
                    bound_pinned += 1;
                }
            }
        }

        if let Some(power) = &mut self.power_toggle {
            power.action = Some(ButtonAction::PowerToggle);
        }

        if !self.has_container {
            tracing::error!("No container element found for commands");
            return GenerateOutcome::NoContainer { bound_pinned };
        }

        for (group, commands) in &catalog.groups {
            let section = self.sections.len();
            let buttons = commands
                .iter()
                .enumerate()
                .map(|(index, command)| Button {
                    id: ButtonId::Group { section, index },
                    label: prettify_command(command),
                    action: Some(ButtonAction::Send(command.clone())),
                })
                .collect();
            self.sections.push(Section {
                title: capitalize(group),
                buttons,
            });
        }

        GenerateOutcome::Complete {
            bound_pinned,
            sections: catalog.groups.len(),
        }
    }

    /// Attaches the capture handler. Returns `false` when the toggle is not on screen.
    pub fn install_capture_toggle(&mut self) -> bool {
        match &mut self.capture_toggle {
            Some(button) => {
                button.action = Some(ButtonAction::CaptureToggle);
                true
            }
            None => {
                tracing::warn!("No capture-keyboard element, keyboard capture disabled");
                false
            }
        }
    }

    #[must_use]
    pub fn button(&self, id: ButtonId) -> Option<&Button> {
        match id {
            ButtonId::Pinned(i) => self.pinned.get(i),
            ButtonId::PowerToggle => self.power_toggle.as_ref(),
            ButtonId::CaptureToggle => self.capture_toggle.as_ref(),
            ButtonId::Group { section, index } => {
                self.sections.get(section).and_then(|s| s.buttons.get(index))
            }
        }
    }

    /// Every button in reading order.
    #[must_use]
    pub fn focus_order(&self) -> Vec<ButtonId> {
        let mut order: Vec<ButtonId> = self.pinned.iter().map(|b| b.id).collect();
        if let Some(b) = &self.power_toggle {
            order.push(b.id);
        }
        if let Some(b) = &self.capture_toggle {
            order.push(b.id);
        }
        for section in &self.sections {
            order.extend(section.buttons.iter().map(|b| b.id));
        }
        order
    }
}
