use crate::app::state::{AppMode, AppState};
use crate::components::command_panel::{self, CommandPanel};
use crate::components::controls::{self, Controls};
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::modals::{AlertModal, HelpModal};
use crate::domain::interface::ButtonId;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub struct AppLayout {
    pub header: Rect,
    pub controls: Rect,
    pub panel: Rect,
    pub footer: Rect,
}

pub fn get_layout(area: Rect, app_state: &AppState) -> AppLayout {
    let controls_height = controls::height(app_state, area.width);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),               // Header
            Constraint::Length(controls_height), // Pinned buttons and toggles
            Constraint::Min(0),                  // Command groups
            Constraint::Length(1),               // Footer
        ])
        .split(area);

    AppLayout {
        header: chunks[0],
        controls: chunks[1],
        panel: if app_state.interface.has_container {
            chunks[2]
        } else {
            Rect::default()
        },
        footer: chunks[3],
    }
}

/// Screen position of every visible button.
pub fn button_rects(area: Rect, app_state: &AppState) -> Vec<(ButtonId, Rect)> {
    let layout = get_layout(area, app_state);
    let mut rects = controls::button_rects(app_state, layout.controls);
    if layout.panel.width > 0 && layout.panel.height > 0 {
        rects.extend(command_panel::layout(app_state, layout.panel).buttons);
    }
    rects
}

/// Command panel offset that keeps the focused button on screen.
#[must_use]
pub fn panel_scroll(area: Rect, app_state: &AppState) -> u16 {
    let layout = get_layout(area, app_state);
    if layout.panel.width == 0 || layout.panel.height == 0 {
        return app_state.panel_scroll;
    }
    command_panel::layout(app_state, layout.panel).scroll
}

pub fn button_at(area: Rect, app_state: &AppState, column: u16, row: u16) -> Option<ButtonId> {
    button_rects(area, app_state)
        .into_iter()
        .find(|(_, r)| {
            column >= r.x && column < r.x + r.width && row >= r.y && row < r.y + r.height
        })
        .map(|(id, _)| id)
}

pub fn draw(f: &mut Frame, app_state: &AppState) {
    let area = f.area();
    if area.width == 0 || area.height == 0 {
        return;
    }

    let layout = get_layout(area, app_state);

    f.render_widget(Header { state: app_state }, layout.header);

    if layout.controls.height > 0 {
        f.render_widget(Controls { state: app_state }, layout.controls);
    }

    if layout.panel.width > 0 && layout.panel.height > 0 {
        f.render_widget(CommandPanel { state: app_state }, layout.panel);
    } else if !app_state.interface.has_container {
        let body = Rect {
            y: layout.controls.bottom(),
            height: layout.footer.y.saturating_sub(layout.controls.bottom()),
            ..area
        };
        if body.height > 0 {
            let hint = Paragraph::new(Line::from(Span::styled(
                "Command groups are hidden (document.command_interface = false)",
                app_state.theme.dimmed,
            )))
            .alignment(Alignment::Center);
            f.render_widget(hint, Rect { height: 1, ..body });
        }
    }

    f.render_widget(Footer { state: app_state }, layout.footer);

    // --- Overlays ---
    match app_state.mode {
        AppMode::Alert => {
            if let Some(err) = &app_state.last_error {
                f.render_widget(
                    AlertModal {
                        theme: &app_state.theme,
                        error: err,
                    },
                    area,
                );
            }
        }
        AppMode::Help => f.render_widget(
            HelpModal {
                theme: &app_state.theme,
            },
            area,
        ),
        AppMode::Loading | AppMode::Normal => {}
    }
}
