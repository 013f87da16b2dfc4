use super::button::{button_style, button_width, display_label, flow, rows_needed, ButtonView};
use crate::app::state::AppState;
use crate::domain::interface::{Button, ButtonId};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Widget},
};

/// Pinned buttons followed by the power and capture toggles.
fn buttons(state: &AppState) -> Vec<&Button> {
    let ui = &state.interface;
    ui.pinned
        .iter()
        .chain(ui.power_toggle.as_ref())
        .chain(ui.capture_toggle.as_ref())
        .collect()
}

fn widths(state: &AppState) -> Vec<u16> {
    buttons(state)
        .iter()
        .map(|b| button_width(&display_label(state, b)))
        .collect()
}

/// Outer height of the bar, zero when there is nothing to show.
#[must_use]
pub fn height(state: &AppState, width: u16) -> u16 {
    let widths = widths(state);
    if widths.is_empty() {
        return 0;
    }
    rows_needed(width.saturating_sub(2), &widths) + 2
}

#[must_use]
pub fn button_rects(state: &AppState, area: Rect) -> Vec<(ButtonId, Rect)> {
    let inner = block(state, false).inner(area);
    buttons(state)
        .iter()
        .map(|b| b.id)
        .zip(flow(inner, &widths(state)))
        .collect()
}

fn block(state: &AppState, capturing: bool) -> Block<'static> {
    let theme = &state.theme;
    let (border, title_style) = if capturing {
        (theme.status_error, theme.status_error)
    } else {
        (theme.border, theme.header_item)
    };
    Block::default()
        .title(Line::from(vec![
            Span::raw(" "),
            Span::styled("REMOTE", title_style),
            Span::raw(" "),
        ]))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border)
}

pub struct Controls<'a> {
    pub state: &'a AppState,
}

impl Widget for Controls<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let state = self.state;
        block(state, state.keyboard_captured).render(area, buf);

        for (button, (_, rect)) in buttons(state).into_iter().zip(button_rects(state, area)) {
            ButtonView {
                label: display_label(state, button),
                style: button_style(state, button),
            }
            .render(rect, buf);
        }
    }
}
