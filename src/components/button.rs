use crate::app::state::{capture_label, AppState};
use crate::domain::interface::{Button, ButtonId};
use crate::theme::glyphs;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::Span,
    widgets::{Paragraph, Widget},
};
use std::time::Duration;

const GAP: u16 = 1;
const PRESS_FLASH: Duration = Duration::from_millis(300);

/// Text shown on a button, which for the toggles depends on state.
#[must_use]
pub fn display_label(state: &AppState, button: &Button) -> String {
    match button.id {
        ButtonId::CaptureToggle => {
            format!("{} {}", glyphs::KEYBOARD, capture_label(state.keyboard_captured))
        }
        ButtonId::PowerToggle => format!("{} {}", glyphs::POWER, button.label),
        _ => button.label.clone(),
    }
}

#[must_use]
pub fn button_width(label: &str) -> u16 {
    u16::try_from(label.chars().count())
        .unwrap_or(u16::MAX)
        .saturating_add(2)
}

/// Places buttons left to right, wrapping to a new row when one does not fit.
/// Returns `(column offset, row)` per button.
fn positions(width: u16, widths: &[u16]) -> Vec<(u16, u16)> {
    let mut out = Vec::with_capacity(widths.len());
    let (mut x, mut row) = (0u16, 0u16);
    for &w in widths {
        let w = w.min(width);
        if x > 0 && x.saturating_add(w) > width {
            x = 0;
            row += 1;
        }
        out.push((x, row));
        x = x.saturating_add(w).saturating_add(GAP);
    }
    out
}

#[must_use]
pub fn rows_needed(width: u16, widths: &[u16]) -> u16 {
    if width == 0 {
        return 0;
    }
    positions(width, widths)
        .last()
        .map_or(0, |(_, row)| row + 1)
}

/// Flow layout clipped to `area`; buttons that fall outside get an empty rect.
#[must_use]
pub fn flow(area: Rect, widths: &[u16]) -> Vec<Rect> {
    if area.width == 0 || area.height == 0 {
        return vec![Rect::default(); widths.len()];
    }
    positions(area.width, widths)
        .into_iter()
        .zip(widths)
        .map(|((x, row), &w)| {
            if row >= area.height {
                Rect::default()
            } else {
                Rect::new(area.x + x, area.y + row, w.min(area.width), 1)
            }
        })
        .collect()
}

#[must_use]
pub fn button_style(state: &AppState, button: &Button) -> Style {
    let theme = &state.theme;
    let pressed = state
        .last_pressed
        .is_some_and(|(id, at)| id == button.id && at.elapsed() < PRESS_FLASH);

    if button.id == ButtonId::CaptureToggle && state.keyboard_captured {
        theme.button_capture
    } else if pressed {
        theme.button_pressed
    } else if state.focused_button() == Some(button.id) {
        theme.button_focus
    } else if button.action.is_none() {
        theme.button_inert
    } else {
        theme.button
    }
}

pub struct ButtonView {
    pub label: String,
    pub style: Style,
}

impl Widget for ButtonView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        Paragraph::new(Span::styled(format!(" {} ", self.label), self.style)).render(area, buf);
    }
}
