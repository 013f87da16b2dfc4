use crate::app::state::{AppMode, AppState};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

const IDLE_KEYS: &[(&str, &str)] = &[
    ("←→", "focus"),
    ("Enter", "press"),
    ("p", "power"),
    ("c", "capture"),
    ("r", "reload"),
    ("?", "help"),
    ("q", "quit"),
];

const CAPTURE_KEYS: &[(&str, &str)] = &[
    ("↑↓←→", "navigate"),
    ("Enter", "ok"),
    ("Bksp", "menu"),
    ("Esc", "release"),
];

const LOADING_KEYS: &[(&str, &str)] = &[("q", "quit")];

#[must_use]
pub fn key_hints(state: &AppState) -> &'static [(&'static str, &'static str)] {
    match state.mode {
        AppMode::Loading => LOADING_KEYS,
        AppMode::Alert | AppMode::Help => &[("Esc", "close")],
        AppMode::Normal if state.is_capturing() => CAPTURE_KEYS,
        AppMode::Normal => IDLE_KEYS,
    }
}

pub struct Footer<'a> {
    pub state: &'a AppState,
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let state = self.state;
        let theme = &state.theme;

        let status_span = if let Some(err) = &state.last_error {
            Span::styled(format!("  ERROR: {}  ", err.message), theme.status_error)
        } else if let Some(msg) = &state.status_message {
            Span::styled(format!("  {msg}  "), theme.status_info)
        } else {
            Span::styled("  READY  ", theme.status_ready)
        };

        let mut spans = vec![status_span, Span::raw(" ")];

        let available_width = area.width.saturating_sub(2) as usize;
        let mut current_width: usize = spans.iter().map(Span::width).sum();

        for (key, desc) in key_hints(state) {
            let key_text = format!(" {key} ");
            let desc_text = format!(" {desc} ");
            let item_width = key_text.chars().count() + desc_text.chars().count() + 1;
            if current_width + item_width > available_width {
                break;
            }
            spans.push(Span::styled(key_text, theme.footer_segment_key));
            spans.push(Span::styled(desc_text, theme.footer_segment_val));
            spans.push(Span::raw(" "));
            current_width += item_width;
        }

        Paragraph::new(Line::from(spans))
            .style(theme.footer)
            .render(area, buf);
    }
}
