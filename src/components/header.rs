use crate::app::state::AppState;
use crate::theme::glyphs;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct Header<'a> {
    pub state: &'a AppState,
}

#[must_use]
pub fn power_text(last_power_command: Option<bool>) -> &'static str {
    match last_power_command {
        Some(true) => " POWER: on ",
        Some(false) => " POWER: off ",
        None => " POWER: unknown ",
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let state = self.state;
        let theme = &state.theme;

        let logo_bg = theme.header_logo.bg.unwrap_or(Color::Reset);
        let url_bg = theme.header_item.bg.unwrap_or(Color::Reset);
        let base_bg = theme.header.bg.unwrap_or(Color::Reset);

        let power_style = match state.last_power_command {
            Some(true) => theme.header_active,
            Some(false) => theme.header_item,
            None => theme.header_warn,
        };
        let power_bg = power_style.bg.unwrap_or(Color::Reset);

        let mut spans = vec![
            Span::styled(" REMOCON ", theme.header_logo),
            Span::styled(glyphs::SEP_RIGHT, Style::default().fg(logo_bg).bg(url_bg)),
            Span::styled(format!(" {} ", state.base_url), theme.header_item),
            Span::styled(glyphs::SEP_RIGHT, Style::default().fg(url_bg).bg(power_bg)),
            Span::styled(power_text(state.last_power_command), power_style),
            Span::styled(glyphs::SEP_RIGHT, Style::default().fg(power_bg).bg(base_bg)),
        ];

        if state.keyboard_captured {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                format!(" {} CAPTURING ", glyphs::DOT),
                theme.status_error,
            ));
        }

        if state.in_flight > 0 {
            spans.push(Span::styled(
                format!("  {} {} pending", state.spinner(), state.in_flight),
                theme.header,
            ));
        }

        Paragraph::new(Line::from(spans))
            .style(theme.header)
            .render(area, buf);
    }
}
