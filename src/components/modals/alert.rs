use crate::app::state::ErrorState;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};

use super::helpers::{draw_shadow, popup_rect, scaled_width};

/// Blocking error dialog; input is held until it is acknowledged.
pub struct AlertModal<'a> {
    pub theme: &'a Theme,
    pub error: &'a ErrorState,
}

impl Widget for AlertModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title_style = self.theme.status_error;

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(" ERROR ", title_style),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(title_style);

        let timestamp = self.error.timestamp.format("%H:%M:%S").to_string();

        let mut text_lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                self.error.message.as_str(),
                self.theme.footer_segment_val,
            )),
            Line::from(Span::styled(
                format!("Occurred at: {timestamp}"),
                self.theme.list_item,
            )),
            Line::from(""),
        ];

        for suggestion in &self.error.suggestions {
            text_lines.push(Line::from(vec![
                Span::styled("• ", self.theme.header_item),
                Span::styled(suggestion.as_str(), self.theme.footer_segment_key),
            ]));
        }
        if !self.error.suggestions.is_empty() {
            text_lines.push(Line::from(""));
        }

        text_lines.push(Line::from(vec![
            Span::raw(" Press "),
            Span::styled("Esc", self.theme.footer_segment_key),
            Span::raw(" to acknowledge "),
        ]));

        let width = scaled_width(area, 60, 40);
        let inner_width = usize::from(width.saturating_sub(2)).max(1);
        let wrapped: usize = text_lines
            .iter()
            .map(|l| l.width().div_ceil(inner_width).max(1))
            .sum();
        let height = u16::try_from(wrapped).unwrap_or(u16::MAX).saturating_add(2);

        let modal_area = popup_rect(area, width, height);
        if modal_area.width < 3 || modal_area.height < 3 {
            return;
        }
        draw_shadow(buf, modal_area, self.theme.shadow);
        Clear.render(modal_area, buf);

        Paragraph::new(text_lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block)
            .render(modal_area, buf);
    }
}
