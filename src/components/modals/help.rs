use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Clear, Row, Table, Widget},
};

use super::helpers::{draw_shadow, popup_rect, scaled_width};

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Buttons",
        &[
            (" ← → / h l / Tab", "Move focus"),
            (" Enter / Space", "Press focused button"),
            (" Mouse click", "Press button under cursor"),
            (" p", "Power toggle"),
        ],
    ),
    (
        "Keyboard capture",
        &[
            (" c", "Start capturing"),
            (" ↑ ↓ ← →", "menuUp / menuDown / menuLeft / menuRight"),
            (" Enter", "menuOk"),
            (" Backspace", "menuToggle"),
            (" Esc", "Stop capturing"),
        ],
    ),
    (
        "General",
        &[
            (" r", "Reload commands and status"),
            (" ?", "Show this help"),
            (" q", "Quit"),
        ],
    ),
];

pub struct HelpModal<'a> {
    pub theme: &'a Theme,
}

impl Widget for HelpModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Title row per section, entries, one blank row between sections.
        let rows: usize = SECTIONS.iter().map(|(_, e)| e.len() + 2).sum::<usize>() - 1;
        let height = u16::try_from(rows).unwrap_or(u16::MAX).saturating_add(2);
        let help_area = popup_rect(area, scaled_width(area, 70, 60), height);
        if help_area.width < 3 || help_area.height < 3 {
            return;
        }
        draw_shadow(buf, help_area, self.theme.shadow);
        Clear.render(help_area, buf);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(" HELP - KEYBINDINGS ", self.theme.header_active),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus);

        let mut rows = Vec::new();
        for (i, (category, entries)) in SECTIONS.iter().enumerate() {
            if i > 0 {
                rows.push(Row::new(vec![Cell::from(""), Cell::from("")]));
            }
            rows.push(Row::new(vec![
                Cell::from(Span::styled(*category, self.theme.header_item)),
                Cell::from(""),
            ]));
            for (key, desc) in *entries {
                rows.push(Row::new(vec![
                    Cell::from(Span::styled(*key, self.theme.footer_segment_key)),
                    Cell::from(Span::styled(*desc, self.theme.list_item)),
                ]));
            }
        }

        Table::new(rows, [Constraint::Percentage(35), Constraint::Percentage(65)])
            .block(block)
            .render(help_area, buf);
    }
}
