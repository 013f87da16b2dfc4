use super::button::{button_style, button_width, flow, rows_needed, ButtonView};
use crate::app::state::{AppState, CatalogState};
use crate::domain::interface::ButtonId;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

#[derive(Debug, Default, PartialEq)]
pub struct PanelLayout {
    pub titles: Vec<Rect>,
    pub buttons: Vec<(ButtonId, Rect)>,
    /// First content row shown at the top of the panel.
    pub scroll: u16,
    pub hidden_above: bool,
    pub hidden_below: bool,
}

fn block(state: &AppState) -> Block<'static> {
    Block::default()
        .title(Line::from(vec![
            Span::raw(" "),
            Span::styled("COMMANDS", state.theme.header_item),
            Span::raw(" "),
        ]))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(state.theme.border)
}

/// Sections stacked from row 0, before scrolling. Buttons that cannot be
/// placed at all have zero width.
struct Content {
    titles: Vec<u16>,
    buttons: Vec<(ButtonId, Rect)>,
    height: u16,
}

fn content(state: &AppState, width: u16) -> Content {
    let mut out = Content {
        titles: Vec::new(),
        buttons: Vec::new(),
        height: 0,
    };
    let mut y: u16 = 0;

    for section in &state.interface.sections {
        let widths: Vec<u16> = section
            .buttons
            .iter()
            .map(|b| button_width(&b.label))
            .collect();

        out.titles.push(y);
        y = y.saturating_add(1);

        let rows = rows_needed(width, &widths);
        let rects = flow(Rect::new(0, y, width, rows), &widths);
        out.buttons
            .extend(section.buttons.iter().map(|b| b.id).zip(rects));
        y = y.saturating_add(rows);
    }

    out.height = y;
    out
}

/// Content rows the focused group button needs on screen. The section title
/// comes along when the button sits in the section's first row.
fn focus_span(state: &AppState, content: &Content) -> Option<(u16, u16)> {
    let id = state.focused_button()?;
    let ButtonId::Group { section, .. } = id else {
        return None;
    };
    let (_, rect) = content.buttons.iter().find(|(b, _)| *b == id)?;
    if rect.width == 0 {
        return None;
    }
    let title = content.titles.get(section).copied()?;
    let top = if rect.y == title.saturating_add(1) {
        title
    } else {
        rect.y
    };
    Some((top, rect.y))
}

/// Moves the stored offset as little as possible to bring the focus into view.
fn resolve_scroll(stored: u16, content_height: u16, span: Option<(u16, u16)>, height: u16) -> u16 {
    let mut scroll = stored.min(content_height.saturating_sub(height));
    if height == 0 {
        return scroll;
    }
    if let Some((top, bottom)) = span {
        if top < scroll {
            scroll = top;
        } else if bottom >= scroll.saturating_add(height) {
            scroll = bottom.saturating_add(1).saturating_sub(height);
        }
    }
    scroll
}

/// Stacks the group sections, a title line then the wrapped button rows,
/// scrolled so the focused button is visible.
#[must_use]
pub fn layout(state: &AppState, area: Rect) -> PanelLayout {
    let inner = block(state).inner(area);
    let content = content(state, inner.width);
    let scroll = resolve_scroll(
        state.panel_scroll,
        content.height,
        focus_span(state, &content),
        inner.height,
    );

    let screen_row = |y: u16| {
        (y >= scroll && y - scroll < inner.height).then(|| inner.y + (y - scroll))
    };

    let titles = content
        .titles
        .iter()
        .map(|&y| {
            screen_row(y).map_or(Rect::default(), |row| Rect::new(inner.x, row, inner.width, 1))
        })
        .collect();

    let buttons = content
        .buttons
        .iter()
        .map(|&(id, r)| {
            let rect = match screen_row(r.y) {
                Some(row) if r.width > 0 => Rect::new(inner.x + r.x, row, r.width, 1),
                _ => Rect::default(),
            };
            (id, rect)
        })
        .collect();

    PanelLayout {
        titles,
        buttons,
        scroll,
        hidden_above: scroll > 0,
        hidden_below: content.height > scroll.saturating_add(inner.height),
    }
}

pub struct CommandPanel<'a> {
    pub state: &'a AppState,
}

impl Widget for CommandPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let state = self.state;
        let theme = &state.theme;
        let layout = layout(state, area);
        let mut block = block(state);
        let more = match (layout.hidden_above, layout.hidden_below) {
            (true, true) => Some(" ▲▼ more "),
            (true, false) => Some(" ▲ more "),
            (false, true) => Some(" ▼ more "),
            (false, false) => None,
        };
        if let Some(more) = more {
            block = block.title_bottom(Line::from(Span::styled(more, theme.dimmed)).right_aligned());
        }
        let inner = block.inner(area);
        block.render(area, buf);

        let placeholder = if !state.interface.has_container {
            Some(Line::from(Span::styled(
                "No command container configured",
                theme.dimmed,
            )))
        } else {
            match &state.catalog {
                CatalogState::Pending => Some(Line::from(vec![
                    Span::styled(state.spinner(), theme.section_title),
                    Span::raw(" Loading commands... "),
                ])),
                CatalogState::Failed(err) => Some(Line::from(vec![
                    Span::styled(" Could not load commands ", theme.status_error),
                    Span::styled(format!(" {err}"), theme.dimmed),
                ])),
                CatalogState::Loaded(_) if state.interface.sections.is_empty() => Some(
                    Line::from(Span::styled("No command groups", theme.dimmed)),
                ),
                CatalogState::Loaded(_) => None,
            }
        };

        if let Some(line) = placeholder {
            let y = inner.y + inner.height / 2;
            if inner.height > 0 {
                Paragraph::new(line)
                    .alignment(Alignment::Center)
                    .render(Rect::new(inner.x, y, inner.width, 1), buf);
            }
            return;
        }

        for (section, title_area) in state.interface.sections.iter().zip(&layout.titles) {
            if title_area.height > 0 {
                Paragraph::new(Span::styled(section.title.as_str(), theme.section_title))
                    .render(*title_area, buf);
            }
        }

        let buttons = state.interface.sections.iter().flat_map(|s| s.buttons.iter());
        for (button, (_, rect)) in buttons.zip(&layout.buttons) {
            ButtonView {
                label: button.label.clone(),
                style: button_style(state, button),
            }
            .render(*rect, buf);
        }
    }
}
