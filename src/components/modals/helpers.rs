use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    style::Style,
};

/// Centers a popup of `width` x `height` cells, shrunk to fit `area` minus a
/// one-cell margin for the shadow.
pub fn popup_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(1));
    let height = height.min(area.height.saturating_sub(1));

    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    popup
}

/// Width as a share of the screen, but never narrower than `min`.
pub fn scaled_width(area: Rect, percent: u16, min: u16) -> u16 {
    let scaled = u32::from(area.width) * u32::from(percent.min(100)) / 100;
    u16::try_from(scaled).unwrap_or(u16::MAX).max(min)
}

/// Paints the cells one column right and one row below `popup`.
pub fn draw_shadow(buf: &mut Buffer, popup: Rect, style: Style) {
    let shadow = Rect {
        x: popup.x.saturating_add(1),
        y: popup.y.saturating_add(1),
        ..popup
    }
    .intersection(buf.area);

    for y in shadow.top()..shadow.bottom() {
        for x in shadow.left()..shadow.right() {
            buf[(x, y)].set_symbol(" ").set_style(style);
        }
    }
}
