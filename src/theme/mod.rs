use ratatui::style::{Modifier, Style};

pub mod glyphs;
pub mod palette;

pub use palette::{dim_color, Palette};

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub border: Style,
    pub border_focus: Style,

    pub button: Style,
    pub button_focus: Style,
    pub button_pressed: Style,
    pub button_inert: Style,
    pub button_capture: Style,
    pub section_title: Style,

    pub status_ready: Style,
    pub status_info: Style,
    pub status_error: Style,

    pub header_logo: Style,
    pub header_item: Style,
    pub header_active: Style,
    pub header_warn: Style,
    pub header: Style,

    pub footer_segment_key: Style,
    pub footer_segment_val: Style,
    pub footer: Style,

    pub list_item: Style,
    pub dimmed: Style,
    pub shadow: Style,
}

impl Theme {
    #[must_use]
    pub fn from_palette(p: &Palette) -> Self {
        Self {
            border: Style::default().fg(p.surface2),
            border_focus: Style::default().fg(p.blue),

            button: Style::default().bg(p.surface1).fg(p.text),
            button_focus: Style::default()
                .bg(p.blue)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            button_pressed: Style::default()
                .bg(p.green)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            button_inert: Style::default().bg(p.surface0).fg(p.overlay),
            // Matches the red "stop" state of the capture toggle.
            button_capture: Style::default()
                .bg(p.red)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            section_title: Style::default().fg(p.mauve).add_modifier(Modifier::BOLD),

            status_ready: Style::default()
                .bg(p.green)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            status_info: Style::default()
                .bg(p.blue)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            status_error: Style::default()
                .bg(p.red)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),

            header_logo: Style::default()
                .bg(p.blue)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            header_item: Style::default().bg(p.surface0).fg(p.text),
            header_active: Style::default()
                .bg(p.green)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            header_warn: Style::default()
                .bg(p.yellow)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            header: Style::default().bg(p.base).fg(p.text),

            footer_segment_key: Style::default()
                .bg(p.surface0)
                .fg(p.teal)
                .add_modifier(Modifier::BOLD),
            footer_segment_val: Style::default().bg(p.base).fg(p.text),
            footer: Style::default().bg(dim_color(p.crust, 0.9)).fg(p.subtext),

            list_item: Style::default().fg(p.text),
            dimmed: Style::default().fg(p.overlay).add_modifier(Modifier::DIM),
            shadow: Style::default().bg(p.crust),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_palette(&palette::MOCHA)
    }
}
