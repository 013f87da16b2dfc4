pub mod button;
pub mod command_panel;
pub mod controls;
pub mod footer;
pub mod header;
pub mod modals;
