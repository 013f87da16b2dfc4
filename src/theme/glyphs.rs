pub const POWER: &str = "⏻";
pub const KEYBOARD: &str = "⌨";
pub const DOT: &str = "●";
pub const SEP_RIGHT: &str = "";
pub const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
