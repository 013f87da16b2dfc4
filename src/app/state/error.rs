use chrono::{DateTime, Local};

#[derive(Debug, Clone, PartialEq)]
pub struct ErrorState {
    pub message: String,
    pub timestamp: DateTime<Local>,
    pub suggestions: Vec<String>,
}

impl ErrorState {
    #[must_use]
    pub fn new(message: String) -> Self {
        Self {
            suggestions: crate::app::recovery::get_suggestions(&message),
            message,
            timestamp: Local::now(),
        }
    }
}
