pub mod alert;
pub mod help;
pub mod helpers;

pub use alert::AlertModal;
pub use help::HelpModal;
