//! Dialog renderers. Each returns the area it drew so the overlay owner can
//! detect clicks outside it.

pub mod common;
pub mod file_dialogs;
pub mod link_dialogs;
pub mod module_dialogs;
pub mod scroll_behavior;
pub mod system_dialogs;
