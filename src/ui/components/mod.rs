//! Reusable UI components

// Component architecture
pub mod course_view_component;
pub mod dialog_component;
pub mod dialogs;
pub mod menu_component;
pub mod outline_component;
pub mod scrollbar_helper;
pub mod status_bar;

// Component exports
pub use course_view_component::CourseViewComponent;
pub use dialog_component::DialogComponent;
pub use outline_component::OutlineComponent;
pub use status_bar::StatusBar;
