//! Core UI functionality for coursebuilder.
//!
//! This module contains the building blocks the components sit on: actions,
//! the component trait, terminal event polling, the overlay owner, the drag
//! payload, scroll-spy tracking and the background task manager.
//!
//! # Architecture
//!
//! 1. **Components** implement the [`Component`] trait for consistent rendering
//! 2. **Actions** describe every state transition; the app component applies them to the store
//! 3. **Overlay** is the single owner of whatever menu or dialog is open
//! 4. **Events** are polled through the [`EventHandler`]
//! 5. **Tasks** (downloads) run on tokio via the [`TaskManager`] and report back as actions

pub mod actions;
pub mod component;
pub mod drag;
pub mod event_handler;
pub mod overlay;
pub mod scroll_spy;
pub mod task_manager;

// Re-export core types for easier access from other modules
pub use actions::{Action, DialogType, Target};
pub use component::Component;
pub use drag::{DragPayload, DragSession, DropTarget};
pub use event_handler::{EventHandler, EventType};
pub use overlay::{ActionMenuEntry, AddMenuEntry, Overlay, OverlayManager};
pub use scroll_spy::ScrollSpy;
pub use task_manager::{TaskId, TaskManager, TaskResult};
