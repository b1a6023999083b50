//! coursebuilder - a terminal course-content organizer
//!
//! Build a course out of named modules, uploaded files and links. Items are
//! ordered with drag-and-drop (keyboard grab mode or mouse), searched, and
//! navigated through an outline that follows the scroll position. Everything
//! lives in memory for the lifetime of the process.
//!
//! # Modules
//!
//! * [`config`] - Application configuration management
//! * [`store`] - The central course state and its ordering operations
//! * [`download`] - Saving file copies and opening links
//! * [`ui`] - Terminal user interface components

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Saving file resources and opening link resources
pub mod download;

/// Module and resource records
pub mod entities;

/// Form state and validation for the dialogs
pub mod forms;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Logging setup and the in-memory log buffer
pub mod logger;

/// Central in-memory course store
pub mod store;

/// Terminal user interface components and rendering
pub mod ui;

// Re-export the core model for convenient access
pub use entities::{ItemId, Module, Resource, ResourceKind};
pub use store::{CourseStore, LinkDraft, StoreError};
