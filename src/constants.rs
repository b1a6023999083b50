//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

// Section Headers
pub const HEADER_UNASSIGNED: &str = "Unassigned";
pub const HEADER_OUTLINE: &str = "Outline";
pub const DEFAULT_COURSE_TITLE: &str = "Course Builder";
pub const EMPTY_STATE_TITLE: &str = "Nothing added yet";
pub const EMPTY_STATE_HINT: &str = "Press 'a' to create a module, upload files or add a link";
pub const EMPTY_OUTLINE: &str = "No modules yet";

// Add menu entries, in display order
pub const ADD_MENU_ITEMS: [&str; 3] = ["Create module", "Upload", "Create link"];

// Success Messages
pub const SUCCESS_MODULE_CREATED: &str = "✅ Module created";
pub const SUCCESS_MODULE_RENAMED: &str = "✅ Module renamed";
pub const SUCCESS_MODULE_DELETED: &str = "✅ Module deleted";
pub const SUCCESS_FILES_ADDED: &str = "✅ Files added";
pub const SUCCESS_LINK_CREATED: &str = "✅ Link created";
pub const SUCCESS_LINK_UPDATED: &str = "✅ Link updated";
pub const SUCCESS_RESOURCE_RENAMED: &str = "✅ Renamed";
pub const SUCCESS_RESOURCE_DELETED: &str = "✅ Deleted";
pub const SUCCESS_RESOURCE_MOVED: &str = "✅ Moved";
pub const SUCCESS_DOWNLOADED: &str = "✅ Saved to";
pub const SUCCESS_OPENED: &str = "✅ Opened";

// Error Messages
pub const ERROR_UNKNOWN_MODULE: &str = "❌ Module no longer exists";
pub const ERROR_NOT_A_LINK: &str = "❌ Only links can be edited";
pub const ERROR_DOWNLOAD_FAILED: &str = "❌ Download failed";
pub const ERROR_NO_PATHS: &str = "❌ No readable files in selection";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const DIALOG_TITLE_LOGS: &str = "🔍 Logs - Press 'Esc', 'G' or 'q' to close";
pub const DRAG_HINT: &str = "j/k: move  [/]: container  Enter: drop  Esc: cancel";

// Files
/// Extensions the upload dialog suggests by default
pub const DEFAULT_ACCEPTED_EXTENSIONS: [&str; 7] = ["pdf", "jpg", "jpeg", "png", "gif", "doc", "docx"];

// Logging
/// Lines kept in the in-memory log buffer
pub const MAX_LOG_LINES: usize = 1000;

// Scroll-spy
/// Rows past the viewport top at which a module header becomes active
pub const SCROLL_LOOKAHEAD_DEFAULT: usize = 3;
pub const SCROLL_LOOKAHEAD_MAX: usize = 50;

// UI Layout Constants
/// Minimum sidebar width in columns
pub const SIDEBAR_MIN_WIDTH: u16 = 15;
/// Maximum sidebar width in columns
pub const SIDEBAR_MAX_WIDTH: u16 = 50;
/// Default sidebar width in columns
pub const SIDEBAR_DEFAULT_WIDTH: u16 = 30;
/// Minimum main area width to preserve usability
pub const MAIN_AREA_MIN_WIDTH: u16 = 20;
