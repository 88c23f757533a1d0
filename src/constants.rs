//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

// Post preview rule
/// Number of characters shown for a closed post
pub const PREVIEW_LENGTH: usize = 100;
/// Marker appended to a closed post's preview
pub const PREVIEW_ELLIPSIS: &str = "...";

// Identifier format
/// Prefix of every generated entry id
pub const ID_PREFIX: &str = "_";
/// Number of base-36 digits after the prefix
pub const ID_DIGITS: usize = 9;

// Theme glyphs
/// Button shown while the light theme is active (switches to dark)
pub const THEME_BUTTON_LIGHT: &str = "🔦";
/// Button shown while the dark theme is active (switches to light)
pub const THEME_BUTTON_DARK: &str = "💡";

// View titles
pub const TITLE_THEME: &str = "Theme";
pub const TITLE_TODOS: &str = "Todos";
pub const TITLE_POSTS: &str = "Posts";
pub const TITLE_HELP: &str = "❓ Help - Press 'Esc' or '?' to close";
pub const TITLE_LOGS: &str = "🔍 Activity Log - Press 'Esc' or 'G' to close";

// Todo view text
pub const TODO_INPUT_PLACEHOLDER: &str = "New Todo";
pub const TODO_INPUT_ECHO: &str = "Input is: ";
pub const TODO_EMPTY_LIST: &str = "Nothing to do yet. Press 'a' to add a todo.";

// Posts view text
pub const POST_OPEN_HINT: &str = "[Open]";
pub const POSTS_EMPTY: &str = "No posts to show.";

// Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const LOG_TODO_ADDED: &str = "✅ Todo added";
pub const LOG_TODO_REMOVED: &str = "✅ Todo removed";
pub const LOG_TODO_REJECTED_EMPTY: &str = "⚠️ Empty todo ignored";
pub const LOG_POST_OPENED: &str = "📖 Post opened";
pub const LOG_POSTS_CLOSED: &str = "📕 All posts closed";
pub const LOG_THEME_CHANGED: &str = "🎨 Theme changed";

// Files and directories
/// Application directory name under the platform config/data directories
pub const APP_DIR_NAME: &str = "statedeck";
/// Config file looked up in the current directory
pub const LOCAL_CONFIG_FILE: &str = "statedeck.toml";
/// Log file name under the data directory
pub const LOG_FILE_NAME: &str = "statedeck.log";

/// Maximum number of in-memory log lines kept for the activity overlay
pub const LOG_BUFFER_CAPACITY: usize = 500;
