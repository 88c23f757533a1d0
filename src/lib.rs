//! Statedeck - a terminal deck of local-state exercises
//!
//! This library hosts three self-contained views, each driven by its own
//! piece of local state: a theme toggle, a todo list with add/remove, and a
//! list of posts where only one post can be open at a time. The state
//! managers are plain in-memory types; the terminal UI is built with Ratatui.
//!
//! # Modules
//!
//! * [`config`] - Application configuration management
//! * [`state`] - Identifier generation, list and selection state managers
//! * [`ui`] - Terminal user interface components
//! * [`logger`] - In-memory activity log and optional file logging

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Logging utilities for debugging and activity tracking
pub mod logger;

/// Local state managers and the data they own
pub mod state;

/// Terminal user interface components and rendering
pub mod ui;

pub use state::{Entry, EntryList, Post, SingleSelection, Theme};
