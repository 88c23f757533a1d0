//! Core UI functionality for the Statedeck application.
//!
//! This module contains the building blocks every view is made of:
//!
//! - [`actions`] - Action definitions, view tabs and overlay kinds
//! - [`component`] - Base component trait and rendering abstractions
//! - [`event_handler`] - Terminal event polling and frame timing
//!
//! Components turn key events into [`Action`]s, the app routes each action
//! through the active view's [`Component::update`], and whatever is left is
//! handled at the app level (view switching, overlays, quitting).

pub mod actions;
pub mod component;
pub mod event_handler;

pub use actions::{Action, OverlayType, ViewTab};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
