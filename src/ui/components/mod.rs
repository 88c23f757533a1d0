//! Reusable UI components

pub mod common;

// Views
pub mod posts_component;
pub mod theme_component;
pub mod todo_component;

// Overlays
pub mod overlay_component;

// Component exports
pub use overlay_component::OverlayComponent;
pub use posts_component::PostsComponent;
pub use theme_component::ThemeComponent;
pub use todo_component::TodoComponent;
