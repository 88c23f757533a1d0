//! Local state managers.
//!
//! Each view in the application owns exactly one of these:
//!
//! - [`list`] - ordered entries with append and remove-by-id, ids from [`ids`]
//! - [`selection`] - which single post is open
//! - [`theme`] - light or dark
//!
//! [`posts`] holds the read-only post data and the preview rule for closed posts.
//! None of these types touch the terminal; they are plain synchronous values.

pub mod ids;
pub mod list;
pub mod posts;
pub mod selection;
pub mod theme;

pub use ids::{IdGenerator, RandomIdGenerator, SequentialIdGenerator};
pub use list::{Entry, EntryList};
pub use posts::{preview_text, preview_text_with_length, Post, PostSource, PostSourceError};
pub use selection::SingleSelection;
pub use theme::Theme;
