//! Read-only posts and the preview rule applied to closed posts.

use crate::constants::{PREVIEW_ELLIPSIS, PREVIEW_LENGTH};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A post supplied by the embedding environment. Never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub img: String,
    pub text: String,
}

#[derive(Debug, Error)]
pub enum PostSourceError {
    #[error("failed to read posts file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse posts file {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("duplicate post id {0}")]
    DuplicateId(u64),
}

static SAMPLE_POSTS: Lazy<Vec<Post>> = Lazy::new(|| {
    vec![
        Post {
            id: 0,
            img: "https://tylermcginnis.com/static/084b5fe6ce2589e754a188671ba13987/ec435/code-splitting-with-react-and-react-router.jpg".to_string(),
            text: "Code splitting has gained popularity recently for its ability to allow you to split your app into separate bundles your users can progressively load. In this post we’ll take a look at not only what code splitting is and how to do it, but also how to implement it with React Router.".to_string(),
        },
        Post {
            id: 1,
            img: "https://tylermcginnis.com/static/e87fe9a59e14efa29d0fe8c1b3c47cae/ec435/javascript-inheritance-vs-composition.jpg".to_string(),
            text: "The problem with object-oriented languages is they’ve got all this implicit environment that they carry around with them. You wanted a banana but what you got was a gorilla holding the banana and the entire jungle. - Joe Armstrong.".to_string(),
        },
        Post {
            id: 2,
            img: "https://tylermcginnis.com/static/d84e034af76365f2f08d939cbb5fc646/ec435/javascript-modules-iifes-commonjs-es6-modules.jpg".to_string(),
            text: "I’ve taught JavaScript for a long time to a lot of people. Consistently the most commonly under-learned aspect of the language is the module system. There’s good reason for that. Modules in JavaScript have a strange and erratic history. In this post we’ll walk through that history and you’ll learn modules of the past to better understand how JavaScript modules work today.".to_string(),
        },
    ]
});

/// Where the posts view gets its data from.
pub struct PostSource;

impl PostSource {
    /// The built-in sample posts.
    pub fn sample() -> Vec<Post> {
        SAMPLE_POSTS.clone()
    }

    /// Load posts from a JSON array file, or the samples when `path` is `None`.
    pub fn load(path: Option<&Path>) -> Result<Vec<Post>, PostSourceError> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => Ok(Self::sample()),
        }
    }

    pub fn load_from_file(path: &Path) -> Result<Vec<Post>, PostSourceError> {
        let content = std::fs::read_to_string(path).map_err(|source| PostSourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let posts = parse_posts(&content, path)?;
        log::info!("Loaded {} posts from {}", posts.len(), path.display());
        Ok(posts)
    }

    /// Parse a JSON array of posts, rejecting duplicate ids.
    pub fn parse(json: &str) -> Result<Vec<Post>, PostSourceError> {
        parse_posts(json, Path::new("<inline>"))
    }
}

fn parse_posts(json: &str, path: &Path) -> Result<Vec<Post>, PostSourceError> {
    let posts: Vec<Post> = serde_json::from_str(json).map_err(|source| PostSourceError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let mut seen = HashSet::new();
    for post in &posts {
        if !seen.insert(post.id) {
            return Err(PostSourceError::DuplicateId(post.id));
        }
    }
    Ok(posts)
}

/// Text to display for a post: the full text when open, otherwise the first
/// `length` characters followed by `...`.
///
/// The marker is appended to closed posts even when the text is shorter than
/// `length`.
pub fn preview_text_with_length(text: &str, open: bool, length: usize) -> String {
    if open {
        return text.to_string();
    }
    let mut preview: String = text.chars().take(length).collect();
    preview.push_str(PREVIEW_ELLIPSIS);
    preview
}

pub fn preview_text(text: &str, open: bool) -> String {
    preview_text_with_length(text, open, PREVIEW_LENGTH)
}
