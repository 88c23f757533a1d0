use statedeck::constants::PREVIEW_LENGTH;
use statedeck::state::{preview_text, preview_text_with_length, PostSource, PostSourceError};
use std::path::Path;

#[test]
fn test_closed_post_shows_first_hundred_chars_and_marker() {
    let text: String = ('a'..='z').cycle().take(250).collect();

    let closed = preview_text(&text, false);
    assert_eq!(closed, format!("{}...", &text[..100]));

    let open = preview_text(&text, true);
    assert_eq!(open, text);
    assert_eq!(open.chars().count(), 250);
}

#[test]
fn test_default_preview_length_is_one_hundred() {
    assert_eq!(PREVIEW_LENGTH, 100);
}

#[test]
fn test_custom_preview_length() {
    assert_eq!(preview_text_with_length("abcdef", false, 3), "abc...");
    assert_eq!(preview_text_with_length("abcdef", true, 3), "abcdef");
}

#[test]
fn test_load_without_file_returns_samples() {
    let posts = PostSource::load(None).unwrap();
    assert_eq!(posts, PostSource::sample());
    assert_eq!(posts.iter().map(|p| p.id).collect::<Vec<_>>(), vec![0, 1, 2]);
    assert!(posts[2].text.chars().count() > PREVIEW_LENGTH);
}

#[test]
fn test_parse_posts_json() {
    let json = r#"[
        {"id": 7, "img": "https://example.com/a.png", "text": "first"},
        {"id": 3, "img": "https://example.com/b.png", "text": "second"}
    ]"#;
    let posts = PostSource::parse(json).unwrap();
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].id, 7);
    assert_eq!(posts[1].text, "second");
}

#[test]
fn test_parse_rejects_duplicate_ids() {
    let json = r#"[
        {"id": 1, "img": "", "text": "a"},
        {"id": 1, "img": "", "text": "b"}
    ]"#;
    assert!(matches!(PostSource::parse(json), Err(PostSourceError::DuplicateId(1))));
}

#[test]
fn test_parse_rejects_malformed_json() {
    assert!(matches!(PostSource::parse("{not json"), Err(PostSourceError::Parse { .. })));
}

#[test]
fn test_load_missing_file_is_io_error() {
    let result = PostSource::load(Some(Path::new("/definitely/not/here/posts.json")));
    assert!(matches!(result, Err(PostSourceError::Io { .. })));
}

#[test]
fn test_load_from_file() {
    let dir = std::env::temp_dir().join("statedeck_test_posts");
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("posts.json");
    std::fs::write(&path, r#"[{"id": 1, "img": "x.png", "text": "hello"}]"#).unwrap();

    let posts = PostSource::load(Some(&path)).unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].img, "x.png");

    let _ = std::fs::remove_dir_all(&dir);
}
