use super::key;
use crossterm::event::KeyCode;
use ratatui::{backend::TestBackend, Terminal};
use statedeck::logger::Logger;
use statedeck::state::{Post, PostSource};
use statedeck::ui::components::PostsComponent;
use statedeck::ui::core::{Action, Component};

fn press(posts: &mut PostsComponent, code: KeyCode) -> Action {
    let action = posts.handle_key_events(key(code));
    posts.update(action)
}

fn open_indices(posts: &PostsComponent) -> Vec<usize> {
    (0..posts.posts.len()).filter(|&i| posts.selection.is_open(i)).collect()
}

#[test]
fn test_first_post_open_by_default() {
    let posts = PostsComponent::new(PostSource::sample(), Some(0), 100, Logger::new());
    assert_eq!(open_indices(&posts), vec![0]);

    let full = &posts.posts[0].text;
    assert_eq!(posts.display_text(0).as_deref(), Some(full.as_str()));

    let closed = posts.display_text(1).unwrap();
    let expected: String = posts.posts[1].text.chars().take(100).collect::<String>() + "...";
    assert_eq!(closed, expected);
}

#[test]
fn test_open_moves_selection() {
    let mut posts = PostsComponent::new(PostSource::sample(), Some(0), 100, Logger::new());

    press(&mut posts, KeyCode::Char('j'));
    press(&mut posts, KeyCode::Char('j'));
    assert_eq!(posts.cursor, 2);

    press(&mut posts, KeyCode::Enter);
    assert_eq!(open_indices(&posts), vec![2]);
    assert!(posts.display_text(0).unwrap().ends_with("..."));
}

#[test]
fn test_cursor_stays_in_bounds() {
    let mut posts = PostsComponent::new(PostSource::sample(), None, 100, Logger::new());
    press(&mut posts, KeyCode::Char('k'));
    assert_eq!(posts.cursor, 0);
    for _ in 0..10 {
        press(&mut posts, KeyCode::Down);
    }
    assert_eq!(posts.cursor, 2);
}

#[test]
fn test_close_all() {
    let mut posts = PostsComponent::new(PostSource::sample(), Some(1), 100, Logger::new());
    press(&mut posts, KeyCode::Char('c'));
    assert!(open_indices(&posts).is_empty());
}

#[test]
fn test_out_of_range_open_is_harmless() {
    let mut posts = PostsComponent::new(PostSource::sample(), Some(0), 100, Logger::new());
    posts.update(Action::OpenPost(99));
    assert!(open_indices(&posts).is_empty());
}

#[test]
fn test_empty_posts_ignore_open() {
    let mut posts = PostsComponent::new(Vec::<Post>::new(), Some(0), 100, Logger::new());
    assert_eq!(posts.handle_key_events(key(KeyCode::Enter)), Action::None);
    assert_eq!(posts.display_text(0), None);
}

#[test]
fn test_render_long_open_post_in_narrow_terminal() {
    let text = vec!["a"; 65_533].join(" ");
    let post = Post {
        id: 1,
        img: "https://example.com/long.png".to_string(),
        text,
    };
    let mut posts = PostsComponent::new(vec![post], Some(0), 100, Logger::new());

    let mut terminal = Terminal::new(TestBackend::new(5, 10)).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            posts.render(f, area);
        })
        .unwrap();

    assert_eq!(posts.cursor, 0);
    assert_eq!(open_indices(&posts), vec![0]);
}
