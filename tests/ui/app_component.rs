use super::{ctrl, key};
use crossterm::event::KeyCode;
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
use statedeck::config::{Config, StartView};
use statedeck::logger::Logger;
use statedeck::state::{PostSource, Theme};
use statedeck::ui::core::{Action, Component, EventType, OverlayType, ViewTab};
use statedeck::ui::AppComponent;

fn app() -> AppComponent {
    AppComponent::new(&Config::default(), PostSource::sample(), Logger::new())
}

fn press(app: &mut AppComponent, code: KeyCode) -> Action {
    app.handle_event(EventType::Key(key(code)))
}

fn buffer_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut text = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

fn render(app: &mut AppComponent, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            app.render(f, area);
        })
        .unwrap();
    buffer_text(terminal.backend().buffer())
}

#[test]
fn test_starts_on_configured_view() {
    assert_eq!(app().active_view(), ViewTab::Todos);

    let mut config = Config::default();
    config.ui.start_view = StartView::Posts;
    let app = AppComponent::new(&config, PostSource::sample(), Logger::new());
    assert_eq!(app.active_view(), ViewTab::Posts);
}

#[test]
fn test_tab_cycles_views() {
    let mut app = app();
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.active_view(), ViewTab::Posts);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.active_view(), ViewTab::Theme);
    press(&mut app, KeyCode::BackTab);
    assert_eq!(app.active_view(), ViewTab::Posts);
}

#[test]
fn test_number_keys_jump_to_view() {
    let mut app = app();
    press(&mut app, KeyCode::Char('1'));
    assert_eq!(app.active_view(), ViewTab::Theme);
    press(&mut app, KeyCode::Char('3'));
    assert_eq!(app.active_view(), ViewTab::Posts);
}

#[test]
fn test_quit_key() {
    let mut app = app();
    assert!(!app.should_quit());
    assert_eq!(press(&mut app, KeyCode::Char('q')), Action::Quit);
    assert!(app.should_quit());
}

#[test]
fn test_q_types_while_in_input_mode() {
    let mut app = app();
    press(&mut app, KeyCode::Char('a'));
    press(&mut app, KeyCode::Char('q'));
    assert!(!app.should_quit());
    assert_eq!(app.todos.input, "q");

    // Ctrl+C always quits
    app.handle_event(EventType::Key(ctrl('c')));
    assert!(app.should_quit());
}

#[test]
fn test_views_keep_their_own_state() {
    let mut app = app();

    press(&mut app, KeyCode::Char('a'));
    for c in "walk dog".chars() {
        press(&mut app, KeyCode::Char(c));
    }
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Esc);

    press(&mut app, KeyCode::Char('1'));
    press(&mut app, KeyCode::Char(' '));
    assert_eq!(app.theme.theme, Theme::Dark);

    press(&mut app, KeyCode::Char('3'));
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Enter);
    assert!(app.posts.selection.is_open(1));

    assert_eq!(app.todos.todos.len(), 1);
    assert_eq!(app.todos.todos.entries()[0].text, "walk dog");
}

#[test]
fn test_switching_view_leaves_input_mode() {
    let mut app = app();
    press(&mut app, KeyCode::Char('a'));
    assert!(app.todos.input_mode);

    app.dispatch(Action::SwitchView(ViewTab::Posts));
    assert!(!app.todos.input_mode);
}

#[test]
fn test_overlays_are_modal() {
    let mut app = app();
    press(&mut app, KeyCode::Char('?'));
    assert_eq!(app.overlay(), Some(OverlayType::Help));

    // Keys don't reach the view underneath
    press(&mut app, KeyCode::Char('a'));
    assert!(!app.todos.input_mode);

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.overlay(), None);

    press(&mut app, KeyCode::Char('G'));
    assert_eq!(app.overlay(), Some(OverlayType::Logs));
    press(&mut app, KeyCode::Char('G'));
    assert_eq!(app.overlay(), None);
}

#[test]
fn test_activity_is_logged() {
    let mut app = app();
    app.dispatch(Action::AddTodo("buy milk".to_string()));
    let logs = app.logger().get_logs();
    assert!(logs[0].contains("buy milk"));
}

#[test]
fn test_render_todo_view() {
    let mut app = app();
    app.dispatch(Action::AddTodo("buy milk".to_string()));

    let screen = render(&mut app, 80, 24);
    assert!(screen.contains("Input is:"));
    assert!(screen.contains("buy milk"));
    assert!(screen.contains("Todos (1)"));
}

#[test]
fn test_render_posts_view_shows_preview_and_open_hint() {
    let mut app = app();
    app.dispatch(Action::SwitchView(ViewTab::Posts));

    let screen = render(&mut app, 120, 40);
    assert!(screen.contains("Code splitting"));
    assert!(screen.contains("[Open]"));
}

#[test]
fn test_render_theme_view() {
    let mut app = app();
    app.dispatch(Action::SwitchView(ViewTab::Theme));

    let screen = render(&mut app, 80, 24);
    assert!(screen.contains("Current theme: light"));
}

#[test]
fn test_render_help_overlay() {
    let mut app = app();
    app.dispatch(Action::ShowOverlay(OverlayType::Help));

    let screen = render(&mut app, 100, 40);
    assert!(screen.contains("STATEDECK"));
}

#[test]
fn test_q_inside_overlay_closes_it_without_quitting() {
    let mut app = app();
    press(&mut app, KeyCode::Char('h'));
    assert_eq!(app.overlay(), Some(OverlayType::Help));

    press(&mut app, KeyCode::Char('q'));
    assert_eq!(app.overlay(), None);
    assert!(!app.should_quit());

    press(&mut app, KeyCode::Char('G'));
    app.handle_event(EventType::Key(ctrl('c')));
    assert!(app.should_quit());
}

#[test]
fn test_help_overlay_lists_overlay_keys() {
    let mut app = app();
    app.dispatch(Action::ShowOverlay(OverlayType::Help));

    let screen = render(&mut app, 160, 80);
    assert!(screen.contains("?, h"));
    assert!(screen.contains("Close the open overlay"));
    assert!(screen.contains("Quit when no overlay is open"));
}
