use crate::config::Config;
use crate::logger::Logger;
use crate::state::Post;
use crate::ui::components::common::{create_instructions_paragraph, shortcuts, InstructionShortcut};
use crate::ui::components::{OverlayComponent, PostsComponent, ThemeComponent, TodoComponent};
use crate::ui::core::{
    actions::{Action, OverlayType, ViewTab},
    event_handler::EventType,
    Component,
};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Tabs},
    Frame,
};

/// Root component: owns the three views, the overlay and the active tab.
///
/// Each view keeps its own local state; the app only decides which view
/// receives keys and which one is drawn.
pub struct AppComponent {
    // Views
    pub theme: ThemeComponent,
    pub todos: TodoComponent,
    pub posts: PostsComponent,
    overlay: OverlayComponent,

    active_view: ViewTab,
    logger: Logger,
    should_quit: bool,
}

impl AppComponent {
    pub fn new(config: &Config, posts: Vec<Post>, logger: Logger) -> Self {
        let theme = ThemeComponent::new(config.theme.initial, logger.clone());
        let todos = TodoComponent::new(config.todos.clone(), logger.clone());
        let posts = PostsComponent::new(
            posts,
            config.posts.default_open(),
            config.posts.preview_length,
            logger.clone(),
        );

        logger.log(format!(
            "App: Started on {} view with {} posts",
            ViewTab::from(config.ui.start_view).title(),
            posts.posts.len()
        ));

        Self {
            theme,
            todos,
            posts,
            overlay: OverlayComponent::new(logger.clone()),
            active_view: config.ui.start_view.into(),
            logger,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn active_view(&self) -> ViewTab {
        self.active_view
    }

    pub fn overlay(&self) -> Option<OverlayType> {
        self.overlay.overlay
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    fn active_component(&mut self) -> &mut dyn Component {
        match self.active_view {
            ViewTab::Theme => &mut self.theme,
            ViewTab::Todos => &mut self.todos,
            ViewTab::Posts => &mut self.posts,
        }
    }

    fn switch_view(&mut self, view: ViewTab) {
        if view == self.active_view {
            return;
        }
        self.active_component().on_blur();
        self.logger.log(format!(
            "Navigation: {} -> {}",
            self.active_view.title(),
            view.title()
        ));
        self.active_view = view;
        self.active_component().on_focus();
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Tab => Action::NextView,
            KeyCode::BackTab => Action::PreviousView,
            KeyCode::Char(c @ '1'..='3') => {
                let index = c as usize - '1' as usize;
                ViewTab::from_index(index).map(Action::SwitchView).unwrap_or(Action::None)
            }
            KeyCode::Char('?') | KeyCode::Char('h') => Action::ShowOverlay(OverlayType::Help),
            KeyCode::Char('G') => Action::ShowOverlay(OverlayType::Logs),
            _ => Action::None,
        }
    }

    /// Route a key to the overlay, the active view or the global shortcuts, in that order
    fn route_key(&mut self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }

        if self.overlay.is_visible() {
            return self.overlay.handle_key_events(key);
        }

        let view_action = self.active_component().handle_key_events(key);
        if !matches!(view_action, Action::None) {
            return view_action;
        }

        self.handle_global_key(key)
    }

    /// Handle app-level actions left over after the components had their turn
    pub fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::Quit => {
                self.logger.log("App: Quit requested".to_string());
                self.should_quit = true;
                Action::Quit
            }
            Action::SwitchView(view) => {
                self.switch_view(view);
                Action::None
            }
            Action::NextView => {
                self.switch_view(self.active_view.next());
                Action::None
            }
            Action::PreviousView => {
                self.switch_view(self.active_view.previous());
                Action::None
            }
            other => other,
        }
    }

    /// Process an event through the component hierarchy
    pub fn handle_event(&mut self, event_type: EventType) -> Action {
        let action = match event_type {
            EventType::Key(key) => self.route_key(key),
            EventType::Resize(_, _) | EventType::Render => Action::Render,
            EventType::Tick | EventType::Other => Action::None,
        };
        self.dispatch(action)
    }

    /// Run an action through the overlay, the active view and the app itself
    pub fn dispatch(&mut self, action: Action) -> Action {
        if matches!(action, Action::None) {
            return action;
        }
        log::debug!("Dispatching {:?} on {:?}", action, self.active_view);

        let action = self.overlay.update(action);
        let action = self.active_component().update(action);
        self.handle_app_action(action)
    }

    fn render_tabs(&self, f: &mut Frame, rect: Rect) {
        let titles: Vec<Line> = ViewTab::ALL
            .iter()
            .enumerate()
            .map(|(i, view)| Line::from(format!(" {} {} ", i + 1, view.title())))
            .collect();

        let tabs = Tabs::new(titles)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(" statedeck "),
            )
            .select(self.active_view.index())
            .style(Style::default().fg(Color::Gray))
            .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));

        f.render_widget(tabs, rect);
    }

    fn status_shortcuts(&self) -> Vec<InstructionShortcut> {
        match self.active_view {
            ViewTab::Theme => vec![shortcuts::TOGGLE_THEME, shortcuts::TAB_SWITCH, shortcuts::HELP, shortcuts::QUIT],
            ViewTab::Todos if self.todos.input_mode => {
                vec![shortcuts::ENTER_ADD, shortcuts::ESC_CANCEL]
            }
            ViewTab::Todos => vec![
                shortcuts::ADD_TODO,
                shortcuts::DELETE_TODO,
                shortcuts::MOVE,
                shortcuts::TAB_SWITCH,
                shortcuts::HELP,
                shortcuts::QUIT,
            ],
            ViewTab::Posts => vec![
                shortcuts::OPEN_POST,
                shortcuts::CLOSE_POSTS,
                shortcuts::MOVE,
                shortcuts::TAB_SWITCH,
                shortcuts::HELP,
                shortcuts::QUIT,
            ],
        }
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.route_key(key)
    }

    fn update(&mut self, action: Action) -> Action {
        self.dispatch(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let areas = LayoutManager::main_layout(rect);

        self.render_tabs(f, areas.tabs);
        self.active_component().render(f, areas.body);
        f.render_widget(create_instructions_paragraph(&self.status_shortcuts()), areas.status);

        // Render overlay on top if visible
        if self.overlay.is_visible() {
            self.overlay.render(f, rect);
        }
    }
}
