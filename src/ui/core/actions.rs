use crate::config::StartView;
use crate::constants::{TITLE_POSTS, TITLE_THEME, TITLE_TODOS};

/// The view currently shown in the main area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewTab {
    Theme,
    #[default]
    Todos,
    Posts,
}

impl ViewTab {
    pub const ALL: [ViewTab; 3] = [ViewTab::Theme, ViewTab::Todos, ViewTab::Posts];

    pub fn index(self) -> usize {
        match self {
            ViewTab::Theme => 0,
            ViewTab::Todos => 1,
            ViewTab::Posts => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn title(self) -> &'static str {
        match self {
            ViewTab::Theme => TITLE_THEME,
            ViewTab::Todos => TITLE_TODOS,
            ViewTab::Posts => TITLE_POSTS,
        }
    }
}

impl From<StartView> for ViewTab {
    fn from(view: StartView) -> Self {
        match view {
            StartView::Theme => ViewTab::Theme,
            StartView::Todos => ViewTab::Todos,
            StartView::Posts => ViewTab::Posts,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayType {
    Help,
    Logs,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Navigation
    SwitchView(ViewTab),
    NextView,
    PreviousView,

    // Theme view
    ToggleTheme,

    // Todo view
    StartInput,
    CancelInput,
    AddTodo(String),
    RemoveTodo(String),
    NextTodo,
    PreviousTodo,

    // Posts view
    NextPost,
    PreviousPost,
    OpenPost(usize),
    ClosePosts,

    // Overlays
    ShowOverlay(OverlayType),
    HideOverlay,
    OverlayScrollUp,
    OverlayScrollDown,

    // Key consumed by a component, nothing else to do but redraw
    Render,

    // App control
    Quit,
    None,
}
