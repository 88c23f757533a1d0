//! Modal overlays drawn on top of the active view: help and the activity log.

use crate::constants::{TITLE_HELP, TITLE_LOGS};
use crate::logger::Logger;
use crate::ui::components::common::create_dialog_block;
use crate::ui::core::{
    actions::{Action, OverlayType},
    Component,
};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::Color,
    text::Line,
    widgets::{Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap},
    Frame,
};

const HELP_TEXT: &str = r"STATEDECK - local state exercises
=================================

VIEWS
-----
Tab / Shift+Tab   Next / previous view
1 2 3             Theme / Todos / Posts

THEME
-----
Space, Enter, t   Toggle light and dark

TODOS
-----
a, i              Start typing a new todo
Enter             Add the typed todo
Esc               Stop typing
j/k, ↓/↑          Move the highlight
d, Delete         Remove the highlighted todo

POSTS
-----
j/k, ↓/↑          Move the highlight
Enter, o          Open the highlighted post
c                 Close every post

GENERAL
-------
?, h              Show this help (? closes it)
G                 Toggle the activity log
Esc, q            Close the open overlay
q                 Quit when no overlay is open
Ctrl+C            Quit from anywhere";

pub struct OverlayComponent {
    pub overlay: Option<OverlayType>,
    pub scroll_offset: usize,
    scrollbar_state: ScrollbarState,
    logger: Logger,
}

impl OverlayComponent {
    pub fn new(logger: Logger) -> Self {
        Self {
            overlay: None,
            scroll_offset: 0,
            scrollbar_state: ScrollbarState::new(0),
            logger,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.overlay.is_some()
    }

    fn content_lines(&self, overlay: OverlayType) -> Vec<Line<'static>> {
        match overlay {
            OverlayType::Help => HELP_TEXT.lines().map(|line| Line::from(line.to_string())).collect(),
            OverlayType::Logs => {
                let logs = self.logger.get_logs();
                if logs.is_empty() {
                    vec![Line::from("No activity yet.")]
                } else {
                    logs.into_iter().map(Line::from).collect()
                }
            }
        }
    }
}

impl Component for OverlayComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let Some(overlay) = self.overlay else {
            return Action::None;
        };

        match (overlay, key.code) {
            (_, KeyCode::Esc) | (_, KeyCode::Char('q')) => Action::HideOverlay,
            (OverlayType::Help, KeyCode::Char('?')) => Action::HideOverlay,
            (OverlayType::Logs, KeyCode::Char('G')) => Action::HideOverlay,
            (_, KeyCode::Up) | (_, KeyCode::Char('k')) => Action::OverlayScrollUp,
            (_, KeyCode::Down) | (_, KeyCode::Char('j')) => Action::OverlayScrollDown,
            // Modal: nothing reaches the views underneath
            _ => Action::Render,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowOverlay(overlay) => {
                self.overlay = Some(overlay);
                self.scroll_offset = 0;
                Action::None
            }
            Action::HideOverlay => {
                self.overlay = None;
                self.scroll_offset = 0;
                Action::None
            }
            Action::OverlayScrollUp => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                Action::None
            }
            Action::OverlayScrollDown => {
                // Clamped against the content length while rendering
                self.scroll_offset = self.scroll_offset.saturating_add(1);
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let Some(overlay) = self.overlay else {
            return;
        };

        let (width, height) = LayoutManager::overlay_dimensions(rect.width, rect.height);
        let area = LayoutManager::centered_rect(width, height, rect);
        f.render_widget(Clear, area);

        let (title, color) = match overlay {
            OverlayType::Help => (TITLE_HELP, Color::Cyan),
            OverlayType::Logs => (TITLE_LOGS, Color::Yellow),
        };
        let block = create_dialog_block(title, color);
        let inner = block.inner(area);

        let lines = self.content_lines(overlay);
        let max_offset = lines.len().saturating_sub(inner.height as usize);
        self.scroll_offset = self.scroll_offset.min(max_offset);

        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll_offset as u16, 0));
        f.render_widget(paragraph, area);

        if max_offset > 0 {
            self.scrollbar_state = ScrollbarState::new(max_offset + 1).position(self.scroll_offset);
            f.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight),
                area,
                &mut self.scrollbar_state,
            );
        }
    }
}
