//! Posts view with one expanded post at a time.
//!
//! The posts themselves are read-only; the only local state is the
//! [`SingleSelection`] of the open post plus a cursor for keyboard navigation.
//! Closed posts show a truncated preview and an "Open" hint, the open post
//! shows its full text inside a highlighted border.

use crate::constants::{LOG_POSTS_CLOSED, LOG_POST_OPENED, POSTS_EMPTY, POST_OPEN_HINT, TITLE_POSTS};
use crate::logger::Logger;
use crate::state::{preview_text_with_length, Post, SingleSelection};
use crate::ui::components::common::{create_dialog_block, wrap_text};
use crate::ui::core::{actions::Action, Component};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph},
    Frame,
};

pub struct PostsComponent {
    pub posts: Vec<Post>,
    pub selection: SingleSelection,
    pub cursor: usize,
    preview_length: usize,
    scroll_offset: usize,
    logger: Logger,
}

impl PostsComponent {
    pub fn new(posts: Vec<Post>, default_open: Option<usize>, preview_length: usize, logger: Logger) -> Self {
        Self {
            posts,
            selection: SingleSelection::new(default_open),
            cursor: 0,
            preview_length,
            scroll_offset: 0,
            logger,
        }
    }

    /// Text shown for the post at `index`, following the open/closed preview rule
    pub fn display_text(&self, index: usize) -> Option<String> {
        self.posts
            .get(index)
            .map(|post| preview_text_with_length(&post.text, self.selection.is_open(index), self.preview_length))
    }

    fn open_post(&mut self, index: usize) {
        self.selection.select(index);
        match self.posts.get(index) {
            Some(post) => self.logger.log(format!("{}: #{}", LOG_POST_OPENED, post.id)),
            None => log::debug!("Selected post index {} outside of {} posts", index, self.posts.len()),
        }
    }

    /// Lines for one post: image reference, wrapped text and the open hint when closed
    fn post_lines(&self, index: usize, width: usize) -> Vec<Line<'static>> {
        let Some(post) = self.posts.get(index) else {
            return Vec::new();
        };
        let is_open = self.selection.is_open(index);
        let text = preview_text_with_length(&post.text, is_open, self.preview_length);

        let mut lines = vec![Line::from(vec![
            Span::styled("🖼  ", Style::default().fg(Color::Magenta)),
            Span::styled(post.img.clone(), Style::default().fg(Color::DarkGray)),
        ])];
        lines.extend(wrap_text(&text, width).into_iter().map(Line::from));
        if !is_open {
            lines.push(Line::from(Span::styled(
                POST_OPEN_HINT,
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )));
        }
        lines
    }

    /// Keep the cursor post inside the visible window
    fn adjust_scroll(&mut self, heights: &[usize], available: usize) {
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
            return;
        }
        loop {
            let used: usize = heights[self.scroll_offset..=self.cursor].iter().sum();
            if used <= available || self.scroll_offset == self.cursor {
                break;
            }
            self.scroll_offset += 1;
        }
    }
}

impl Component for PostsComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => Action::NextPost,
            KeyCode::Char('k') | KeyCode::Up => Action::PreviousPost,
            KeyCode::Enter | KeyCode::Char('o') if !self.posts.is_empty() => Action::OpenPost(self.cursor),
            KeyCode::Char('c') => Action::ClosePosts,
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::NextPost => {
                if !self.posts.is_empty() {
                    self.cursor = (self.cursor + 1).min(self.posts.len() - 1);
                }
                Action::None
            }
            Action::PreviousPost => {
                self.cursor = self.cursor.saturating_sub(1);
                Action::None
            }
            Action::OpenPost(index) => {
                self.open_post(index);
                Action::None
            }
            Action::ClosePosts => {
                self.selection.clear();
                self.logger.log(LOG_POSTS_CLOSED.to_string());
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let title = format!(" {} ({}) ", TITLE_POSTS, self.posts.len());
        let block = create_dialog_block(&title, Color::White);
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        if self.posts.is_empty() {
            let empty = Paragraph::new(Span::styled(POSTS_EMPTY, Style::default().fg(Color::DarkGray)));
            f.render_widget(empty, inner);
            return;
        }

        // Each post is drawn in its own bordered box, so text gets 2 fewer columns
        let text_width = inner.width.saturating_sub(2) as usize;
        let all_lines: Vec<Vec<Line<'static>>> = (0..self.posts.len())
            .map(|index| self.post_lines(index, text_width))
            .collect();
        let heights: Vec<usize> = all_lines.iter().map(|lines| lines.len() + 2).collect();

        self.cursor = self.cursor.min(self.posts.len() - 1);
        self.adjust_scroll(&heights, inner.height as usize);

        let mut y = inner.y;
        let bottom = inner.y.saturating_add(inner.height);
        for (index, lines) in all_lines.into_iter().enumerate().skip(self.scroll_offset) {
            if y >= bottom {
                break;
            }
            let height = u16::try_from(heights[index]).unwrap_or(u16::MAX).min(bottom - y);
            let area = Rect::new(inner.x, y, inner.width, height);

            let is_open = self.selection.is_open(index);
            let is_cursor = index == self.cursor;
            let border_color = match (is_open, is_cursor) {
                (true, _) => Color::Yellow,
                (false, true) => Color::Cyan,
                (false, false) => Color::DarkGray,
            };
            let borders = if is_open || is_cursor { Borders::ALL } else { Borders::NONE };
            let padded = if borders == Borders::NONE {
                // Keep text aligned with the bordered posts
                Block::default().padding(Padding::uniform(1))
            } else {
                Block::default()
                    .borders(borders)
                    .border_type(if is_open { BorderType::Thick } else { BorderType::Rounded })
                    .border_style(Style::default().fg(border_color))
            };

            let paragraph = Paragraph::new(lines).block(padded).style(Style::default().fg(Color::White));
            f.render_widget(paragraph, area);
            y = y.saturating_add(height);
        }
    }
}
