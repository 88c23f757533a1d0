//! Theme toggle view.
//!
//! Holds a single [`Theme`] value. The button shows the flashlight while the
//! light theme is on and the bulb while the dark theme is on; pressing it
//! switches to the other theme.

use crate::constants::{LOG_THEME_CHANGED, TITLE_THEME};
use crate::logger::Logger;
use crate::state::Theme;
use crate::ui::core::{actions::Action, Component};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

pub struct ThemeComponent {
    pub theme: Theme,
    logger: Logger,
}

impl ThemeComponent {
    pub fn new(initial: Theme, logger: Logger) -> Self {
        Self { theme: initial, logger }
    }
}

impl Component for ThemeComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('t') => Action::ToggleTheme,
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ToggleTheme => {
                self.theme.toggle();
                self.logger.log(format!("{}: {}", LOG_THEME_CHANGED, self.theme));
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let (fg, bg) = self.theme.palette();
        let style = Style::default().fg(fg).bg(bg);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!(" {} ", TITLE_THEME))
            .style(style);
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        let rows = Layout::vertical([Constraint::Min(0), Constraint::Length(5), Constraint::Min(0)]).split(inner);

        let lines = vec![
            Line::from(Span::styled(
                format!("[ {} ]", self.theme.button()),
                style.add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(format!("Current theme: {}", self.theme), style)),
            Line::from(""),
            Line::from(Span::styled(
                "Press Space, Enter or 't' to switch",
                style.add_modifier(Modifier::DIM),
            )),
        ];

        f.render_widget(Paragraph::new(lines).alignment(Alignment::Center).style(style), rows[1]);
    }
}
