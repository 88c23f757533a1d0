//! Todo list view.
//!
//! The view owns two pieces of local state: the [`EntryList`] of todos and the
//! text input buffer. Submitting the buffer appends a new entry and clears the
//! buffer; `d` removes the highlighted entry by id.

use crate::config::TodoConfig;
use crate::constants::{
    LOG_TODO_ADDED, LOG_TODO_REJECTED_EMPTY, LOG_TODO_REMOVED, TITLE_TODOS, TODO_EMPTY_LIST, TODO_INPUT_ECHO,
    TODO_INPUT_PLACEHOLDER,
};
use crate::logger::Logger;
use crate::state::{Entry, EntryList, IdGenerator, RandomIdGenerator};
use crate::ui::components::common::{create_dialog_block, create_input_paragraph};
use crate::ui::core::{actions::Action, Component};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};

pub struct TodoComponent<G: IdGenerator = RandomIdGenerator> {
    pub todos: EntryList<G>,
    pub input: String,
    pub input_mode: bool,
    pub selected_index: usize,
    list_state: ListState,
    config: TodoConfig,
    logger: Logger,
}

impl TodoComponent<RandomIdGenerator> {
    pub fn new(config: TodoConfig, logger: Logger) -> Self {
        Self::with_list(EntryList::new(), config, logger)
    }
}

impl<G: IdGenerator> TodoComponent<G> {
    pub fn with_list(todos: EntryList<G>, config: TodoConfig, logger: Logger) -> Self {
        Self {
            todos,
            input: String::new(),
            input_mode: false,
            selected_index: 0,
            list_state: ListState::default(),
            config,
            logger,
        }
    }

    pub fn selected_entry(&self) -> Option<&Entry> {
        self.todos.entries().get(self.selected_index)
    }

    /// Apply the input policy to a submission; `None` means the submission is dropped.
    fn prepare_text(&self, raw: String) -> Option<String> {
        let text = if self.config.trim_input {
            raw.trim().to_string()
        } else {
            raw
        };

        if text.is_empty() && !self.config.allow_empty {
            None
        } else {
            Some(text)
        }
    }

    fn add_todo(&mut self, raw: String) {
        match self.prepare_text(raw) {
            Some(text) => {
                self.logger.log(format!("{}: '{}'", LOG_TODO_ADDED, text));
                self.todos.append(text);
            }
            None => self.logger.log(LOG_TODO_REJECTED_EMPTY.to_string()),
        }
        self.input.clear();
        self.update_list_state();
    }

    fn remove_todo(&mut self, id: &str) {
        if let Some(entry) = self.todos.get(id) {
            self.logger.log(format!("{}: '{}' ({})", LOG_TODO_REMOVED, entry.text, entry.id));
        }
        self.todos.remove(id);
        self.update_list_state();
    }

    fn update_list_state(&mut self) {
        if self.todos.is_empty() {
            self.selected_index = 0;
            self.list_state.select(None);
        } else {
            if self.selected_index >= self.todos.len() {
                self.selected_index = self.todos.len().saturating_sub(1);
            }
            self.list_state.select(Some(self.selected_index));
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Enter => Action::AddTodo(self.input.clone()),
            KeyCode::Esc => Action::CancelInput,
            KeyCode::Backspace => {
                self.input.pop();
                Action::Render
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input.push(c);
                Action::Render
            }
            // Swallow everything else so global shortcuts don't fire while typing
            _ => Action::Render,
        }
    }

    fn create_todo_items(entries: &[Entry]) -> Vec<ListItem<'_>> {
        entries
            .iter()
            .map(|entry| {
                ListItem::new(Line::from(vec![
                    Span::styled("• ", Style::default().fg(Color::Cyan)),
                    Span::raw(entry.text.as_str()),
                ]))
            })
            .collect()
    }
}

impl<G: IdGenerator> Component for TodoComponent<G> {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if self.input_mode {
            return self.handle_input_key(key);
        }

        match key.code {
            KeyCode::Char('a') | KeyCode::Char('i') => Action::StartInput,
            KeyCode::Char('j') | KeyCode::Down => Action::NextTodo,
            KeyCode::Char('k') | KeyCode::Up => Action::PreviousTodo,
            KeyCode::Char('d') | KeyCode::Delete => match self.selected_entry() {
                Some(entry) => Action::RemoveTodo(entry.id.clone()),
                None => Action::None,
            },
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::StartInput => {
                self.input_mode = true;
                Action::None
            }
            Action::CancelInput => {
                self.input_mode = false;
                Action::None
            }
            Action::AddTodo(text) => {
                self.add_todo(text);
                Action::None
            }
            Action::RemoveTodo(id) => {
                self.remove_todo(&id);
                Action::None
            }
            Action::NextTodo => {
                if !self.todos.is_empty() {
                    self.selected_index = (self.selected_index + 1).min(self.todos.len() - 1);
                    self.update_list_state();
                }
                Action::None
            }
            Action::PreviousTodo => {
                self.selected_index = self.selected_index.saturating_sub(1);
                self.update_list_state();
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let block = create_dialog_block(" Todos ", Color::White);
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        let rows = Layout::vertical([Constraint::Length(3), Constraint::Length(1), Constraint::Min(0)]).split(inner);

        f.render_widget(
            create_input_paragraph(&self.input, TODO_INPUT_PLACEHOLDER, self.input_mode),
            rows[0],
        );

        let echo = Line::from(vec![
            Span::styled(TODO_INPUT_ECHO, Style::default().fg(Color::Gray)),
            Span::raw(self.input.as_str()),
        ]);
        f.render_widget(Paragraph::new(echo), rows[1]);

        if self.todos.is_empty() {
            let empty = Paragraph::new(Span::styled(TODO_EMPTY_LIST, Style::default().fg(Color::DarkGray)));
            f.render_widget(empty, rows[2]);
            return;
        }

        let title = format!(" {} ({}) ", TITLE_TODOS, self.todos.len());
        let list = List::new(Self::create_todo_items(self.todos.entries()))
            .block(create_dialog_block(&title, Color::Gray))
            .highlight_style(Style::default().bg(Color::Blue).fg(Color::White).add_modifier(Modifier::BOLD))
            .highlight_symbol("▶ ");

        f.render_stateful_widget(list, rows[2], &mut self.list_state);
    }

    fn on_blur(&mut self) {
        self.input_mode = false;
    }
}
