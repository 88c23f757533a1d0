//! Shared widget builders used by the views and overlays.

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Creates a styled main block for a view or overlay
pub fn create_dialog_block<'a>(title: &'a str, theme_color: Color) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .title_style(Style::default().fg(theme_color).add_modifier(Modifier::BOLD))
        .style(Style::default().fg(theme_color))
}

/// Creates an input field block; shows the placeholder when empty and a cursor when active
pub fn create_input_paragraph<'a>(input_buffer: &'a str, placeholder: &'a str, active: bool) -> Paragraph<'a> {
    let cursor_char = if active { "█" } else { "" };

    let content = if input_buffer.is_empty() && !active {
        Line::from(Span::styled(placeholder, Style::default().fg(Color::DarkGray)))
    } else {
        Line::from(vec![
            Span::styled(input_buffer, Style::default().fg(Color::White)),
            Span::styled(cursor_char, Style::default().fg(Color::White)),
        ])
    };

    let border_color = if active { Color::Cyan } else { Color::Gray };
    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {} ", placeholder))
        .title_style(Style::default().fg(Color::White))
        .style(Style::default().fg(border_color));

    Paragraph::new(content).block(input_block)
}

/// Instruction shortcut definition: (key, color, description)
pub type InstructionShortcut = (&'static str, Color, &'static str);

/// Creates a paragraph with color-coded instruction shortcuts
pub fn create_instructions_paragraph<'a>(instructions: &[InstructionShortcut]) -> Paragraph<'a> {
    let mut instruction_text = Vec::new();
    for (i, (key, color, desc)) in instructions.iter().enumerate() {
        if i > 0 {
            instruction_text.push(Span::styled(" • ", Style::default().fg(Color::Gray)));
        }
        instruction_text.push(Span::styled(
            *key,
            Style::default().fg(*color).add_modifier(Modifier::BOLD),
        ));
        instruction_text.push(Span::styled(*desc, Style::default().fg(Color::Gray)));
    }

    Paragraph::new(Line::from(instruction_text)).alignment(Alignment::Center)
}

/// Common instruction shortcuts used across views
pub mod shortcuts {
    use super::*;

    pub const ESC_CANCEL: InstructionShortcut = ("Esc", Color::Red, " Cancel");
    pub const ENTER_ADD: InstructionShortcut = ("Enter", Color::Green, " Add");
    pub const TAB_SWITCH: InstructionShortcut = ("Tab", Color::Cyan, " Switch view");
    pub const HELP: InstructionShortcut = ("?", Color::Yellow, " Help");
    pub const QUIT: InstructionShortcut = ("q", Color::Red, " Quit");
    pub const ADD_TODO: InstructionShortcut = ("a", Color::Green, " Add");
    pub const DELETE_TODO: InstructionShortcut = ("d", Color::Red, " Delete");
    pub const MOVE: InstructionShortcut = ("j/k", Color::Cyan, " Move");
    pub const OPEN_POST: InstructionShortcut = ("Enter", Color::Green, " Open");
    pub const CLOSE_POSTS: InstructionShortcut = ("c", Color::Magenta, " Close all");
    pub const TOGGLE_THEME: InstructionShortcut = ("Space", Color::Yellow, " Toggle theme");
}

/// Word-wrap `text` into lines of at most `width` characters.
///
/// Words longer than `width` are split. A zero width yields the text unchanged
/// on a single line.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();

        while word.len() > width {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }

        let needed = if current_len == 0 { word.len() } else { current_len + 1 + word.len() };
        if needed > width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current_len += word.len();
        current.extend(word);
    }

    if current_len > 0 || lines.is_empty() {
        lines.push(current);
    }
    lines
}
