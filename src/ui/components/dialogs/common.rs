use crate::forms::TextInput;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Creates a styled main dialog block
pub fn create_dialog_block(title: &str, theme_color: Color) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .title_style(Style::default().fg(theme_color).add_modifier(Modifier::BOLD))
        .style(Style::default().fg(theme_color))
}

/// Creates an input field with a block cursor at the input's cursor position.
/// Unfocused fields are dimmed and show no cursor.
pub fn create_input_paragraph<'a>(input: &TextInput, field_title: &str, focused: bool) -> Paragraph<'a> {
    let value = input.value();
    let split = value
        .char_indices()
        .nth(input.cursor())
        .map(|(offset, _)| offset)
        .unwrap_or(value.len());
    let (before, after) = value.split_at(split);

    let line = if focused {
        Line::from(vec![
            Span::raw(before.to_string()),
            Span::styled("█", Style::default().fg(Color::White)),
            Span::raw(after.to_string()),
        ])
    } else {
        Line::from(value.to_string())
    };

    let border_color = if focused { Color::White } else { Color::DarkGray };
    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {} ", field_title))
        .title_style(Style::default().fg(border_color))
        .style(Style::default().fg(Color::Gray));

    Paragraph::new(line)
        .block(input_block)
        .style(Style::default().fg(Color::White))
}

/// Instruction shortcut definition: (key, color, description)
pub type InstructionShortcut = (&'static str, Color, &'static str);

/// Creates a paragraph with color-coded instruction shortcuts
pub fn create_instructions_paragraph<'a>(instructions: &[InstructionShortcut]) -> Paragraph<'a> {
    let mut instruction_text = Vec::new();
    for (key, color, desc) in instructions {
        instruction_text.push(Span::styled(
            *key,
            Style::default().fg(*color).add_modifier(Modifier::BOLD),
        ));
        instruction_text.push(Span::styled(*desc, Style::default().fg(Color::Gray)));
    }

    Paragraph::new(Line::from(instruction_text)).alignment(Alignment::Center)
}

/// Common instruction shortcuts used across dialogs
pub mod shortcuts {
    use super::*;

    pub const SEPARATOR: InstructionShortcut = (" • ", Color::Gray, "");
    pub const ESC_CANCEL: InstructionShortcut = ("Esc", Color::Red, " Cancel");
    pub const TAB_SWITCH: InstructionShortcut = ("Tab", Color::Cyan, " Next field");
    pub const JK_SELECT: InstructionShortcut = ("j/k", Color::Cyan, " Select");
}
