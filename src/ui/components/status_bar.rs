//! Status bar component

use crate::constants::DRAG_HINT;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

/// A one-line message and its tone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    Success(String),
    Error(String),
}

/// What the status line shows, most specific first.
#[derive(Debug, Clone, Default)]
pub struct StatusState {
    /// Description of the drag in progress
    pub drag: Option<String>,
    pub message: Option<StatusMessage>,
    pub searching: bool,
    pub pending_downloads: usize,
}

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    pub fn text(state: &StatusState) -> (String, Color) {
        if let Some(drag) = &state.drag {
            (format!("{} • {}", drag, DRAG_HINT), Color::Yellow)
        } else if let Some(message) = &state.message {
            match message {
                StatusMessage::Success(text) => (text.clone(), Color::Green),
                StatusMessage::Error(text) => (text.clone(), Color::Red),
            }
        } else if state.searching {
            ("Type to filter • Enter: keep filter • Esc: clear".to_string(), Color::Gray)
        } else if state.pending_downloads > 0 {
            (format!("⏳ {} download(s) in progress...", state.pending_downloads), Color::Yellow)
        } else {
            // Show helpful shortcuts
            (
                "a: add • Enter: actions • m: move • /: search • ?: help • q: quit".to_string(),
                Color::Gray,
            )
        }
    }

    /// Render the status bar
    pub fn render(f: &mut Frame, area: Rect, state: &StatusState) {
        let (status_text, status_color) = Self::text(state);

        let status_bar = Paragraph::new(status_text)
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));

        f.render_widget(status_bar, area);
    }
}
