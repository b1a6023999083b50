use crossterm::event::{KeyCode, KeyEvent};
use ratatui::widgets::ScrollbarState;

const PAGE: usize = 10;

/// Apply a scrolling key to a long dialog. Returns whether the key was a scroll key.
///
/// The offset may overshoot; renderers clamp it against the content height.
pub fn handle_scroll_key(key: KeyEvent, scroll_offset: &mut usize, scrollbar_state: &mut ScrollbarState) -> bool {
    let next = match key.code {
        KeyCode::Up | KeyCode::Char('k') => scroll_offset.saturating_sub(1),
        KeyCode::Down | KeyCode::Char('j') => scroll_offset.saturating_add(1),
        KeyCode::PageUp => scroll_offset.saturating_sub(PAGE),
        KeyCode::PageDown => scroll_offset.saturating_add(PAGE),
        KeyCode::Home => 0,
        KeyCode::End => usize::MAX,
        _ => return false,
    };
    *scroll_offset = next;
    *scrollbar_state = scrollbar_state.position(next);
    true
}
