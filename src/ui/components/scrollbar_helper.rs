//! Scrollbar helper shared by the outline, the course view and long dialogs.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Scrollbar state plus the layout rules for where the bar goes.
#[derive(Debug, Default)]
pub struct ScrollbarHelper {
    state: ScrollbarState,
}

impl ScrollbarHelper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record content length, position and (optionally) the viewport height.
    pub fn update_state(&mut self, total_rows: usize, position: usize, viewport_height: Option<usize>) {
        self.state = self.state.content_length(total_rows).position(position);

        if let Some(height) = viewport_height {
            self.state = self.state.viewport_content_length(height);
        }
    }

    /// A bordered area needs a bar once its rows overflow the inner height.
    pub fn needs_scrollbar(total_rows: usize, available_height: usize) -> bool {
        total_rows > available_height
    }

    /// Split a bordered `rect` into content and, if needed, a one-column bar inside the right border.
    pub fn calculate_areas(rect: Rect, total_rows: usize) -> (Rect, Option<Rect>) {
        let available_height = rect.height.saturating_sub(2) as usize;

        if !Self::needs_scrollbar(total_rows, available_height) {
            return (rect, None);
        }

        let content_area = Rect {
            width: rect.width.saturating_sub(1),
            ..rect
        };
        let scrollbar_area = Rect {
            x: rect.x + rect.width.saturating_sub(1),
            y: rect.y + 1,
            width: 1,
            height: rect.height.saturating_sub(2),
        };
        (content_area, Some(scrollbar_area))
    }

    pub fn render(&mut self, f: &mut Frame, scrollbar_area: Option<Rect>) {
        if let Some(area) = scrollbar_area {
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("↑"))
                .end_symbol(Some("↓"))
                .track_symbol(Some("│"))
                .thumb_symbol("█")
                .style(Style::default().fg(Color::DarkGray))
                .thumb_style(Style::default().fg(Color::DarkGray));

            f.render_stateful_widget(scrollbar, area, &mut self.state);
        }
    }

    pub fn state(&self) -> &ScrollbarState {
        &self.state
    }
}
