//! Layout management and calculations

use crate::constants::{MAIN_AREA_MIN_WIDTH, SIDEBAR_MIN_WIDTH};
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Calculate the main layout areas (outline+course on top, status bar below)
    #[must_use]
    pub fn main_layout(area: Rect) -> Vec<Rect> {
        // Top area: all height except 1 line for status
        let top_height = area.height.saturating_sub(1);
        let top_area = Rect::new(area.x, area.y, area.width, top_height);

        // Bottom area: status bar (1 line height, full width)
        let status_area = Rect::new(area.x, area.y + top_height, area.width, 1);

        vec![top_area, status_area]
    }

    /// Outline on the left, course view on the right.
    ///
    /// The outline gets the configured width but gives way so the course view
    /// keeps at least `MAIN_AREA_MIN_WIDTH` columns.
    #[must_use]
    pub fn top_pane_layout(area: Rect, sidebar_width: u16) -> Vec<Rect> {
        let available = area.width.saturating_sub(MAIN_AREA_MIN_WIDTH);
        let outline_width = sidebar_width.min(available).max(SIDEBAR_MIN_WIDTH.min(area.width));
        let course_width = area.width.saturating_sub(outline_width);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(outline_width), Constraint::Length(course_width)])
            .split(area)
            .to_vec()
    }

    /// Calculate a centered rectangle within the given area
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Calculate a centered rectangle with percentage width and fixed line height
    #[must_use]
    pub fn centered_rect_lines(percent_x: u16, height_lines: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(height_lines),
                Constraint::Min(0),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }
}
