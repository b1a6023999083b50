use crate::constants::DIALOG_TITLE_LOGS;
use crate::icons::IconService;
use crate::logger::Logger;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap},
    Frame,
};

const HELP_TEXT: &str = r"
COURSEBUILDER - Course Content Organizer
========================================

NAVIGATION
----------
j/k         Select next/previous item
J/K         Jump to next/previous module in the outline
Ctrl+d/u    Scroll the course view half a page
PgDn/PgUp   Scroll the course view a page
g/End       Jump to top/bottom
Space       Expand/collapse the selected module
/           Search modules and resources (Esc clears)

ADDING CONTENT
--------------
a           Add menu (module, upload, link)
A           Create module
u           Upload files
l           Create link

ITEM ACTIONS
------------
Enter       Action menu for the selected item
r           Rename
e           Edit link
s           Download file / open link
d           Delete (with confirmation)

DRAG AND DROP
-------------
m           Pick up the selected module or resource
j/k         Move it up/down in its list
[ / ]       Choose the module to drop a resource into
Enter       Drop
Esc         Stop dragging
Mouse       Press, drag and release over a row

GENERAL
-------
i           Change icon theme
G           Show logs
?           Toggle this help
q           Quit

Press 'Esc', '?' or 'q' to close this help panel
";

pub fn render_delete_confirmation_dialog(f: &mut Frame, area: Rect, icons: &IconService, item_type: &str, name: &str) -> Rect {
    let dialog_area = LayoutManager::centered_rect_lines(50, 7, area);
    f.render_widget(Clear, dialog_area);

    let title = format!("{} Confirm Delete", icons.error());
    let mut message = format!("Delete {} '{}'?", item_type, name);
    if item_type == "module" {
        message.push_str("\nIts items move to Unassigned.");
    }
    let instructions = "Press Enter or y to confirm, Esc or n to cancel";

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .style(Style::default().fg(Color::Red));
    let inner = block.inner(dialog_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(2), Constraint::Length(1)])
        .split(inner);

    let message_paragraph = Paragraph::new(message)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    let instructions_paragraph = Paragraph::new(instructions)
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);

    f.render_widget(block, dialog_area);
    f.render_widget(message_paragraph, chunks[0]);
    f.render_widget(instructions_paragraph, chunks[1]);
    dialog_area
}

/// Error dialog: a wrapped, scrollable message.
pub fn render_message_dialog(
    f: &mut Frame,
    area: Rect,
    title: &str,
    color: Color,
    message: &str,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) -> Rect {
    let dialog_area = LayoutManager::centered_rect_lines(60, 10, area);
    f.render_widget(Clear, dialog_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .style(Style::default().fg(color));

    let content_area = Rect::new(
        dialog_area.x + 1,
        dialog_area.y + 1,
        dialog_area.width.saturating_sub(2),
        dialog_area.height.saturating_sub(4),
    );
    let instructions_area = Rect::new(
        dialog_area.x + 1,
        dialog_area.y + dialog_area.height.saturating_sub(2),
        dialog_area.width.saturating_sub(2),
        1,
    );

    let (text, total_lines, visible_height) = visible_window(message, content_area.height as usize, scroll_offset, scrollbar_state);

    let message_paragraph = Paragraph::new(text)
        .style(Style::default().fg(Color::White))
        .wrap(Wrap { trim: true });
    let instructions_paragraph = Paragraph::new("Press any key to continue • j/k to scroll if needed")
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);

    f.render_widget(block, dialog_area);
    f.render_widget(message_paragraph, content_area);
    f.render_widget(instructions_paragraph, instructions_area);
    render_dialog_scrollbar(f, content_area, total_lines, visible_height, scrollbar_state);
    dialog_area
}

pub fn render_help_dialog(f: &mut Frame, area: Rect, scroll_offset: usize, scrollbar_state: &mut ScrollbarState) -> Rect {
    render_text_panel(
        f,
        area,
        "📖 Help - Press 'Esc', '?' or 'q' to close",
        HELP_TEXT,
        scroll_offset,
        scrollbar_state,
    )
}

/// Newest lines first, straight from the in-memory log buffer.
pub fn render_logs_dialog(f: &mut Frame, area: Rect, scroll_offset: usize, scrollbar_state: &mut ScrollbarState) -> Rect {
    let logs = Logger::get_logs();
    let content = if logs.is_empty() {
        "No logs yet".to_string()
    } else {
        logs.join("\n")
    };
    render_text_panel(f, area, DIALOG_TITLE_LOGS, &content, scroll_offset, scrollbar_state)
}

fn render_text_panel(
    f: &mut Frame,
    area: Rect,
    title: &str,
    content: &str,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) -> Rect {
    let panel_area = LayoutManager::centered_rect(90, 90, area);
    f.render_widget(Clear, panel_area);

    let visible = panel_area.height.saturating_sub(2) as usize;
    let (text, total_lines, visible_height) = visible_window(content, visible, scroll_offset, scrollbar_state);

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title.to_string())
                .title_alignment(Alignment::Center),
        )
        .style(Style::default().fg(Color::White));

    f.render_widget(paragraph, panel_area);
    let bar_area = Rect {
        y: panel_area.y + 1,
        height: panel_area.height.saturating_sub(2),
        ..panel_area
    };
    render_dialog_scrollbar(f, bar_area, total_lines, visible_height, scrollbar_state);
    panel_area
}

/// Clamp the offset against the content and cut out the visible lines.
fn visible_window(
    content: &str,
    visible_height: usize,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) -> (String, usize, usize) {
    let lines: Vec<&str> = content.lines().collect();
    let total_lines = lines.len();
    let clamped_offset = scroll_offset.min(total_lines.saturating_sub(visible_height));

    *scrollbar_state = scrollbar_state
        .content_length(total_lines)
        .viewport_content_length(visible_height)
        .position(clamped_offset);

    let text = lines
        .iter()
        .skip(clamped_offset)
        .take(visible_height)
        .copied()
        .collect::<Vec<_>>()
        .join("\n");
    (text, total_lines, visible_height)
}

fn render_dialog_scrollbar(
    f: &mut Frame,
    area: Rect,
    total_lines: usize,
    visible_height: usize,
    scrollbar_state: &mut ScrollbarState,
) {
    if total_lines > visible_height {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"))
            .track_symbol(Some("│"))
            .thumb_symbol("▐")
            .style(Style::default().fg(Color::Gray))
            .thumb_style(Style::default().fg(Color::White));

        f.render_stateful_widget(scrollbar, area, scrollbar_state);
    }
}
