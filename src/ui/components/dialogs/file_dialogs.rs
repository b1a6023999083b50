use super::common::{create_dialog_block, create_input_paragraph, create_instructions_paragraph, shortcuts};
use crate::entities::ItemId;
use crate::forms::UploadForm;
use crate::icons::IconService;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Upload: one or more paths separated by `;`. The extension list is a hint only.
pub fn render_upload_dialog(
    f: &mut Frame,
    area: Rect,
    icons: &IconService,
    form: &UploadForm,
    accepted_extensions: &[String],
) -> Rect {
    let dialog_area = LayoutManager::centered_rect_lines(75, 11, area);
    f.render_widget(Clear, dialog_area);

    let title = format!("{} Upload Files", icons.file());
    let main_block = create_dialog_block(&title, Color::Green);
    let inner_area = main_block.inner(dialog_area);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Paths
            Constraint::Length(1), // Hint
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Instructions
        ])
        .split(inner_area);

    let input = create_input_paragraph(&form.paths, "Paths (separate with ;)", true);
    let hint = Paragraph::new(Line::from(Span::styled(
        format!("Suggested: {}", accepted_extensions.join(", ")),
        Style::default().fg(Color::DarkGray),
    )));
    let instructions = create_instructions_paragraph(&[
        ("Enter", Color::Green, " Add Files"),
        shortcuts::SEPARATOR,
        shortcuts::ESC_CANCEL,
    ]);

    f.render_widget(main_block, dialog_area);
    f.render_widget(input, chunks[0]);
    f.render_widget(hint, chunks[1]);
    f.render_widget(instructions, chunks[3]);
    dialog_area
}

/// Destination picker for "Move to...". `containers[0]` is the unassigned area.
pub fn render_move_dialog(
    f: &mut Frame,
    area: Rect,
    icons: &IconService,
    resource_name: &str,
    containers: &[(Option<ItemId>, String)],
    selected: usize,
    current: Option<ItemId>,
) -> Rect {
    let height = (containers.len() as u16).saturating_add(6).min(area.height);
    let dialog_area = LayoutManager::centered_rect_lines(50, height, area);
    f.render_widget(Clear, dialog_area);

    let title = format!("Move '{}' to", resource_name);
    let main_block = create_dialog_block(&title, Color::Yellow);
    let inner_area = main_block.inner(dialog_area);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner_area);

    let items: Vec<ListItem> = containers
        .iter()
        .map(|(id, name)| {
            let icon = if id.is_some() { icons.module() } else { icons.unassigned() };
            let mut spans = vec![Span::raw(format!(" {} {}", icon, name))];
            if *id == current {
                spans.push(Span::styled(" (current)", Style::default().fg(Color::DarkGray)));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .highlight_style(Style::default().fg(Color::Black).bg(Color::Yellow).add_modifier(Modifier::BOLD))
        .style(Style::default().fg(Color::White));
    let mut state = ListState::default();
    state.select(Some(selected));

    let instructions = create_instructions_paragraph(&[
        shortcuts::JK_SELECT,
        shortcuts::SEPARATOR,
        ("Enter", Color::Green, " Move"),
        shortcuts::SEPARATOR,
        shortcuts::ESC_CANCEL,
    ]);

    f.render_widget(main_block, dialog_area);
    f.render_stateful_widget(list, chunks[0], &mut state);
    f.render_widget(instructions, chunks[1]);
    dialog_area
}
