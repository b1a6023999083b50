use super::common::{create_dialog_block, create_input_paragraph, create_instructions_paragraph, shortcuts};
use crate::forms::{LinkField, LinkForm};
use crate::icons::IconService;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Color,
    widgets::Clear,
    Frame,
};

/// Create and edit share one layout; only the title and submit label differ.
pub fn render_link_dialog(f: &mut Frame, area: Rect, icons: &IconService, form: &LinkForm, editing: bool) -> Rect {
    let dialog_area = LayoutManager::centered_rect_lines(70, 12, area);
    f.render_widget(Clear, dialog_area);

    let title = if editing {
        format!("{} Edit Link", icons.link())
    } else {
        format!("{} New Link", icons.link())
    };
    let main_block = create_dialog_block(&title, Color::Magenta);
    let inner_area = main_block.inner(dialog_area);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Name
            Constraint::Length(3), // URL
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Instructions
        ])
        .split(inner_area);

    let name = create_input_paragraph(&form.name, "Name", form.focus == LinkField::Name);
    let url = create_input_paragraph(&form.url, "URL", form.focus == LinkField::Url);
    let submit_label = if editing { " Save" } else { " Create Link" };
    let instructions = create_instructions_paragraph(&[
        ("Enter", Color::Green, submit_label),
        shortcuts::SEPARATOR,
        shortcuts::TAB_SWITCH,
        shortcuts::SEPARATOR,
        shortcuts::ESC_CANCEL,
    ]);

    f.render_widget(main_block, dialog_area);
    f.render_widget(name, chunks[0]);
    f.render_widget(url, chunks[1]);
    f.render_widget(instructions, chunks[3]);
    dialog_area
}
