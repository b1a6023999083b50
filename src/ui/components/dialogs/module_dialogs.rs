use super::common::{create_dialog_block, create_input_paragraph, create_instructions_paragraph, shortcuts};
use crate::forms::{ModuleForm, RenameForm};
use crate::icons::IconService;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Color,
    widgets::Clear,
    Frame,
};

pub fn render_module_creation_dialog(f: &mut Frame, area: Rect, icons: &IconService, form: &ModuleForm) -> Rect {
    let title = format!("{} New Module", icons.module());
    render_single_field(f, area, &title, "Module Name", &form.name, " Create Module")
}

/// In-place rename of a module or a resource.
pub fn render_rename_dialog(f: &mut Frame, area: Rect, subject: &str, form: &RenameForm) -> Rect {
    let title = format!("Rename {}", subject);
    render_single_field(f, area, &title, "Name", &form.name, " Save")
}

fn render_single_field(
    f: &mut Frame,
    area: Rect,
    title: &str,
    field_title: &str,
    input: &crate::forms::TextInput,
    submit_label: &'static str,
) -> Rect {
    let dialog_area = LayoutManager::centered_rect_lines(65, 9, area);
    f.render_widget(Clear, dialog_area);

    let main_block = create_dialog_block(title, Color::Cyan);
    let inner_area = main_block.inner(dialog_area);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Input field (borders + content)
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Instructions
        ])
        .split(inner_area);

    let input_paragraph = create_input_paragraph(input, field_title, true);
    let instructions = create_instructions_paragraph(&[
        ("Enter", Color::Green, submit_label),
        shortcuts::SEPARATOR,
        shortcuts::ESC_CANCEL,
    ]);

    f.render_widget(main_block, dialog_area);
    f.render_widget(input_paragraph, chunks[0]);
    f.render_widget(instructions, chunks[2]);
    dialog_area
}
