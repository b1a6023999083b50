use crate::support::{add_link, add_module, app, module_names, press, type_text};
use coursebuilder::constants::{ERROR_NOT_A_LINK, ERROR_NO_PATHS};
use coursebuilder::icons::IconTheme;
use coursebuilder::ui::components::status_bar::StatusMessage;
use coursebuilder::ui::core::{Action, DialogType, Overlay, Target};
use crossterm::event::KeyCode;
use std::path::PathBuf;

#[test]
fn test_add_menu_opens_module_dialog() {
    let mut app = app();
    press(&mut app, KeyCode::Char('a'));
    assert_eq!(app.overlay(), &Overlay::AddMenu { selected: 0 });

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.overlay(), &Overlay::Dialog(DialogType::ModuleCreation));
}

#[test]
fn test_create_module_through_dialog() {
    let mut app = app();
    press(&mut app, KeyCode::Char('A'));
    type_text(&mut app, "Week 1 quizzes");
    press(&mut app, KeyCode::Enter);

    assert_eq!(module_names(&app), vec!["Week 1 quizzes"]);
    assert_eq!(app.overlay(), &Overlay::None);
    assert!(matches!(app.status().message, Some(StatusMessage::Success(_))));

    let id = app.store().modules()[0].id;
    assert_eq!(app.course_view().selected(), Some(Target::Module(id)), "new module is scrolled to");
}

#[test]
fn test_blank_module_name_is_refused() {
    let mut app = app();
    press(&mut app, KeyCode::Char('A'));
    type_text(&mut app, "   ");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.store().module_count(), 0);
    assert_eq!(app.overlay(), &Overlay::Dialog(DialogType::ModuleCreation), "dialog stays open");
}

#[test]
fn test_cancelled_dialog_discards_input() {
    let mut app = app();
    press(&mut app, KeyCode::Char('A'));
    type_text(&mut app, "Draft");
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.overlay(), &Overlay::None);

    // Reopening starts from an empty form
    press(&mut app, KeyCode::Char('A'));
    type_text(&mut app, "Final");
    press(&mut app, KeyCode::Enter);
    assert_eq!(module_names(&app), vec!["Final"]);
}

#[test]
fn test_create_link_through_dialog() {
    let mut app = app();
    press(&mut app, KeyCode::Char('l'));
    type_text(&mut app, "Docs");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.store().resource_count(), 0, "URL is still missing");

    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "https://docs.rs");
    press(&mut app, KeyCode::Enter);

    let links = app.store().resources_in(None);
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].name, "Docs");
    assert_eq!(links[0].url, "https://docs.rs");
}

#[test]
fn test_keyboard_drag_reorders_modules() {
    let mut app = app();
    add_module(&mut app, "A");
    add_module(&mut app, "B");
    add_module(&mut app, "C");

    press(&mut app, KeyCode::Char('g'));
    press(&mut app, KeyCode::Char('m'));
    assert!(app.drag().is_some(), "m picks up the selected module");
    assert!(app.status().drag.is_some());

    press(&mut app, KeyCode::Char('j'));
    assert_eq!(module_names(&app), vec!["B", "A", "C"], "hover reorders live");

    press(&mut app, KeyCode::Enter);
    assert!(app.drag().is_none());
    assert_eq!(module_names(&app), vec!["B", "A", "C"]);
}

#[test]
fn test_keyboard_drag_moves_resource_to_module() {
    let mut app = app();
    let m = add_module(&mut app, "M");
    let r = add_link(&mut app, "r");

    app.dispatch(Action::StartDrag(Target::Resource(r)));
    press(&mut app, KeyCode::Char(']'));
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.store().resource(&r).and_then(|r| r.module_id), Some(m));
    assert!(matches!(app.status().message, Some(StatusMessage::Success(_))));
}

#[test]
fn test_cancelled_drag_keeps_live_reorders() {
    let mut app = app();
    let a = add_module(&mut app, "A");
    add_module(&mut app, "B");

    app.dispatch(Action::StartDrag(Target::Module(a)));
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Esc);

    assert!(app.drag().is_none());
    assert_eq!(module_names(&app), vec!["B", "A"]);
}

#[test]
fn test_action_menu_delete_module() {
    let mut app = app();
    let m = add_module(&mut app, "Doomed");
    let r = add_link(&mut app, "kept");
    app.dispatch(Action::MoveResource { id: r, target: Some(m) });

    app.dispatch(Action::OpenActionMenu(Target::Module(m)));
    assert_eq!(
        app.overlay(),
        &Overlay::ActionMenu {
            target: Target::Module(m),
            selected: 0
        }
    );

    // Rename, Delete
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Enter);
    assert_eq!(
        app.overlay(),
        &Overlay::Dialog(DialogType::DeleteConfirmation(Target::Module(m)))
    );

    press(&mut app, KeyCode::Char('y'));
    assert_eq!(app.store().module_count(), 0);
    assert_eq!(app.store().resource(&r).and_then(|r| r.module_id), None, "resource is orphaned");
    assert_eq!(app.overlay(), &Overlay::None);
}

#[test]
fn test_move_to_dialog() {
    let mut app = app();
    add_module(&mut app, "First");
    let second = add_module(&mut app, "Second");
    let r = add_link(&mut app, "r");

    app.dispatch(Action::ShowDialog(DialogType::MoveTo { id: r }));
    // Unassigned, First, Second
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.store().resource(&r).and_then(|r| r.module_id), Some(second));
    assert_eq!(app.overlay(), &Overlay::None);
}

#[test]
fn test_rename_resource_through_dialog() {
    let mut app = app();
    let r = add_link(&mut app, "old");

    app.dispatch(Action::ShowDialog(DialogType::Rename(Target::Resource(r))));
    for _ in 0..3 {
        press(&mut app, KeyCode::Backspace);
    }
    type_text(&mut app, "new");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.store().resource(&r).map(|r| r.name.as_str()), Some("new"));
}

#[test]
fn test_link_edit_on_file_is_refused() {
    let mut app = app();
    let file = tempfile::NamedTempFile::new().unwrap();
    app.preload_files(vec![file.path().to_path_buf()]);
    let id = app.store().resources_in(None)[0].id;

    app.dispatch(Action::ShowDialog(DialogType::LinkEdit { id }));
    assert_eq!(app.overlay(), &Overlay::None);
    assert_eq!(
        app.status().message,
        Some(StatusMessage::Error(ERROR_NOT_A_LINK.to_string()))
    );
}

#[test]
fn test_upload_without_readable_files_shows_error() {
    let mut app = app();
    app.preload_files(vec![PathBuf::from("/definitely/not/here.pdf")]);

    assert_eq!(app.store().resource_count(), 0);
    assert_eq!(
        app.overlay(),
        &Overlay::Dialog(DialogType::Error(ERROR_NO_PATHS.to_string()))
    );

    // Any key dismisses the error
    press(&mut app, KeyCode::Char('x'));
    assert_eq!(app.overlay(), &Overlay::None);
}

#[test]
fn test_upload_skips_missing_paths() {
    let mut app = app();
    let file = tempfile::NamedTempFile::new().unwrap();
    app.preload_files(vec![PathBuf::from("/definitely/not/here.pdf"), file.path().to_path_buf()]);

    assert_eq!(app.store().resource_count(), 1);
    assert_eq!(app.store().handles().live_count(), 1);
}

#[test]
fn test_delete_resource_with_keys() {
    let mut app = app();
    let r = add_link(&mut app, "r");

    press(&mut app, KeyCode::Char('g'));
    assert_eq!(app.course_view().selected(), Some(Target::Resource(r)));
    press(&mut app, KeyCode::Char('d'));
    press(&mut app, KeyCode::Char('n'));
    assert_eq!(app.store().resource_count(), 1, "n cancels");

    press(&mut app, KeyCode::Char('d'));
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.store().resource_count(), 0);
    assert!(!app.store().has_content());
}

#[test]
fn test_escape_with_nothing_open_does_not_quit() {
    let mut app = app();
    press(&mut app, KeyCode::Esc);
    assert!(!app.should_quit());

    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());
}

#[test]
fn test_menu_keys_do_not_leak_to_view() {
    let mut app = app();
    press(&mut app, KeyCode::Char('a'));
    press(&mut app, KeyCode::Char('q'));
    assert_eq!(app.overlay(), &Overlay::None, "q closes the menu");
    assert!(!app.should_quit());
}

#[test]
fn test_icon_theme_cycles_everywhere() {
    let mut app = app();
    press(&mut app, KeyCode::Char('i'));
    assert_eq!(app.outline().icons.theme(), IconTheme::Unicode);
    assert_eq!(app.course_view().icons.theme(), IconTheme::Unicode);
}

#[test]
fn test_outline_tracks_modules() {
    let mut app = app();
    let a = add_module(&mut app, "A");
    add_module(&mut app, "B");
    let r = add_link(&mut app, "r");
    app.dispatch(Action::MoveResource { id: r, target: Some(a) });

    let entries = app.outline().entries();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].name, "A");
    assert_eq!(entries[0].item_count, 1);
    assert_eq!(entries[1].item_count, 0);
}

#[test]
fn test_help_and_logs_dialogs_toggle() {
    let mut app = app();
    press(&mut app, KeyCode::Char('?'));
    assert_eq!(app.overlay(), &Overlay::Dialog(DialogType::Help));
    press(&mut app, KeyCode::Char('?'));
    assert_eq!(app.overlay(), &Overlay::None);

    press(&mut app, KeyCode::Char('G'));
    assert_eq!(app.overlay(), &Overlay::Dialog(DialogType::Logs));
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.overlay(), &Overlay::None);
}
