use crate::support::{add_link, add_module, app, left_down, module_names, mouse, press, render, screen_row_of};
use coursebuilder::ui::components::course_view_component::Row;
use coursebuilder::ui::core::{Action, Overlay, Target};
use crossterm::event::{KeyCode, MouseButton, MouseEventKind};

const WIDTH: u16 = 100;
const HEIGHT: u16 = 30;
/// A column inside the course view (the outline takes the first 30)
const COURSE_COLUMN: u16 = 60;

fn row_index(app: &coursebuilder::ui::AppComponent, wanted: Row) -> usize {
    app.course_view()
        .rows()
        .iter()
        .position(|row| *row == wanted)
        .expect("row should exist")
}

#[test]
fn test_click_outside_closes_menu() {
    let mut app = app();
    press(&mut app, KeyCode::Char('a'));
    render(&mut app, WIDTH, HEIGHT);
    assert!(matches!(app.overlay(), Overlay::AddMenu { .. }));

    left_down(&mut app, 0, 0);
    assert_eq!(app.overlay(), &Overlay::None);
}

#[test]
fn test_click_inside_menu_chooses_entry() {
    let mut app = app();
    press(&mut app, KeyCode::Char('a'));
    let terminal = render(&mut app, WIDTH, HEIGHT);

    let buffer = terminal.backend().buffer();
    let entry_row = (0..HEIGHT)
        .find(|y| {
            let line: String = (0..WIDTH).map(|x| buffer[(x, *y)].symbol()).collect();
            line.contains("Create module")
        })
        .expect("menu should be drawn");
    left_down(&mut app, WIDTH / 2, entry_row);
    assert_eq!(
        app.overlay(),
        &Overlay::Dialog(coursebuilder::ui::core::DialogType::ModuleCreation)
    );
}

#[test]
fn test_mouse_drag_reorders_modules() {
    let mut app = app();
    let a = add_module(&mut app, "A");
    let b = add_module(&mut app, "B");
    render(&mut app, WIDTH, HEIGHT);

    let a_row = screen_row_of(
        &app,
        row_index(&app, Row::Module { id: a, index: 0, expanded: true }),
        COURSE_COLUMN,
        HEIGHT,
    );
    let b_row = screen_row_of(
        &app,
        row_index(&app, Row::Module { id: b, index: 1, expanded: true }),
        COURSE_COLUMN,
        HEIGHT,
    );

    left_down(&mut app, COURSE_COLUMN, a_row);
    assert_eq!(app.course_view().selected(), Some(Target::Module(a)));
    mouse(&mut app, MouseEventKind::Drag(MouseButton::Left), COURSE_COLUMN, b_row);
    assert!(app.drag().is_some());
    mouse(&mut app, MouseEventKind::Up(MouseButton::Left), COURSE_COLUMN, b_row);

    assert!(app.drag().is_none());
    assert_eq!(module_names(&app), vec!["B", "A"]);
}

#[test]
fn test_mouse_drop_on_module_moves_resource() {
    let mut app = app();
    let m = add_module(&mut app, "M");
    let r = add_link(&mut app, "r");
    render(&mut app, WIDTH, HEIGHT);

    let r_row = screen_row_of(
        &app,
        row_index(&app, Row::Resource { id: r, container: None, index: 0 }),
        COURSE_COLUMN,
        HEIGHT,
    );
    let m_row = screen_row_of(
        &app,
        row_index(&app, Row::Module { id: m, index: 0, expanded: true }),
        COURSE_COLUMN,
        HEIGHT,
    );

    left_down(&mut app, COURSE_COLUMN, r_row);
    mouse(&mut app, MouseEventKind::Drag(MouseButton::Left), COURSE_COLUMN, m_row);
    mouse(&mut app, MouseEventKind::Up(MouseButton::Left), COURSE_COLUMN, m_row);

    assert_eq!(app.store().resource(&r).and_then(|r| r.module_id), Some(m));
}

#[test]
fn test_right_click_opens_action_menu() {
    let mut app = app();
    let m = add_module(&mut app, "M");
    render(&mut app, WIDTH, HEIGHT);

    let m_row = screen_row_of(
        &app,
        row_index(&app, Row::Module { id: m, index: 0, expanded: true }),
        COURSE_COLUMN,
        HEIGHT,
    );
    mouse(&mut app, MouseEventKind::Down(MouseButton::Right), COURSE_COLUMN, m_row);

    assert_eq!(
        app.overlay(),
        &Overlay::ActionMenu {
            target: Target::Module(m),
            selected: 0
        }
    );
}

#[test]
fn test_keyboard_grab_ignores_pointer() {
    let mut app = app();
    let a = add_module(&mut app, "A");
    let b = add_module(&mut app, "B");
    render(&mut app, WIDTH, HEIGHT);
    let b_row = screen_row_of(
        &app,
        row_index(&app, Row::Module { id: b, index: 1, expanded: true }),
        COURSE_COLUMN,
        HEIGHT,
    );

    app.dispatch(Action::StartDrag(Target::Module(a)));
    left_down(&mut app, COURSE_COLUMN, b_row);
    mouse(&mut app, MouseEventKind::Drag(MouseButton::Left), COURSE_COLUMN, b_row);
    mouse(&mut app, MouseEventKind::Up(MouseButton::Left), COURSE_COLUMN, b_row);

    assert!(app.drag().is_some(), "the keyboard grab is still active");
    assert_eq!(module_names(&app), vec!["A", "B"]);
}

#[test]
fn test_wheel_scrolls_course_view() {
    let mut app = app();
    for i in 0..20 {
        add_module(&mut app, &format!("Module {}", i));
    }
    render(&mut app, WIDTH, HEIGHT);
    press(&mut app, KeyCode::Char('g'));
    assert_eq!(app.course_view().offset(), 0);

    mouse(&mut app, MouseEventKind::ScrollDown, COURSE_COLUMN, 10);
    assert_eq!(app.course_view().offset(), 3);
    mouse(&mut app, MouseEventKind::ScrollUp, COURSE_COLUMN, 10);
    assert_eq!(app.course_view().offset(), 0);
}
