use crate::support::{add_link, add_module, app, press, render, type_text};
use coursebuilder::store::SearchFilter;
use coursebuilder::ui::components::course_view_component::{build_rows, Row};
use coursebuilder::ui::core::{Action, Target};
use coursebuilder::{CourseStore, LinkDraft};
use crossterm::event::KeyCode;

#[test]
fn test_rows_put_unassigned_first() {
    let mut store = CourseStore::new();
    let m = store.add_module("M");
    let r = store.add_link(LinkDraft {
        name: "loose".to_string(),
        url: "https://a".to_string(),
    });

    let rows = build_rows(&store, &SearchFilter::default(), |_| true);
    assert_eq!(
        rows,
        vec![
            Row::UnassignedHeader,
            Row::Resource {
                id: r,
                container: None,
                index: 0
            },
            Row::Spacer,
            Row::Module {
                id: m,
                index: 0,
                expanded: true
            },
            Row::EmptyModule(m),
        ]
    );
}

#[test]
fn test_collapsed_modules_hide_resources() {
    let mut store = CourseStore::new();
    let m = store.add_module("M");
    let r = store.add_link(LinkDraft {
        name: "inside".to_string(),
        url: "https://a".to_string(),
    });
    store.move_resource(&r, Some(m)).unwrap();

    let rows = build_rows(&store, &SearchFilter::default(), |_| false);
    assert_eq!(
        rows,
        vec![Row::Module {
            id: m,
            index: 0,
            expanded: false
        }]
    );
}

#[test]
fn test_search_hides_non_matching_modules() {
    let mut app = app();
    add_module(&mut app, "Biology");
    let chem = add_module(&mut app, "Chemistry");
    add_link(&mut app, "bio reading");

    press(&mut app, KeyCode::Char('/'));
    assert!(app.course_view().is_searching());
    assert!(app.status().searching);
    type_text(&mut app, "bio");

    let modules: Vec<_> = app
        .course_view()
        .rows()
        .iter()
        .filter(|row| matches!(row, Row::Module { .. }))
        .collect();
    assert_eq!(modules.len(), 1);
    assert!(!app
        .course_view()
        .rows()
        .iter()
        .any(|row| row.target() == Some(Target::Module(chem))));
    assert_eq!(app.store().module_count(), 2, "searching never touches the store");

    // Typed keys went to the search box, not to global shortcuts
    assert!(!app.should_quit());

    press(&mut app, KeyCode::Esc);
    assert!(!app.course_view().is_searching());
    assert_eq!(app.course_view().search_term(), "");
    assert!(app
        .course_view()
        .rows()
        .iter()
        .any(|row| row.target() == Some(Target::Module(chem))));
}

#[test]
fn test_space_toggles_selected_module() {
    let mut app = app();
    let m = add_module(&mut app, "M");
    assert!(app.course_view().is_expanded(&m));

    press(&mut app, KeyCode::Char(' '));
    assert!(!app.course_view().is_expanded(&m));
    assert!(!app.course_view().rows().contains(&Row::EmptyModule(m)));

    app.dispatch(Action::ToggleModule(m));
    assert!(app.course_view().is_expanded(&m));
}

#[test]
fn test_empty_state_is_rendered() {
    let mut app = app();
    let terminal = render(&mut app, 80, 24);
    let screen: String = terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect();
    assert!(screen.contains("Nothing added yet"));
    assert!(screen.contains("No modules yet"));
}

#[test]
fn test_rendered_rows_show_names() {
    let mut app = app();
    add_module(&mut app, "Genetics");
    add_link(&mut app, "Reading");

    let terminal = render(&mut app, 100, 30);
    let screen: String = terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect();
    assert!(screen.contains("Genetics"));
    assert!(screen.contains("Reading"));
    assert!(screen.contains("Unassigned"));
}
