use crate::support::{add_link, app_with_downloads};
use coursebuilder::ui::components::status_bar::StatusMessage;
use coursebuilder::ui::core::{Action, Overlay};
use std::time::Duration;

/// Feed background results back into the app until a status message shows up.
async fn wait_for_message(app: &mut coursebuilder::ui::AppComponent) -> Option<StatusMessage> {
    for _ in 0..200 {
        tokio::time::sleep(Duration::from_millis(10)).await;
        for action in app.process_background_actions() {
            app.dispatch(action);
        }
        if app.status().message.is_some() || matches!(app.overlay(), Overlay::Dialog(_)) {
            break;
        }
    }
    app.status().message.clone()
}

#[tokio::test]
async fn test_file_download_runs_in_background() {
    let source_dir = tempfile::tempdir().unwrap();
    let download_dir = tempfile::tempdir().unwrap();
    let source = source_dir.path().join("syllabus.pdf");
    std::fs::write(&source, b"week 1: cells").unwrap();

    let mut app = app_with_downloads(download_dir.path());
    app.preload_files(vec![source]);
    let id = app.store().resources_in(None)[0].id;

    app.dispatch(Action::DownloadResource(id));
    assert_eq!(app.active_task_count(), 1);

    let message = wait_for_message(&mut app).await;
    println!("Download message: {:?}", message);
    assert!(matches!(message, Some(StatusMessage::Success(_))));

    let saved = download_dir.path().join("syllabus.pdf");
    assert_eq!(std::fs::read(saved).unwrap(), b"week 1: cells");
}

#[tokio::test]
async fn test_link_download_opens_in_background() {
    let download_dir = tempfile::tempdir().unwrap();
    let mut app = app_with_downloads(download_dir.path());
    let id = add_link(&mut app, "docs");

    app.dispatch(Action::DownloadResource(id));
    let message = wait_for_message(&mut app).await;

    match message {
        Some(StatusMessage::Success(text)) => assert!(text.contains("https://example.com/docs")),
        other => panic!("expected a success message, got {:?}", other),
    }
}

#[tokio::test]
async fn test_failed_download_shows_error_dialog() {
    let source_dir = tempfile::tempdir().unwrap();
    let download_dir = tempfile::tempdir().unwrap();
    let source = source_dir.path().join("vanishing.pdf");
    std::fs::write(&source, b"soon gone").unwrap();

    let mut app = app_with_downloads(download_dir.path());
    app.preload_files(vec![source.clone()]);
    let id = app.store().resources_in(None)[0].id;
    std::fs::remove_file(&source).unwrap();

    app.dispatch(Action::DownloadResource(id));
    wait_for_message(&mut app).await;

    assert!(
        matches!(app.overlay(), Overlay::Dialog(coursebuilder::ui::core::DialogType::Error(_))),
        "a failed copy is reported in an error dialog"
    );
}
