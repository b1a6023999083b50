use coursebuilder::download::{opener_command, unique_destination, DownloadError, DownloadOutcome, DownloadRequest, Downloader, Launcher};
use coursebuilder::{CourseStore, LinkDraft};
use std::sync::{Arc, Mutex};

/// Records opened URLs instead of spawning a browser.
#[derive(Default)]
struct RecordingLauncher {
    opened: Mutex<Vec<String>>,
    fail: bool,
}

impl Launcher for RecordingLauncher {
    fn open(&self, url: &str) -> Result<(), String> {
        if self.fail {
            return Err("no opener available".to_string());
        }
        self.opened.lock().unwrap().push(url.to_string());
        Ok(())
    }
}

#[test]
fn test_file_download_copies_under_display_name() {
    let source_dir = tempfile::tempdir().unwrap();
    let download_dir = tempfile::tempdir().unwrap();
    let source = source_dir.path().join("lecture-1.pdf");
    std::fs::write(&source, b"slides").unwrap();

    let mut store = CourseStore::new();
    let id = store.add_files(vec![source])[0];
    store.rename_resource(&id, "Slides.pdf");

    let downloader = Downloader::new(download_dir.path().to_path_buf(), Arc::new(RecordingLauncher::default()));
    let resource = store.resource(&id).unwrap();
    let outcome = downloader.download(resource, store.handles()).unwrap();

    let expected = download_dir.path().join("Slides.pdf");
    assert_eq!(outcome, DownloadOutcome::Saved(expected.clone()));
    assert_eq!(std::fs::read(expected).unwrap(), b"slides");
}

#[test]
fn test_repeated_downloads_do_not_overwrite() {
    let source_dir = tempfile::tempdir().unwrap();
    let download_dir = tempfile::tempdir().unwrap();
    let source = source_dir.path().join("notes.txt");
    std::fs::write(&source, b"v1").unwrap();

    let mut store = CourseStore::new();
    let id = store.add_files(vec![source])[0];
    let downloader = Downloader::new(download_dir.path().to_path_buf(), Arc::new(RecordingLauncher::default()));

    let resource = store.resource(&id).unwrap();
    downloader.download(resource, store.handles()).unwrap();
    let second = downloader.download(resource, store.handles()).unwrap();

    assert_eq!(second, DownloadOutcome::Saved(download_dir.path().join("notes (1).txt")));
}

#[test]
fn test_link_download_opens_url() {
    let launcher = Arc::new(RecordingLauncher::default());
    let downloader = Downloader::new(std::env::temp_dir(), launcher.clone());

    let mut store = CourseStore::new();
    let id = store.add_link(LinkDraft {
        name: "Docs".to_string(),
        url: "https://docs.rs".to_string(),
    });

    let resource = store.resource(&id).unwrap();
    let outcome = downloader.download(resource, store.handles()).unwrap();

    assert_eq!(outcome, DownloadOutcome::Opened("https://docs.rs".to_string()));
    assert_eq!(*launcher.opened.lock().unwrap(), vec!["https://docs.rs".to_string()]);
}

#[test]
fn test_launcher_failure_is_reported() {
    let launcher = Arc::new(RecordingLauncher {
        fail: true,
        ..Default::default()
    });
    let downloader = Downloader::new(std::env::temp_dir(), launcher);

    let request = DownloadRequest::Link {
        name: "Docs".to_string(),
        url: "https://docs.rs".to_string(),
    };
    let err = downloader.execute(request).unwrap_err();
    assert!(matches!(err, DownloadError::Launch { .. }));
    assert!(err.to_string().contains("no opener available"));
}

#[test]
fn test_released_file_cannot_be_prepared() {
    let mut store = CourseStore::new();
    let id = store.add_files(vec![std::path::PathBuf::from("/tmp/gone.pdf")])[0];
    let removed = store.delete_resource(&id).unwrap();

    let err = Downloader::prepare(&removed, store.handles()).unwrap_err();
    assert!(matches!(err, DownloadError::HandleReleased(ref name) if name == "gone.pdf"));
}

#[test]
fn test_missing_source_is_an_io_error() {
    let download_dir = tempfile::tempdir().unwrap();
    let downloader = Downloader::new(download_dir.path().to_path_buf(), Arc::new(RecordingLauncher::default()));

    let request = DownloadRequest::File {
        name: "ghost.pdf".to_string(),
        source: download_dir.path().join("does-not-exist.pdf"),
    };
    assert_eq!(request.name(), "ghost.pdf");
    assert!(matches!(downloader.execute(request), Err(DownloadError::Io { .. })));
}

#[test]
fn test_unique_destination_naming() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(unique_destination(dir.path(), "a.pdf"), dir.path().join("a.pdf"));

    std::fs::write(dir.path().join("a.pdf"), b"").unwrap();
    std::fs::write(dir.path().join("a (1).pdf"), b"").unwrap();
    assert_eq!(unique_destination(dir.path(), "a.pdf"), dir.path().join("a (2).pdf"));

    std::fs::write(dir.path().join("README"), b"").unwrap();
    assert_eq!(unique_destination(dir.path(), "README"), dir.path().join("README (1)"));

    // Path separators in display names never escape the directory
    assert_eq!(unique_destination(dir.path(), "../b.txt"), dir.path().join("b.txt"));
}

#[test]
fn test_opener_keeps_query_string_intact() {
    let url = "https://example.com/search?a=1&b=2";

    let (program, args) = opener_command("windows", url);
    assert_eq!(program, "rundll32");
    assert_eq!(args, vec!["url.dll,FileProtocolHandler", url]);

    assert_eq!(opener_command("macos", url), ("open", vec![url]));
    assert_eq!(opener_command("linux", url), ("xdg-open", vec![url]));
}
