//! Runs the real opener against stub scripts placed first on PATH.
//! Kept in its own test binary because it rewrites the process environment.
#![cfg(target_os = "linux")]

use coursebuilder::download::{Launcher, SystemLauncher};
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

fn write_stub(dir: &Path, exit_code: i32) {
    let stub = dir.join("xdg-open");
    std::fs::write(&stub, format!("#!/bin/sh\nexit {}\n", exit_code)).unwrap();
    std::fs::set_permissions(&stub, std::fs::Permissions::from_mode(0o755)).unwrap();
}

#[test]
fn test_opener_exit_status_is_reported() {
    let bin_dir = tempfile::tempdir().unwrap();
    let original_path = std::env::var("PATH").unwrap_or_default();
    std::env::set_var("PATH", format!("{}:{}", bin_dir.path().display(), original_path));

    write_stub(bin_dir.path(), 3);
    let result = SystemLauncher.open("https://example.com/?a=1&b=2");
    println!("Failing opener: {:?}", result);
    match result {
        Err(reason) => assert!(reason.contains("xdg-open exited with"), "unexpected reason: {}", reason),
        Ok(()) => panic!("a failing opener must not be reported as opened"),
    }

    write_stub(bin_dir.path(), 0);
    assert_eq!(SystemLauncher.open("https://example.com"), Ok(()));

    std::env::set_var("PATH", original_path);
}
