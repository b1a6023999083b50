//! Download/open action for resources.
//!
//! Files are copied from their picked location into the download directory
//! under the display name. Links are handed to the platform opener.

use crate::entities::{Resource, ResourceKind};
use crate::store::handles::HandleRegistry;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    #[error("File reference for '{0}' is no longer available")]
    HandleReleased(String),

    #[error("Failed to save '{name}': {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to open {url}: {reason}")]
    Launch { url: String, reason: String },
}

/// Something that can open an external URL.
pub trait Launcher: Send + Sync {
    fn open(&self, url: &str) -> Result<(), String>;
}

/// Opener program and arguments for a target OS name (`std::env::consts::OS`).
///
/// Windows goes through the url.dll handler: `cmd /C start` would reparse `&` in query strings.
pub fn opener_command<'a>(os: &str, url: &'a str) -> (&'static str, Vec<&'a str>) {
    match os {
        "macos" => ("open", vec![url]),
        "windows" => ("rundll32", vec!["url.dll,FileProtocolHandler", url]),
        _ => ("xdg-open", vec![url]),
    }
}

/// Runs the platform opener and waits for it to exit.
///
/// Called from a blocking task, so waiting does not stall the event loop.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn open(&self, url: &str) -> Result<(), String> {
        let (program, args) = opener_command(std::env::consts::OS, url);

        let status = Command::new(program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| format!("{}: {}", program, e))?;

        if status.success() {
            Ok(())
        } else {
            Err(format!("{} exited with {}", program, status))
        }
    }
}

/// Work resolved from the store, ready to run off the event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadRequest {
    File { name: String, source: PathBuf },
    Link { name: String, url: String },
}

impl DownloadRequest {
    pub fn name(&self) -> &str {
        match self {
            Self::File { name, .. } | Self::Link { name, .. } => name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    Saved(PathBuf),
    Opened(String),
}

impl fmt::Display for DownloadOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Saved(path) => write!(f, "{}", path.display()),
            Self::Opened(url) => write!(f, "{}", url),
        }
    }
}

#[derive(Clone)]
pub struct Downloader {
    download_dir: PathBuf,
    launcher: Arc<dyn Launcher>,
}

impl fmt::Debug for Downloader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Downloader")
            .field("download_dir", &self.download_dir)
            .finish_non_exhaustive()
    }
}

impl Downloader {
    pub fn new(download_dir: PathBuf, launcher: Arc<dyn Launcher>) -> Self {
        Self { download_dir, launcher }
    }

    /// Downloader using the platform opener.
    pub fn system(download_dir: PathBuf) -> Self {
        Self::new(download_dir, Arc::new(SystemLauncher))
    }

    pub fn download_dir(&self) -> &Path {
        &self.download_dir
    }

    /// Resolve what a download of `resource` means right now.
    pub fn prepare(resource: &Resource, registry: &HandleRegistry) -> Result<DownloadRequest, DownloadError> {
        match resource.kind {
            ResourceKind::File => registry
                .resolve(&resource.url)
                .map(|path| DownloadRequest::File {
                    name: resource.name.clone(),
                    source: path.to_path_buf(),
                })
                .ok_or_else(|| DownloadError::HandleReleased(resource.name.clone())),
            ResourceKind::Link => Ok(DownloadRequest::Link {
                name: resource.name.clone(),
                url: resource.url.clone(),
            }),
        }
    }

    /// Blocking: copies files, runs the opener for links and waits for it.
    pub fn execute(&self, request: DownloadRequest) -> Result<DownloadOutcome, DownloadError> {
        match request {
            DownloadRequest::File { name, source } => {
                let io_err = |source| DownloadError::Io {
                    name: name.clone(),
                    source,
                };
                std::fs::create_dir_all(&self.download_dir).map_err(io_err)?;
                let destination = unique_destination(&self.download_dir, &name);
                std::fs::copy(&source, &destination).map_err(io_err)?;
                log::info!("Download: saved '{}' to {}", name, destination.display());
                Ok(DownloadOutcome::Saved(destination))
            }
            DownloadRequest::Link { name, url } => {
                self.launcher
                    .open(&url)
                    .map_err(|reason| DownloadError::Launch { url: url.clone(), reason })?;
                log::info!("Download: opened link '{}' ({})", name, url);
                Ok(DownloadOutcome::Opened(url))
            }
        }
    }

    pub fn download(&self, resource: &Resource, registry: &HandleRegistry) -> Result<DownloadOutcome, DownloadError> {
        let request = Self::prepare(resource, registry)?;
        self.execute(request)
    }
}

/// `dir/name`, or `dir/stem (n).ext` for the first `n` that does not exist yet.
pub fn unique_destination(dir: &Path, name: &str) -> PathBuf {
    let file_name = Path::new(name)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| "download".to_string());

    let candidate = dir.join(&file_name);
    if !candidate.exists() {
        return candidate;
    }

    let path = Path::new(&file_name);
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_name.clone());
    let extension = path.extension().map(|e| e.to_string_lossy().into_owned());

    (1..)
        .map(|n| match &extension {
            Some(ext) => dir.join(format!("{} ({}).{}", stem, n, ext)),
            None => dir.join(format!("{} ({})", stem, n)),
        })
        .find(|candidate| !candidate.exists())
        .unwrap_or(candidate)
}
