//! Ownership map from file resources to their transient local references.
//!
//! A reference is issued when a file is picked and lives until the resource is
//! deleted. Nothing releases it implicitly; `release` is the only way out and
//! succeeds at most once per resource.

use crate::entities::ItemId;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Scheme of the references handed out to file resources.
pub const HANDLE_SCHEME: &str = "local://";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHandle {
    pub token: Uuid,
    pub path: PathBuf,
    pub url: String,
}

#[derive(Debug, Default)]
pub struct HandleRegistry {
    handles: HashMap<ItemId, FileHandle>,
    releases: usize,
}

impl HandleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a fresh reference for `path`, owned by `resource_id`.
    pub fn issue(&mut self, resource_id: ItemId, path: PathBuf) -> String {
        let token = Uuid::new_v4();
        let url = format!("{}{}", HANDLE_SCHEME, token);
        log::debug!("Handles: issued {} for {}", url, path.display());
        self.handles.insert(
            resource_id,
            FileHandle {
                token,
                path,
                url: url.clone(),
            },
        );
        url
    }

    /// Resolve a reference back to the picked file, if it is still live.
    pub fn resolve(&self, url: &str) -> Option<&Path> {
        self.handles
            .values()
            .find(|handle| handle.url == url)
            .map(|handle| handle.path.as_path())
    }

    pub fn get(&self, resource_id: &ItemId) -> Option<&FileHandle> {
        self.handles.get(resource_id)
    }

    /// Release the reference owned by `resource_id`. A second call returns `None`.
    pub fn release(&mut self, resource_id: &ItemId) -> Option<FileHandle> {
        let handle = self.handles.remove(resource_id)?;
        self.releases += 1;
        log::debug!("Handles: released {}", handle.url);
        Some(handle)
    }

    pub fn live_count(&self) -> usize {
        self.handles.len()
    }

    /// Number of successful releases since the registry was created.
    pub fn release_count(&self) -> usize {
        self.releases
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_reference_resolves_until_released() {
        let mut registry = HandleRegistry::new();
        let id = Uuid::new_v4();
        let url = registry.issue(id, PathBuf::from("/tmp/a.pdf"));

        assert!(url.starts_with(HANDLE_SCHEME));
        assert_eq!(registry.resolve(&url), Some(Path::new("/tmp/a.pdf")));

        assert!(registry.release(&id).is_some());
        assert_eq!(registry.resolve(&url), None);
        assert!(registry.release(&id).is_none());
        assert_eq!(registry.release_count(), 1);
        assert_eq!(registry.live_count(), 0);
    }
}
