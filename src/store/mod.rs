//! Central in-memory state container for the course.
//!
//! `CourseStore` owns every module and resource plus the transient file
//! references. Views borrow it; all mutations go through the typed operations
//! below and complete before the next frame is drawn.
//!
//! Positions are kept dense (`0..N-1`) per partition after every operation:
//! modules form one partition, resources are partitioned by `module_id`.

pub mod filter;
pub mod handles;
pub mod ordering;

use crate::entities::{ItemId, Module, Resource};
use handles::HandleRegistry;
use ordering::{compact, move_within, ordered_ids, renumber};
use std::path::{Path, PathBuf};

pub use filter::SearchFilter;

/// Errors for mutations that would break an invariant if applied.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Module not found: {0}")]
    UnknownModule(ItemId),

    #[error("Resource {0} is not a link")]
    NotALink(ItemId),
}

/// Name and URL of a link, already trimmed and non-blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkDraft {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Default)]
pub struct CourseStore {
    modules: Vec<Module>,
    resources: Vec<Resource>,
    handles: HandleRegistry,
}

impl CourseStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ---- Views ----

    /// All modules in display order.
    pub fn modules(&self) -> Vec<&Module> {
        let mut view: Vec<&Module> = self.modules.iter().collect();
        view.sort_by_key(|m| m.position);
        view
    }

    pub fn module(&self, id: &ItemId) -> Option<&Module> {
        self.modules.iter().find(|m| m.id == *id)
    }

    pub fn resource(&self, id: &ItemId) -> Option<&Resource> {
        self.resources.iter().find(|r| r.id == *id)
    }

    /// Resources of one partition (`None` = unassigned) in display order.
    pub fn resources_in(&self, partition: Option<ItemId>) -> Vec<&Resource> {
        let mut view: Vec<&Resource> = self.resources.iter().filter(|r| r.module_id == partition).collect();
        view.sort_by_key(|r| r.position);
        view
    }

    pub fn all_resources(&self) -> &[Resource] {
        &self.resources
    }

    pub fn module_count(&self) -> usize {
        self.modules.len()
    }

    pub fn resource_count(&self) -> usize {
        self.resources.len()
    }

    pub fn module_item_count(&self, id: &ItemId) -> usize {
        self.resources.iter().filter(|r| r.module_id == Some(*id)).count()
    }

    /// Whether there is anything to show outside the empty state.
    pub fn has_content(&self) -> bool {
        !self.modules.is_empty() || self.resources.iter().any(|r| r.module_id.is_none())
    }

    pub fn handles(&self) -> &HandleRegistry {
        &self.handles
    }

    /// Resolve a file resource's transient reference to the picked path.
    pub fn resolve_file(&self, resource: &Resource) -> Option<&Path> {
        if resource.is_file() {
            self.handles.resolve(&resource.url)
        } else {
            None
        }
    }

    fn next_resource_position(&self, partition: Option<ItemId>) -> usize {
        self.resources.iter().filter(|r| r.module_id == partition).count()
    }

    // ---- Modules ----

    /// Append a module. A blank name falls back to `Module N`.
    pub fn add_module(&mut self, name: &str) -> ItemId {
        let position = self.modules.len();
        let name = match name.trim() {
            "" => Module::default_name(position + 1),
            trimmed => trimmed.to_string(),
        };
        let module = Module::new(name, position);
        let id = module.id;
        log::info!("Store: added module '{}' at position {}", module.name, position);
        self.modules.push(module);
        id
    }

    pub fn rename_module(&mut self, id: &ItemId, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        match self.modules.iter_mut().find(|m| m.id == *id) {
            Some(module) => {
                log::info!("Store: renamed module '{}' -> '{}'", module.name, name);
                module.name = name.to_string();
                true
            }
            None => {
                log::debug!("Store: rename ignored, module {} not found", id);
                false
            }
        }
    }

    /// Remove a module. Its resources become unassigned and are appended, in
    /// their previous order, after the existing unassigned resources.
    pub fn delete_module(&mut self, id: &ItemId) -> Option<Module> {
        let index = match self.modules.iter().position(|m| m.id == *id) {
            Some(index) => index,
            None => {
                log::debug!("Store: delete ignored, module {} not found", id);
                return None;
            }
        };
        let removed = self.modules.remove(index);
        compact(&mut self.modules, |_| true);

        let orphans = ordered_ids(&self.resources, |r: &Resource| r.module_id == Some(removed.id));
        let base = self.next_resource_position(None);
        for (offset, orphan_id) in orphans.iter().enumerate() {
            if let Some(resource) = self.resources.iter_mut().find(|r| r.id == *orphan_id) {
                resource.module_id = None;
                resource.position = base + offset;
            }
        }

        log::info!(
            "Store: deleted module '{}', {} resources moved to unassigned",
            removed.name,
            orphans.len()
        );
        Some(removed)
    }

    /// Drag-reorder of the module list.
    pub fn reorder_modules(&mut self, drag: usize, hover: usize) -> bool {
        let mut order = ordered_ids(&self.modules, |_| true);
        if !move_within(&mut order, drag, hover) {
            return false;
        }
        renumber(&mut self.modules, &order);
        log::debug!("Store: moved module {} -> {}", drag, hover);
        true
    }

    // ---- Resources ----

    /// One file resource per path, appended to the unassigned partition in input order.
    pub fn add_files<I>(&mut self, paths: I) -> Vec<ItemId>
    where
        I: IntoIterator<Item = PathBuf>,
    {
        let mut added = Vec::new();
        for path in paths {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            let id = uuid::Uuid::new_v4();
            let url = self.handles.issue(id, path);
            let position = self.next_resource_position(None);
            log::info!("Store: added file '{}'", name);
            self.resources.push(Resource::new_file(id, name, url, position));
            added.push(id);
        }
        added
    }

    pub fn add_link(&mut self, draft: LinkDraft) -> ItemId {
        let position = self.next_resource_position(None);
        let link = Resource::new_link(draft.name, draft.url, position);
        let id = link.id;
        log::info!("Store: added link '{}' ({})", link.name, link.url);
        self.resources.push(link);
        id
    }

    pub fn rename_resource(&mut self, id: &ItemId, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        match self.resources.iter_mut().find(|r| r.id == *id) {
            Some(resource) => {
                log::info!("Store: renamed resource '{}' -> '{}'", resource.name, name);
                resource.name = name.to_string();
                true
            }
            None => false,
        }
    }

    /// Replace name and URL of a link resource.
    pub fn edit_link(&mut self, id: &ItemId, draft: LinkDraft) -> Result<bool, StoreError> {
        let Some(resource) = self.resources.iter_mut().find(|r| r.id == *id) else {
            return Ok(false);
        };
        if !resource.is_link() {
            return Err(StoreError::NotALink(*id));
        }
        log::info!("Store: edited link '{}' -> '{}' ({})", resource.name, draft.name, draft.url);
        resource.name = draft.name;
        resource.url = draft.url;
        Ok(true)
    }

    /// Remove a resource, releasing its transient reference if it is a file.
    pub fn delete_resource(&mut self, id: &ItemId) -> Option<Resource> {
        let index = self.resources.iter().position(|r| r.id == *id)?;
        let removed = self.resources.remove(index);
        if removed.is_file() {
            self.handles.release(&removed.id);
        }
        let partition = removed.module_id;
        compact(&mut self.resources, |r: &Resource| r.module_id == partition);
        log::info!("Store: deleted resource '{}'", removed.name);
        Some(removed)
    }

    /// Reassign a resource to another container, appending it at the end there.
    pub fn move_resource(&mut self, id: &ItemId, target: Option<ItemId>) -> Result<bool, StoreError> {
        if let Some(module_id) = target {
            if self.module(&module_id).is_none() {
                return Err(StoreError::UnknownModule(module_id));
            }
        }
        let Some(source) = self.resource(id).map(|r| r.module_id) else {
            return Ok(false);
        };
        if source == target {
            return Ok(false);
        }

        let position = self.next_resource_position(target);
        if let Some(resource) = self.resources.iter_mut().find(|r| r.id == *id) {
            resource.module_id = target;
            resource.position = position;
        }
        compact(&mut self.resources, |r: &Resource| r.module_id == source);
        log::info!("Store: moved resource {} from {:?} to {:?}", id, source, target);
        Ok(true)
    }

    /// Drag-reorder inside one resource partition.
    pub fn reorder_resources(&mut self, partition: Option<ItemId>, drag: usize, hover: usize) -> bool {
        let mut order = ordered_ids(&self.resources, |r: &Resource| r.module_id == partition);
        if !move_within(&mut order, drag, hover) {
            return false;
        }
        renumber(&mut self.resources, &order);
        log::debug!("Store: moved resource {} -> {} in {:?}", drag, hover, partition);
        true
    }
}
