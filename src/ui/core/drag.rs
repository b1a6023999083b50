//! Drag-and-drop over the course content.
//!
//! A drag carries a tagged payload: either a module (with its index in the
//! module list) or a resource (with its index in its partition and the
//! container it was picked up from). Hovering reorders live inside the
//! payload's own partition; dropping a resource on another container moves it.

use crate::entities::ItemId;
use crate::store::{CourseStore, StoreError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPayload {
    Module { id: ItemId, index: usize },
    Resource { id: ItemId, index: usize, origin: Option<ItemId> },
}

impl DragPayload {
    pub fn id(&self) -> ItemId {
        match self {
            Self::Module { id, .. } | Self::Resource { id, .. } => *id,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Self::Module { index, .. } | Self::Resource { index, .. } => *index,
        }
    }

    fn set_index(&mut self, new_index: usize) {
        match self {
            Self::Module { index, .. } | Self::Resource { index, .. } => *index = new_index,
        }
    }

    /// Where this payload would land if dropped without moving.
    pub fn home(&self) -> DropTarget {
        match self {
            Self::Module { .. } => DropTarget::ModuleList,
            Self::Resource { origin, .. } => DropTarget::Container(*origin),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropTarget {
    ModuleList,
    /// A module container, or `None` for the unassigned area.
    Container(Option<ItemId>),
}

/// Hover over `hover_index` of the payload's own partition.
pub fn hover(store: &mut CourseStore, payload: &mut DragPayload, hover_index: usize) -> bool {
    let moved = match *payload {
        DragPayload::Module { index, .. } => store.reorder_modules(index, hover_index),
        DragPayload::Resource { index, origin, .. } => store.reorder_resources(origin, index, hover_index),
    };
    if moved {
        payload.set_index(hover_index);
    }
    moved
}

/// Drop on `target`. Only a resource dropped on a different container changes anything.
pub fn drop(store: &mut CourseStore, payload: &DragPayload, target: DropTarget) -> Result<bool, StoreError> {
    match (payload, target) {
        (DragPayload::Resource { id, origin, .. }, DropTarget::Container(destination)) if *origin != destination => {
            store.move_resource(id, destination)
        }
        _ => Ok(false),
    }
}

/// An in-progress drag: the payload plus the container currently aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    pub payload: DragPayload,
    pub target: DropTarget,
}

impl DragSession {
    pub fn pick_module(store: &CourseStore, id: &ItemId) -> Option<Self> {
        let module = store.module(id)?;
        let payload = DragPayload::Module {
            id: module.id,
            index: module.position,
        };
        Some(Self {
            payload,
            target: payload.home(),
        })
    }

    pub fn pick_resource(store: &CourseStore, id: &ItemId) -> Option<Self> {
        let resource = store.resource(id)?;
        let payload = DragPayload::Resource {
            id: resource.id,
            index: resource.position,
            origin: resource.module_id,
        };
        Some(Self {
            payload,
            target: payload.home(),
        })
    }

    /// Keyboard hover: step the payload up or down inside its own partition.
    pub fn step(&mut self, store: &mut CourseStore, delta: isize) -> bool {
        if self.target != self.payload.home() {
            return false;
        }
        let len = match self.payload {
            DragPayload::Module { .. } => store.module_count(),
            DragPayload::Resource { origin, .. } => store.resources_in(origin).len(),
        };
        let Some(hover_index) = self.payload.index().checked_add_signed(delta) else {
            return false;
        };
        if hover_index >= len {
            return false;
        }
        hover(store, &mut self.payload, hover_index)
    }

    /// Pointer hover over a row belonging to `container` at `index` (when the row is an item).
    pub fn hover_row(&mut self, store: &mut CourseStore, container: DropTarget, index: Option<usize>) -> bool {
        if matches!(self.payload, DragPayload::Resource { .. }) {
            if let DropTarget::Container(_) = container {
                self.target = container;
            }
        }
        match (self.payload, container, index) {
            (DragPayload::Module { .. }, DropTarget::ModuleList, Some(index)) => hover(store, &mut self.payload, index),
            (DragPayload::Resource { origin, .. }, DropTarget::Container(over), Some(index)) if over == origin => {
                hover(store, &mut self.payload, index)
            }
            _ => false,
        }
    }

    /// Cycle the drop container: unassigned first, then modules in order.
    pub fn cycle_target(&mut self, store: &CourseStore, forward: bool) {
        if matches!(self.payload, DragPayload::Module { .. }) {
            return;
        }
        let containers: Vec<Option<ItemId>> = std::iter::once(None)
            .chain(store.modules().iter().map(|m| Some(m.id)))
            .collect();
        let current = match self.target {
            DropTarget::Container(container) => containers.iter().position(|c| *c == container).unwrap_or(0),
            DropTarget::ModuleList => 0,
        };
        let len = containers.len();
        let next = if forward { (current + 1) % len } else { (current + len - 1) % len };
        self.target = DropTarget::Container(containers[next]);
    }

    pub fn drop(self, store: &mut CourseStore) -> Result<bool, StoreError> {
        drop(store, &self.payload, self.target)
    }

    /// One-line description for the status bar.
    pub fn describe(&self, store: &CourseStore) -> String {
        let container_name = |container: Option<ItemId>| match container {
            Some(id) => store
                .module(&id)
                .map(|m| m.name.clone())
                .unwrap_or_else(|| "?".to_string()),
            None => crate::constants::HEADER_UNASSIGNED.to_string(),
        };
        match self.payload {
            DragPayload::Module { id, index } => {
                let name = store.module(&id).map(|m| m.name.as_str()).unwrap_or("?");
                format!("Moving module '{}' (position {})", name, index + 1)
            }
            DragPayload::Resource { id, index, origin } => {
                let name = store.resource(&id).map(|r| r.name.as_str()).unwrap_or("?");
                match self.target {
                    DropTarget::Container(target) if target != origin => {
                        format!("Moving '{}' to {}", name, container_name(target))
                    }
                    _ => format!("Moving '{}' in {} (position {})", name, container_name(origin), index + 1),
                }
            }
        }
    }
}
