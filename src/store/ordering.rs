//! Splice and renumber helpers behind drag-and-drop reordering.
//!
//! Storage is one flat `Vec` per entity type, so every operation works on a
//! partition-scoped view of ids first and is then mapped back onto the flat
//! collection by identity.

use crate::entities::{ItemId, Module, Resource};

/// Anything that carries an id and a partition-local position.
pub trait Positioned {
    fn id(&self) -> ItemId;
    fn position(&self) -> usize;
    fn set_position(&mut self, position: usize);
}

impl Positioned for Module {
    fn id(&self) -> ItemId {
        self.id
    }

    fn position(&self) -> usize {
        self.position
    }

    fn set_position(&mut self, position: usize) {
        self.position = position;
    }
}

impl Positioned for Resource {
    fn id(&self) -> ItemId {
        self.id
    }

    fn position(&self) -> usize {
        self.position
    }

    fn set_position(&mut self, position: usize) {
        self.position = position;
    }
}

/// Ids of the items accepted by `in_partition`, ordered by position.
///
/// Ties (which only exist transiently) keep storage order because the sort is stable.
pub fn ordered_ids<T, F>(items: &[T], in_partition: F) -> Vec<ItemId>
where
    T: Positioned,
    F: Fn(&T) -> bool,
{
    let mut view: Vec<&T> = items.iter().filter(|item| in_partition(item)).collect();
    view.sort_by_key(|item| item.position());
    view.into_iter().map(Positioned::id).collect()
}

/// Remove the id at `drag` and reinsert it at `hover`.
///
/// Returns `false` without touching `ids` when the indices are equal or out of range.
pub fn move_within(ids: &mut Vec<ItemId>, drag: usize, hover: usize) -> bool {
    if drag == hover || drag >= ids.len() || hover >= ids.len() {
        return false;
    }
    let dragged = ids.remove(drag);
    ids.insert(hover, dragged);
    true
}

/// Assign `0..N-1` to the items named in `order`, following that order.
pub fn renumber<T: Positioned>(items: &mut [T], order: &[ItemId]) {
    for (position, id) in order.iter().enumerate() {
        if let Some(item) = items.iter_mut().find(|item| item.id() == *id) {
            item.set_position(position);
        }
    }
}

/// Re-derive dense positions for one partition from its current relative order.
pub fn compact<T, F>(items: &mut [T], in_partition: F)
where
    T: Positioned,
    F: Fn(&T) -> bool,
{
    let order = ordered_ids(items, in_partition);
    renumber(items, &order);
}
