//! Active-module tracking for the course view.
//!
//! Each module header is an anchor at a row of the course view. As the view
//! scrolls, the active module is the last anchor (in document order) that the
//! viewport top plus a small lookahead has reached.

use crate::constants::SCROLL_LOOKAHEAD_DEFAULT;
use crate::entities::ItemId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollSpy {
    lookahead: usize,
}

impl Default for ScrollSpy {
    fn default() -> Self {
        Self::new(SCROLL_LOOKAHEAD_DEFAULT)
    }
}

impl ScrollSpy {
    pub fn new(lookahead: usize) -> Self {
        Self { lookahead }
    }

    pub fn lookahead(&self) -> usize {
        self.lookahead
    }

    /// `anchors` are `(module id, header row)` in document order.
    pub fn active(&self, anchors: &[(ItemId, usize)], offset: usize) -> Option<ItemId> {
        let reach = offset.saturating_add(self.lookahead);
        anchors.iter().filter(|(_, row)| *row <= reach).last().map(|(id, _)| *id)
    }
}
