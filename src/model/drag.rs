//! Drag session - transient state for an in-progress tab relocation
//!
//! A session exists only between a drag start over a tab and the matching
//! drop or drag end. `AppModel::drag` holds it; handlers take it out with
//! `Option::take` so it is cleared on every exit path.

use super::window::InsertAt;
use super::workspace::{PairId, WindowId};

/// Where a dragged pair would land if dropped now
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropTarget {
    pub window: WindowId,
    pub at: InsertAt,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    /// Pair being dragged
    pub dragged: PairId,
    /// Window the pair is dragged from
    pub source: WindowId,
    /// Last resolved drop target, refreshed on every drag-over
    pub hover: Option<DropTarget>,
}

impl DragSession {
    pub fn new(dragged: PairId, source: WindowId) -> Self {
        Self {
            dragged,
            source,
            hover: None,
        }
    }
}
