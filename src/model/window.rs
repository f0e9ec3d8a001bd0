//! Window - an ordered set of tab/panel pairs with one active selection
//!
//! The window owns its pairs directly; the tab bar and content area are
//! rendered from this list, so tab order is exactly `pairs` order.

use super::registry::PanelType;
use super::workspace::{PairId, Rect, WindowId};

// ============================================================================
// Tab / Panel / Pair
// ============================================================================

/// The clickable, closable, draggable label of a pair
#[derive(Debug, Clone, PartialEq)]
pub struct Tab {
    pub pair_id: PairId,
    pub panel_type: PanelType,
    pub label: String,
}

/// The content container of a pair
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub pair_id: PairId,
    /// Opaque markup instantiated from the panel registry
    pub content: String,
}

/// A tab and its panel. They are created, moved and destroyed together.
#[derive(Debug, Clone, PartialEq)]
pub struct Pair {
    pub tab: Tab,
    pub panel: Panel,
}

impl Pair {
    #[inline]
    pub fn id(&self) -> PairId {
        self.tab.pair_id
    }
}

/// Where an accepted pair is inserted in the tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertAt {
    /// Immediately before the given pair
    Before(PairId),
    /// After the last tab, before the trailing controls
    End,
}

/// Declarative template for the trailing control region of a tab bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabBarControls {
    /// Show the "+" button that opens the new-tab picker
    pub new_tab: bool,
    /// Show the split-window button
    pub split: bool,
}

impl Default for TabBarControls {
    fn default() -> Self {
        Self {
            new_tab: true,
            split: true,
        }
    }
}

// ============================================================================
// Window
// ============================================================================

#[derive(Debug, Clone)]
pub struct Window {
    pub id: WindowId,
    /// Pairs in tab order
    pub pairs: Vec<Pair>,
    /// Active pair; `None` only when the window has no pairs
    pub active: Option<PairId>,
    /// Fraction of the workspace width (1.0 or 0.5)
    pub width_share: f32,
    pub controls: TabBarControls,
    /// Layout info (set by the workspace during layout computation)
    pub rect: Rect,
}

impl Window {
    /// Build an empty window from a control template
    pub fn new(id: WindowId, controls: TabBarControls) -> Self {
        Self {
            id,
            pairs: Vec::new(),
            active: None,
            width_share: 1.0,
            controls,
            rect: Rect::default(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn contains(&self, pair_id: PairId) -> bool {
        self.index_of(pair_id).is_some()
    }

    pub fn index_of(&self, pair_id: PairId) -> Option<usize> {
        self.pairs.iter().position(|p| p.id() == pair_id)
    }

    pub fn pair(&self, pair_id: PairId) -> Option<&Pair> {
        self.pairs.iter().find(|p| p.id() == pair_id)
    }

    /// Pair ids in tab order
    pub fn order(&self) -> Vec<PairId> {
        self.pairs.iter().map(Pair::id).collect()
    }

    pub fn active_pair(&self) -> Option<&Pair> {
        self.active.and_then(|id| self.pair(id))
    }

    #[inline]
    pub fn is_active(&self, pair_id: PairId) -> bool {
        self.active == Some(pair_id)
    }

    /// The first pair after `anchor` in tab order, skipping `skip`.
    /// Used to turn "insert after" into an `InsertAt`.
    pub fn pair_after(&self, anchor: PairId, skip: PairId) -> InsertAt {
        let Some(index) = self.index_of(anchor) else {
            return InsertAt::End;
        };
        self.pairs[index + 1..]
            .iter()
            .map(Pair::id)
            .find(|&id| id != skip)
            .map_or(InsertAt::End, InsertAt::Before)
    }

    /// Make a pair the active one. No-op if it is not in this window.
    pub fn activate(&mut self, pair_id: PairId) {
        if self.contains(pair_id) {
            self.active = Some(pair_id);
        }
    }

    /// Append a freshly created pair and activate it
    pub fn add_pair(&mut self, pair: Pair) {
        let id = pair.id();
        self.pairs.push(pair);
        self.active = Some(id);
    }

    /// Destroy a pair (tab and panel together).
    ///
    /// If the removed pair was active, the leftmost remaining pair becomes
    /// active; otherwise the active pair is unchanged.
    pub fn remove_pair(&mut self, pair_id: PairId) -> Option<Pair> {
        self.detach(pair_id)
    }

    /// Detach a pair for transfer to another window.
    /// Same active-pair rule as [`Window::remove_pair`].
    pub fn release_pair(&mut self, pair_id: PairId) -> Option<Pair> {
        self.detach(pair_id)
    }

    /// Take ownership of a pair from elsewhere and make it active.
    /// An anchor that is not in this window inserts at the end.
    pub fn accept_pair(&mut self, pair: Pair, at: InsertAt) {
        let index = match at {
            InsertAt::Before(anchor) => self.index_of(anchor).unwrap_or(self.pairs.len()),
            InsertAt::End => self.pairs.len(),
        };
        let id = pair.id();
        self.pairs.insert(index, pair);
        self.active = Some(id);
    }

    fn detach(&mut self, pair_id: PairId) -> Option<Pair> {
        let index = self.index_of(pair_id)?;
        let pair = self.pairs.remove(index);
        if self.active == Some(pair_id) {
            self.active = self.pairs.first().map(Pair::id);
        }
        Some(pair)
    }

    /// Panic if the active selection does not match the pair list
    #[cfg(debug_assertions)]
    pub fn assert_invariants(&self) {
        match self.active {
            Some(id) => assert!(
                self.contains(id),
                "Window {:?} has active pair {:?} that is not in its tab order",
                self.id,
                id
            ),
            None => assert!(
                self.pairs.is_empty(),
                "Window {:?} has {} pairs but none is active",
                self.id,
                self.pairs.len()
            ),
        }
        for pair in &self.pairs {
            assert_eq!(
                pair.tab.pair_id, pair.panel.pair_id,
                "Tab and panel ids diverged in window {:?}",
                self.id
            );
        }
    }
}
