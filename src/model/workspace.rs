//! Workspace - the top-level container for side-by-side windows
//!
//! The workspace owns at most [`MAX_WINDOWS`] windows, allocates their widths,
//! and resolves moves of tab/panel pairs between them.

use super::registry::{PanelRegistry, PanelType};
use super::window::{InsertAt, Pair, Panel, Tab, TabBarControls, Window};

// ============================================================================
// Identifiers
// ============================================================================

/// Unique identifier shared by a tab and its panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PairId(pub u64);

/// Unique identifier for a window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowId(pub u64);

// ============================================================================
// Layout Primitives
// ============================================================================

/// Rectangle for layout calculations
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }

    /// Horizontal midpoint, used to pick the insertion side on drop
    #[inline]
    pub fn mid_x(&self) -> f32 {
        self.x + self.width / 2.0
    }
}

/// Maximum number of side-by-side windows
pub const MAX_WINDOWS: usize = 2;

// ============================================================================
// Workspace
// ============================================================================

/// The workspace manages all windows and the pair id generator
#[derive(Debug, Clone)]
pub struct Workspace {
    /// Windows in left-to-right order
    pub windows: Vec<Window>,

    /// ID generators
    next_pair_id: u64,
    next_window_id: u64,

    /// Last rect passed to compute_layout
    pub last_layout_rect: Option<Rect>,
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new(TabBarControls::default())
    }
}

impl Workspace {
    /// Create a workspace with a single empty window at full width
    pub fn new(controls: TabBarControls) -> Self {
        let mut primary = Window::new(WindowId(1), controls);
        primary.width_share = 1.0;
        Self {
            windows: vec![primary],
            next_pair_id: 1,
            next_window_id: 2,
            last_layout_rect: None,
        }
    }

    /// Generate a new pair ID
    pub fn next_pair_id(&mut self) -> PairId {
        let id = PairId(self.next_pair_id);
        self.next_pair_id += 1;
        id
    }

    /// Generate a new window ID
    pub fn next_window_id(&mut self) -> WindowId {
        let id = WindowId(self.next_window_id);
        self.next_window_id += 1;
        id
    }

    pub fn window(&self, id: WindowId) -> Option<&Window> {
        self.windows.iter().find(|w| w.id == id)
    }

    pub fn window_mut(&mut self, id: WindowId) -> Option<&mut Window> {
        self.windows.iter_mut().find(|w| w.id == id)
    }

    /// The leftmost window; a workspace always has at least one
    pub fn primary(&self) -> &Window {
        &self.windows[0]
    }

    /// Total number of pairs across all windows
    pub fn pair_count(&self) -> usize {
        self.windows.iter().map(|w| w.len()).sum()
    }

    /// Find the window that currently owns a pair
    pub fn window_of(&self, pair_id: PairId) -> Option<WindowId> {
        self.windows
            .iter()
            .find(|w| w.contains(pair_id))
            .map(|w| w.id)
    }

    // =========================================================================
    // Pair lifecycle
    // =========================================================================

    /// Instantiate a new pair from the registry template and append it to a window.
    ///
    /// Returns the new pair's id, or `None` if the window or panel type is unknown.
    pub fn add_pair(
        &mut self,
        window_id: WindowId,
        panel_type: &PanelType,
        registry: &PanelRegistry,
    ) -> Option<PairId> {
        self.window(window_id)?;
        let content = registry.instantiate(panel_type)?;

        let pair_id = self.next_pair_id();
        let pair = Pair {
            tab: Tab {
                pair_id,
                panel_type: panel_type.clone(),
                label: registry.label(panel_type),
            },
            panel: Panel { pair_id, content },
        };

        let window = self.window_mut(window_id)?;
        window.add_pair(pair);
        Some(pair_id)
    }

    /// Close a pair. Removes its window when it was the window's last pair and
    /// the window is not the only one.
    ///
    /// Returns true if the pair existed.
    pub fn close_pair(&mut self, window_id: WindowId, pair_id: PairId) -> bool {
        let Some(window) = self.window_mut(window_id) else {
            return false;
        };
        if window.remove_pair(pair_id).is_none() {
            return false;
        }
        self.collapse_if_empty(window_id);
        true
    }

    /// Move a pair from one window to another (or within one window).
    ///
    /// All references are validated before anything is detached, so the move
    /// either happens completely or not at all. Returns true if the move was applied.
    pub fn move_pair(
        &mut self,
        source: WindowId,
        pair_id: PairId,
        target: WindowId,
        at: InsertAt,
    ) -> bool {
        let Some(source_window) = self.window(source) else {
            return false;
        };
        if !source_window.contains(pair_id) {
            return false;
        }
        let Some(target_window) = self.window(target) else {
            return false;
        };
        match at {
            InsertAt::Before(anchor) if anchor == pair_id => return false,
            InsertAt::Before(anchor) if !target_window.contains(anchor) => return false,
            _ => {}
        }

        let Some(pair) = self
            .window_mut(source)
            .and_then(|w| w.release_pair(pair_id))
        else {
            return false;
        };
        if let Some(target_window) = self.window_mut(target) {
            target_window.accept_pair(pair, at);
        }

        if source != target {
            self.collapse_if_empty(source);
        }
        true
    }

    // =========================================================================
    // Split / unsplit
    // =========================================================================

    /// Split the workspace into two side-by-side windows.
    ///
    /// The new window is built from the primary window's control template and
    /// starts with no tabs. Returns `None` when already at the window limit.
    pub fn split(&mut self) -> Option<WindowId> {
        if self.windows.len() >= MAX_WINDOWS {
            return None;
        }
        let controls = self.primary().controls.clone();
        let id = self.next_window_id();
        self.windows.push(Window::new(id, controls));
        self.rebalance();
        Some(id)
    }

    /// Remove a window, unless it is the last one
    pub fn remove_window(&mut self, window_id: WindowId) -> bool {
        if self.windows.len() <= 1 {
            return false;
        }
        let Some(index) = self.windows.iter().position(|w| w.id == window_id) else {
            return false;
        };
        self.windows.remove(index);
        self.rebalance();
        true
    }

    fn collapse_if_empty(&mut self, window_id: WindowId) {
        if self.window(window_id).is_some_and(|w| w.is_empty()) {
            self.remove_window(window_id);
        }
    }

    /// Give every window an equal share of the width (100% or 50/50)
    fn rebalance(&mut self) {
        let share = 1.0 / self.windows.len() as f32;
        for window in &mut self.windows {
            window.width_share = share;
        }
    }

    // =========================================================================
    // Layout
    // =========================================================================

    /// Compute each window's rect from its width share.
    /// Windows are laid out left-to-right and span the full height.
    pub fn compute_layout(&mut self, available: Rect) {
        self.last_layout_rect = Some(available);

        let mut offset = 0.0;
        for window in &mut self.windows {
            let width = available.width * window.width_share;
            window.rect = Rect::new(available.x + offset, available.y, width, available.height);
            offset += width;
        }
    }

    /// Find the window at a given point
    pub fn window_at_point(&self, x: f32, y: f32) -> Option<WindowId> {
        self.windows
            .iter()
            .find(|w| w.rect.contains(x, y))
            .map(|w| w.id)
    }
}

// ============================================================================
// Debug Invariant Validation
// ============================================================================

impl Workspace {
    /// Validate internal invariants in debug builds.
    ///
    /// Checks the window count bound, width shares, per-window active
    /// selection and that no pair id appears twice anywhere.
    #[cfg(debug_assertions)]
    pub fn assert_invariants(&self) {
        assert!(
            !self.windows.is_empty() && self.windows.len() <= MAX_WINDOWS,
            "workspace has {} windows",
            self.windows.len()
        );

        let expected_share = 1.0 / self.windows.len() as f32;
        let mut seen = std::collections::HashSet::new();
        for window in &self.windows {
            assert!(
                (window.width_share - expected_share).abs() < f32::EPSILON,
                "Window {:?} has width share {} (expected {})",
                window.id,
                window.width_share,
                expected_share
            );
            window.assert_invariants();
            for pair in &window.pairs {
                assert!(
                    seen.insert(pair.id()),
                    "Pair {:?} is owned by more than one window",
                    pair.id()
                );
            }
        }
    }

    /// No-op in release builds
    #[cfg(not(debug_assertions))]
    #[inline]
    pub fn assert_invariants(&self) {}
}
