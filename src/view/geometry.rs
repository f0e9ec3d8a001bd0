//! Centralized geometry helpers for rendering and hit-testing
//!
//! Computes where each tab, close glyph and control button of a window's tab
//! bar sits on the page. The same layout feeds both the HTML projection and
//! pointer hit-testing, so what is drawn is what is clicked.
//!
//! All functions here are pure (no I/O, no side effects).

use crate::config::TabBarMetrics;
use crate::model::{PairId, Rect, Window};

/// Placement of one tab in a tab bar
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TabSlot {
    pub pair_id: PairId,
    /// Whole tab, including the close glyph
    pub rect: Rect,
    /// Close glyph at the right edge of the tab
    pub close_rect: Rect,
}

/// Computed layout of one window
#[derive(Debug, Clone, PartialEq)]
pub struct WindowGeometry {
    /// Full tab bar strip (tabs, controls and the empty remainder)
    pub tab_bar: Rect,
    /// Tabs in order
    pub tabs: Vec<TabSlot>,
    pub new_tab_button: Option<Rect>,
    pub split_button: Option<Rect>,
    /// Area below the tab bar where the active panel is shown
    pub content: Rect,
}

impl WindowGeometry {
    /// Lay out a window's tab bar inside its rect.
    ///
    /// Tabs are placed left to right, followed by the trailing controls.
    /// Once the tabs would push the controls past the right edge of the bar,
    /// every tab shrinks to share the width left of the controls.
    pub fn compute(window: &Window, metrics: &TabBarMetrics) -> Self {
        let rect = window.rect;
        let bar_height = metrics.height.min(rect.height).max(0.0);
        let tab_bar = Rect::new(rect.x, rect.y, rect.width, bar_height);

        let tab_width = Self::tab_width(window, metrics, rect.width);
        let close_width = metrics.close_width.min(tab_width / 2.0);

        let mut x = rect.x;
        let tabs = window
            .pairs
            .iter()
            .map(|pair| {
                let tab_rect = Rect::new(x, rect.y, tab_width, bar_height);
                let close_rect =
                    Rect::new(x + tab_width - close_width, rect.y, close_width, bar_height);
                x += tab_width;
                TabSlot {
                    pair_id: pair.id(),
                    rect: tab_rect,
                    close_rect,
                }
            })
            .collect();

        let mut control = |enabled: bool| {
            enabled.then(|| {
                let button = Rect::new(x, rect.y, metrics.control_width, bar_height);
                x += metrics.control_width;
                button
            })
        };
        let new_tab_button = control(window.controls.new_tab);
        let split_button = control(window.controls.split);

        let content = Rect::new(
            rect.x,
            rect.y + bar_height,
            rect.width,
            (rect.height - bar_height).max(0.0),
        );

        Self {
            tab_bar,
            tabs,
            new_tab_button,
            split_button,
            content,
        }
    }

    /// Width of each tab: the configured width, or less when the window is
    /// too narrow to hold every tab plus the controls
    pub fn tab_width(window: &Window, metrics: &TabBarMetrics, bar_width: f32) -> f32 {
        if window.pairs.is_empty() {
            return metrics.tab_width;
        }
        let controls = [window.controls.new_tab, window.controls.split]
            .iter()
            .filter(|&&enabled| enabled)
            .count() as f32
            * metrics.control_width;
        let fitted = (bar_width - controls).max(0.0) / window.pairs.len() as f32;
        metrics.tab_width.min(fitted)
    }

    /// Tab whose rect contains the point, if any
    pub fn tab_at(&self, x: f32, y: f32) -> Option<&TabSlot> {
        if !self.tab_bar.contains(x, y) {
            return None;
        }
        self.tabs.iter().find(|slot| slot.rect.contains(x, y))
    }

    pub fn slot(&self, pair_id: PairId) -> Option<&TabSlot> {
        self.tabs.iter().find(|slot| slot.pair_id == pair_id)
    }
}
