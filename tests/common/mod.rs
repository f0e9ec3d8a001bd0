//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use splitdeck::config::AppConfig;
use splitdeck::messages::{LayoutMsg, Msg, PointerMsg};
use splitdeck::model::{AppModel, PairId, PanelRegistry, PanelType, WindowId};
use splitdeck::update::update;
use splitdeck::view::WindowGeometry;

/// Registry with the built-ins plus short single-letter types for layout tests
pub fn test_registry() -> PanelRegistry {
    let mut registry = PanelRegistry::with_builtins();
    for name in ["a", "b", "c", "d", "x", "y"] {
        registry.register(PanelType::from(name), format!("<p>{}</p>", name));
    }
    registry
}

/// Config with a fixed 1280x800 viewport and the given initial tabs
pub fn test_config(tabs: &[&str]) -> AppConfig {
    let mut config = AppConfig::default();
    config.viewport.width = 1280;
    config.viewport.height = 800;
    config.panels.initial_tabs = tabs.iter().map(|t| t.to_string()).collect();
    config
}

/// Single-window model holding `tabs` in order, first tab active
pub fn test_model(tabs: &[&str]) -> AppModel {
    AppModel::new(test_config(tabs), test_registry())
}

/// Two-window model: `left` in window 1 (first tab active), `right` in window 2
/// (last added tab active)
pub fn split_model(left: &[&str], right: &[&str]) -> AppModel {
    let mut model = test_model(left);
    update(&mut model, Msg::Layout(LayoutMsg::Split));
    for tab in right {
        update(
            &mut model,
            Msg::Layout(LayoutMsg::AddPair {
                window: WindowId(2),
                panel_type: PanelType::from(*tab),
            }),
        );
    }
    model
}

/// Tab labels of a window, in order
pub fn labels(model: &AppModel, window: u64) -> Vec<String> {
    model
        .workspace
        .window(WindowId(window))
        .map(|w| w.pairs.iter().map(|p| p.tab.label.clone()).collect())
        .unwrap_or_default()
}

/// Label of the active tab of a window
pub fn active_label(model: &AppModel, window: u64) -> Option<String> {
    model
        .workspace
        .window(WindowId(window))?
        .active_pair()
        .map(|p| p.tab.label.clone())
}

/// Pair id of the tab with the given label
pub fn pair_id(model: &AppModel, window: u64, label: &str) -> PairId {
    model
        .workspace
        .window(WindowId(window))
        .and_then(|w| w.pairs.iter().find(|p| p.tab.label == label))
        .map(|p| p.id())
        .unwrap_or_else(|| panic!("no tab '{}' in window {}", label, window))
}

pub fn window_ids(model: &AppModel) -> Vec<u64> {
    model.workspace.windows.iter().map(|w| w.id.0).collect()
}

pub fn width_shares(model: &AppModel) -> Vec<f32> {
    model.workspace.windows.iter().map(|w| w.width_share).collect()
}

fn geometry(model: &AppModel, window: u64) -> WindowGeometry {
    let window = model
        .workspace
        .window(WindowId(window))
        .unwrap_or_else(|| panic!("no window {}", window));
    WindowGeometry::compute(window, &model.config.tab_bar)
}

/// Which half of a tab a point falls in
#[derive(Debug, Clone, Copy)]
pub enum Half {
    Left,
    Right,
}

/// A point on the tab at `index`, away from the close glyph
pub fn tab_point(model: &AppModel, window: u64, index: usize, half: Half) -> (f32, f32) {
    let slot = geometry(model, window).tabs[index];
    let x = match half {
        Half::Left => slot.rect.x + slot.rect.width * 0.25,
        Half::Right => slot.rect.mid_x() + (slot.close_rect.x - slot.rect.mid_x()) / 2.0,
    };
    (x, slot.rect.y + slot.rect.height / 2.0)
}

/// Centre of the close glyph of the tab at `index`
pub fn close_point(model: &AppModel, window: u64, index: usize) -> (f32, f32) {
    let rect = geometry(model, window).tabs[index].close_rect;
    (rect.mid_x(), rect.y + rect.height / 2.0)
}

pub fn new_tab_point(model: &AppModel, window: u64) -> (f32, f32) {
    let rect = geometry(model, window)
        .new_tab_button
        .expect("window has a new-tab button");
    (rect.mid_x(), rect.y + rect.height / 2.0)
}

pub fn split_point(model: &AppModel, window: u64) -> (f32, f32) {
    let rect = geometry(model, window)
        .split_button
        .expect("window has a split button");
    (rect.mid_x(), rect.y + rect.height / 2.0)
}

/// A point on the tab bar right of every tab and control
pub fn empty_bar_point(model: &AppModel, window: u64) -> (f32, f32) {
    let bar = geometry(model, window).tab_bar;
    (bar.x + bar.width - 2.0, bar.y + bar.height / 2.0)
}

/// A point in the content area below the tab bar
pub fn content_point(model: &AppModel, window: u64) -> (f32, f32) {
    let content = geometry(model, window).content;
    (content.mid_x(), content.y + content.height / 2.0)
}

pub fn click(model: &mut AppModel, (x, y): (f32, f32)) {
    update(model, Msg::Pointer(PointerMsg::Click { x, y }));
}

/// Full drag gesture: start at `from`, hover and drop at `to`
pub fn drag(model: &mut AppModel, (fx, fy): (f32, f32), (tx, ty): (f32, f32)) {
    update(model, Msg::Pointer(PointerMsg::DragStart { x: fx, y: fy }));
    update(model, Msg::Pointer(PointerMsg::DragOver { x: tx, y: ty }));
    update(model, Msg::Pointer(PointerMsg::Drop { x: tx, y: ty }));
}
