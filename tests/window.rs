//! Tests for tab activation, creation and removal within one window

mod common;

use common::{active_label, click, close_point, labels, pair_id, tab_point, test_model, Half};
use splitdeck::messages::{LayoutMsg, Msg};
use splitdeck::model::{PairId, PanelType, WindowId};
use splitdeck::update::update;

// ============================================================================
// Activation
// ============================================================================

#[test]
fn test_first_initial_tab_is_active() {
    let model = test_model(&["a", "b", "c"]);
    assert_eq!(labels(&model, 1), vec!["A", "B", "C"]);
    assert_eq!(active_label(&model, 1).as_deref(), Some("A"));
}

#[test]
fn test_click_tab_activates_it() {
    let mut model = test_model(&["a", "b", "c"]);
    let point = tab_point(&model, 1, 2, Half::Left);
    click(&mut model, point);
    assert_eq!(active_label(&model, 1).as_deref(), Some("C"));
}

#[test]
fn test_activate_unknown_pair_is_noop() {
    let mut model = test_model(&["a", "b"]);
    let cmd = update(
        &mut model,
        Msg::Layout(LayoutMsg::ActivatePair {
            window: WindowId(1),
            pair: PairId(999),
        }),
    );
    assert!(cmd.is_none());
    assert_eq!(active_label(&model, 1).as_deref(), Some("A"));
}

#[test]
fn test_activate_pair_from_other_window_is_noop() {
    let mut model = common::split_model(&["a"], &["x"]);
    let x = pair_id(&model, 2, "X");
    update(
        &mut model,
        Msg::Layout(LayoutMsg::ActivatePair {
            window: WindowId(1),
            pair: x,
        }),
    );
    assert_eq!(active_label(&model, 1).as_deref(), Some("A"));
    assert_eq!(labels(&model, 1), vec!["A"]);
}

// ============================================================================
// Adding
// ============================================================================

#[test]
fn test_add_pair_appends_and_activates() {
    let mut model = test_model(&["a", "b"]);
    update(
        &mut model,
        Msg::Layout(LayoutMsg::AddPair {
            window: WindowId(1),
            panel_type: PanelType::from("c"),
        }),
    );
    assert_eq!(labels(&model, 1), vec!["A", "B", "C"]);
    assert_eq!(active_label(&model, 1).as_deref(), Some("C"));
    assert_eq!(model.ui.status_message, "Added new tab: C");
}

#[test]
fn test_add_pair_copies_template_content() {
    let mut model = test_model(&[]);
    update(
        &mut model,
        Msg::Layout(LayoutMsg::AddPair {
            window: WindowId(1),
            panel_type: PanelType::from("x"),
        }),
    );
    let window = model.workspace.primary();
    let pair = &window.pairs[0];
    assert_eq!(pair.panel.content, "<p>x</p>");
    assert_eq!(pair.tab.pair_id, pair.panel.pair_id);
}

#[test]
fn test_add_unknown_panel_type_is_noop() {
    let mut model = test_model(&["a"]);
    let cmd = update(
        &mut model,
        Msg::Layout(LayoutMsg::AddPair {
            window: WindowId(1),
            panel_type: PanelType::from("nope"),
        }),
    );
    assert!(cmd.is_none());
    assert_eq!(labels(&model, 1), vec!["A"]);
}

#[test]
fn test_pair_ids_are_never_reused() {
    let mut model = test_model(&["a"]);
    let first = pair_id(&model, 1, "A");
    update(
        &mut model,
        Msg::Layout(LayoutMsg::AddPair {
            window: WindowId(1),
            panel_type: PanelType::from("b"),
        }),
    );
    update(
        &mut model,
        Msg::Layout(LayoutMsg::ClosePair {
            window: WindowId(1),
            pair: first,
        }),
    );
    update(
        &mut model,
        Msg::Layout(LayoutMsg::AddPair {
            window: WindowId(1),
            panel_type: PanelType::from("a"),
        }),
    );
    let again = pair_id(&model, 1, "A");
    assert_ne!(first, again);
}

// ============================================================================
// Removal
// ============================================================================

#[test]
fn test_close_inactive_keeps_active() {
    // [A,B,C] with C active, close B -> [A,C], C still active
    let mut model = test_model(&["a", "b", "c"]);
    let point = tab_point(&model, 1, 2, Half::Left);
    click(&mut model, point);

    let point = close_point(&model, 1, 1);
    click(&mut model, point);

    assert_eq!(labels(&model, 1), vec!["A", "C"]);
    assert_eq!(active_label(&model, 1).as_deref(), Some("C"));
}

#[test]
fn test_close_active_activates_leftmost() {
    let mut model = test_model(&["a", "b", "c"]);
    let point = tab_point(&model, 1, 1, Half::Left);
    click(&mut model, point);

    let point = close_point(&model, 1, 1);
    click(&mut model, point);

    assert_eq!(labels(&model, 1), vec!["A", "C"]);
    assert_eq!(active_label(&model, 1).as_deref(), Some("A"));
}

#[test]
fn test_close_leftmost_active_activates_new_leftmost() {
    let mut model = test_model(&["a", "b", "c"]);
    let point = close_point(&model, 1, 0);
    click(&mut model, point);

    assert_eq!(labels(&model, 1), vec!["B", "C"]);
    assert_eq!(active_label(&model, 1).as_deref(), Some("B"));
}

#[test]
fn test_close_unknown_pair_is_noop() {
    let mut model = test_model(&["a"]);
    let cmd = update(
        &mut model,
        Msg::Layout(LayoutMsg::ClosePair {
            window: WindowId(1),
            pair: PairId(42),
        }),
    );
    assert!(cmd.is_none());
    assert_eq!(labels(&model, 1), vec!["A"]);
}

#[test]
fn test_close_last_tab_of_sole_window_keeps_window() {
    let mut model = test_model(&["a"]);
    let point = close_point(&model, 1, 0);
    click(&mut model, point);

    assert_eq!(model.workspace.windows.len(), 1);
    assert!(model.workspace.primary().pairs.is_empty());
    assert_eq!(model.workspace.primary().active, None);
    assert_eq!(model.workspace.primary().width_share, 1.0);
}
