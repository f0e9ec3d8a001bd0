//! New-tab modal tests
//!
//! Tests for opening the picker, its target window, confirm and cancel

mod common;

use common::{
    active_label, click, close_point, labels, new_tab_point, pair_id, split_model, tab_point,
    test_model, Half,
};
use splitdeck::messages::{LayoutMsg, ModalMsg, Msg, PointerMsg};
use splitdeck::model::{ModalState, PanelType, WindowId};
use splitdeck::update::update;

fn confirm(model: &mut splitdeck::AppModel, panel: &str) {
    update(model, Msg::Modal(ModalMsg::Confirm(PanelType::from(panel))));
}

// ========================================================================
// Modal Open/Close Tests
// ========================================================================

#[test]
fn test_new_tab_button_opens_modal_for_its_window() {
    let mut model = split_model(&["a"], &["x"]);
    let point = new_tab_point(&model, 2);
    click(&mut model, point);

    let modal = model.ui.active_modal.as_ref().expect("modal open");
    assert_eq!(modal.target(), WindowId(2));
}

#[test]
fn test_modal_lists_registered_panel_types() {
    let mut model = test_model(&["a"]);
    let point = new_tab_point(&model, 1);
    click(&mut model, point);

    let Some(ModalState::NewTab(state)) = &model.ui.active_modal else {
        panic!("Expected new-tab modal");
    };
    assert_eq!(state.choices, model.registry.panel_types());
    assert!(state.choices.contains(&PanelType::from("chat")));
}

#[test]
fn test_confirm_adds_to_target_window_and_closes() {
    let mut model = split_model(&["a"], &["x"]);
    let point = new_tab_point(&model, 2);
    click(&mut model, point);

    confirm(&mut model, "c");

    assert!(model.ui.active_modal.is_none());
    assert_eq!(labels(&model, 1), vec!["A"]);
    assert_eq!(labels(&model, 2), vec!["X", "C"]);
    assert_eq!(active_label(&model, 2).as_deref(), Some("C"));
}

#[test]
fn test_cancel_closes_without_changes() {
    let mut model = test_model(&["a"]);
    let point = new_tab_point(&model, 1);
    click(&mut model, point);

    update(&mut model, Msg::Modal(ModalMsg::Cancel));

    assert!(model.ui.active_modal.is_none());
    assert_eq!(labels(&model, 1), vec!["A"]);
}

#[test]
fn test_confirm_unknown_type_keeps_modal_open() {
    let mut model = test_model(&["a"]);
    let point = new_tab_point(&model, 1);
    click(&mut model, point);

    confirm(&mut model, "nope");

    assert!(model.ui.active_modal.is_some());
    assert_eq!(labels(&model, 1), vec!["A"]);
    assert_eq!(model.ui.status_message, "Unknown panel type: nope");
}

#[test]
fn test_confirm_without_modal_is_ignored() {
    let mut model = test_model(&["a"]);
    confirm(&mut model, "b");
    assert_eq!(labels(&model, 1), vec!["A"]);
}

#[test]
fn test_open_for_unknown_window_is_ignored() {
    let mut model = test_model(&["a"]);
    update(&mut model, Msg::Modal(ModalMsg::OpenNewTab(WindowId(7))));
    assert!(model.ui.active_modal.is_none());
}

#[test]
fn test_reopening_retargets_modal() {
    let mut model = split_model(&["a"], &["x"]);
    update(&mut model, Msg::Modal(ModalMsg::OpenNewTab(WindowId(2))));
    update(&mut model, Msg::Modal(ModalMsg::OpenNewTab(WindowId(1))));
    confirm(&mut model, "b");
    assert_eq!(labels(&model, 1), vec!["A", "B"]);
    assert_eq!(labels(&model, 2), vec!["X"]);
}

// ========================================================================
// Target lifetime
// ========================================================================

#[test]
fn test_modal_closes_when_target_window_is_removed() {
    let mut model = split_model(&["a"], &["x"]);
    update(&mut model, Msg::Modal(ModalMsg::OpenNewTab(WindowId(2))));

    // Remove window 2 behind the modal's back by closing its only tab
    let x = pair_id(&model, 2, "X");
    update(
        &mut model,
        Msg::Layout(LayoutMsg::ClosePair {
            window: WindowId(2),
            pair: x,
        }),
    );

    assert_eq!(model.workspace.windows.len(), 1);
    assert!(model.ui.active_modal.is_none());
}

#[test]
fn test_modal_survives_removal_of_other_window() {
    let mut model = split_model(&["a"], &["x"]);
    update(&mut model, Msg::Modal(ModalMsg::OpenNewTab(WindowId(1))));

    let x = pair_id(&model, 2, "X");
    update(
        &mut model,
        Msg::Layout(LayoutMsg::ClosePair {
            window: WindowId(2),
            pair: x,
        }),
    );

    assert_eq!(
        model.ui.active_modal.as_ref().map(ModalState::target),
        Some(WindowId(1))
    );
}

// ========================================================================
// Pointer capture
// ========================================================================

#[test]
fn test_open_modal_captures_clicks() {
    let mut model = test_model(&["a", "b"]);
    let point = new_tab_point(&model, 1);
    click(&mut model, point);

    let point = close_point(&model, 1, 0);
    click(&mut model, point);
    let point = tab_point(&model, 1, 1, Half::Left);
    click(&mut model, point);

    assert_eq!(labels(&model, 1), vec!["A", "B"]);
    assert_eq!(active_label(&model, 1).as_deref(), Some("A"));
}

#[test]
fn test_drop_while_modal_open_cancels_drag() {
    let mut model = test_model(&["a", "b"]);
    let (x, y) = tab_point(&model, 1, 0, Half::Left);
    update(&mut model, Msg::Pointer(PointerMsg::DragStart { x, y }));
    update(&mut model, Msg::Modal(ModalMsg::OpenNewTab(WindowId(1))));

    let (x, y) = tab_point(&model, 1, 1, Half::Right);
    update(&mut model, Msg::Pointer(PointerMsg::Drop { x, y }));

    assert!(model.drag.is_none());
    assert_eq!(labels(&model, 1), vec!["A", "B"]);
}
