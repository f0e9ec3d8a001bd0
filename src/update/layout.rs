//! Layout message handlers (pairs, windows, split)

use crate::commands::Cmd;
use crate::messages::LayoutMsg;
use crate::model::{AppModel, InsertAt, PairId, PanelType, WindowId, MAX_WINDOWS};

/// Handle layout messages
pub fn update_layout(model: &mut AppModel, msg: LayoutMsg) -> Option<Cmd> {
    match msg {
        LayoutMsg::ActivatePair { window, pair } => activate_pair(model, window, pair),

        LayoutMsg::ClosePair { window, pair } => close_pair(model, window, pair),

        LayoutMsg::AddPair { window, panel_type } => add_pair(model, window, &panel_type),

        LayoutMsg::Split => split(model),

        LayoutMsg::MovePair {
            source,
            pair,
            target,
            at,
        } => move_pair(model, source, pair, target, at),
    }
}

fn activate_pair(model: &mut AppModel, window_id: WindowId, pair_id: PairId) -> Option<Cmd> {
    let Some(window) = model.workspace.window_mut(window_id) else {
        tracing::warn!("Activate: unknown window {:?}", window_id);
        return None;
    };
    if !window.contains(pair_id) {
        tracing::warn!("Activate: pair {:?} not in window {:?}", pair_id, window_id);
        return None;
    }
    if window.is_active(pair_id) {
        return None;
    }
    window.activate(pair_id);
    Some(Cmd::Redraw)
}

fn close_pair(model: &mut AppModel, window_id: WindowId, pair_id: PairId) -> Option<Cmd> {
    let label = model
        .workspace
        .window(window_id)
        .and_then(|w| w.pair(pair_id))
        .map(|p| p.tab.label.clone());

    if !model.workspace.close_pair(window_id, pair_id) {
        tracing::warn!("Close: pair {:?} not in window {:?}", pair_id, window_id);
        return None;
    }

    if model.drag.as_ref().is_some_and(|d| d.dragged == pair_id) {
        model.drag = None;
        model.ui.debug_log.push("Drag cancelled");
    }
    windows_changed(model);
    model
        .ui
        .set_status(format!("Closed tab: {}", label.unwrap_or_default()));
    Some(Cmd::Redraw)
}

/// Add a pair to a window. Shared with the new-tab modal.
pub(super) fn add_pair(
    model: &mut AppModel,
    window_id: WindowId,
    panel_type: &PanelType,
) -> Option<Cmd> {
    if model.workspace.window(window_id).is_none() {
        tracing::warn!("Add tab: unknown window {:?}", window_id);
        return None;
    }
    if !model.registry.contains(panel_type) {
        tracing::warn!("Add tab: unknown panel type '{}'", panel_type);
        return None;
    }

    model
        .workspace
        .add_pair(window_id, panel_type, &model.registry)?;
    model
        .ui
        .set_status(format!("Added new tab: {}", model.registry.label(panel_type)));
    Some(Cmd::Redraw)
}

fn split(model: &mut AppModel) -> Option<Cmd> {
    match model.workspace.split() {
        Some(window_id) => {
            model.relayout();
            tracing::debug!("Split: created window {:?}", window_id);
            model.ui.set_status("Created new window");
            Some(Cmd::Redraw)
        }
        None => {
            tracing::debug!("Split ignored: already at {} windows", MAX_WINDOWS);
            None
        }
    }
}

/// Move a pair. Shared with the drag handler.
pub(super) fn move_pair(
    model: &mut AppModel,
    source: WindowId,
    pair_id: PairId,
    target: WindowId,
    at: InsertAt,
) -> Option<Cmd> {
    if at == InsertAt::Before(pair_id) {
        tracing::debug!("Move: {:?} dropped onto itself", pair_id);
        return None;
    }
    let window_count = model.workspace.windows.len();
    if !model.workspace.move_pair(source, pair_id, target, at) {
        tracing::warn!(
            "Move: rejected {:?} from {:?} to {:?} at {:?}",
            pair_id,
            source,
            target,
            at
        );
        return None;
    }

    if model.workspace.windows.len() != window_count {
        windows_changed(model);
    }
    model.ui.debug_log.push(format!(
        "Moved tab {} from window {} to window {}",
        pair_id.0, source.0, target.0
    ));
    Some(Cmd::Redraw)
}

/// Relayout after the window set changed, and close a modal whose target
/// window no longer exists.
pub(super) fn windows_changed(model: &mut AppModel) {
    model.relayout();
    let orphaned = model
        .ui
        .active_modal
        .as_ref()
        .is_some_and(|modal| model.workspace.window(modal.target()).is_none());
    if orphaned {
        model.ui.close_modal();
        tracing::debug!("Closed new-tab modal: target window was removed");
    }
}
