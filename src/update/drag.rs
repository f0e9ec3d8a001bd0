//! Drag session handlers
//!
//! A session exists only between `Start` and `Drop`/`End`. Every exit path
//! takes the session out of the model before acting on it.

use crate::commands::Cmd;
use crate::messages::DragMsg;
use crate::model::{AppModel, DragSession};

use super::layout;

/// Handle drag messages
pub fn update_drag(model: &mut AppModel, msg: DragMsg) -> Option<Cmd> {
    match msg {
        DragMsg::Start { window, pair } => {
            if model.drag.is_some() {
                tracing::debug!("Drag start ignored: a drag is already in progress");
                return None;
            }
            if !model
                .workspace
                .window(window)
                .is_some_and(|w| w.contains(pair))
            {
                tracing::warn!("Drag start: pair {:?} not in window {:?}", pair, window);
                return None;
            }
            model.drag = Some(DragSession::new(pair, window));
            model
                .ui
                .debug_log
                .push(format!("Drag started: tab {} in window {}", pair.0, window.0));
            Some(Cmd::Redraw)
        }

        DragMsg::Over(target) => {
            let session = model.drag.as_mut()?;
            if session.hover == target {
                return None;
            }
            session.hover = target;
            Some(Cmd::Redraw)
        }

        DragMsg::Drop(target) => {
            let Some(session) = model.drag.take() else {
                tracing::debug!("Drop ignored: no drag in progress");
                return None;
            };
            match target {
                Some(target) => {
                    layout::move_pair(
                        model,
                        session.source,
                        session.dragged,
                        target.window,
                        target.at,
                    );
                }
                None => {
                    tracing::debug!(
                        "Drop outside any tab bar: drag of {:?} cancelled",
                        session.dragged
                    );
                    model.ui.debug_log.push("Drag cancelled");
                }
            }
            // The session is gone either way, so the indicator must go too
            Some(Cmd::Redraw)
        }

        DragMsg::End => {
            let session = model.drag.take()?;
            tracing::debug!("Drag of {:?} ended without a drop", session.dragged);
            model.ui.debug_log.push("Drag cancelled");
            Some(Cmd::Redraw)
        }
    }
}
