//! Pointer handlers: hit-test, then dispatch to the owning handler

use crate::commands::Cmd;
use crate::messages::{DragMsg, LayoutMsg, ModalMsg, PointerMsg};
use crate::model::AppModel;
use crate::view::{hit_test, resolve_drop, HitTarget};

use super::{drag, layout, modal};

/// Handle raw pointer gestures
pub fn update_pointer(model: &mut AppModel, msg: PointerMsg) -> Option<Cmd> {
    match msg {
        PointerMsg::Click { x, y } => click(model, x, y),

        PointerMsg::DragStart { x, y } => match hit_test(model, x, y) {
            HitTarget::Tab { window, pair } | HitTarget::TabClose { window, pair } => {
                drag::update_drag(model, DragMsg::Start { window, pair })
            }
            other => {
                tracing::debug!("Drag start over {:?} ignored", other);
                None
            }
        },

        PointerMsg::DragOver { x, y } => {
            let session = model.drag.as_ref()?;
            let target = resolve_drop(model, session, x, y);
            drag::update_drag(model, DragMsg::Over(target))
        }

        PointerMsg::Drop { x, y } => {
            let target = model
                .drag
                .as_ref()
                .and_then(|session| resolve_drop(model, session, x, y));
            drag::update_drag(model, DragMsg::Drop(target))
        }

        PointerMsg::DragEnd => drag::update_drag(model, DragMsg::End),
    }
}

fn click(model: &mut AppModel, x: f32, y: f32) -> Option<Cmd> {
    match hit_test(model, x, y) {
        HitTarget::Tab { window, pair } => {
            layout::update_layout(model, LayoutMsg::ActivatePair { window, pair })
        }
        HitTarget::TabClose { window, pair } => {
            layout::update_layout(model, LayoutMsg::ClosePair { window, pair })
        }
        HitTarget::NewTabButton { window } => {
            modal::update_modal(model, ModalMsg::OpenNewTab(window))
        }
        HitTarget::SplitButton { .. } => layout::update_layout(model, LayoutMsg::Split),
        HitTarget::Modal
        | HitTarget::TabBarEmpty { .. }
        | HitTarget::Content { .. }
        | HitTarget::Outside => None,
    }
}
