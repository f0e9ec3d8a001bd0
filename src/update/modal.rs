//! New-tab modal handlers

use crate::commands::Cmd;
use crate::messages::ModalMsg;
use crate::model::{AppModel, ModalState, NewTabState};

use super::layout;

/// Handle modal messages
pub fn update_modal(model: &mut AppModel, msg: ModalMsg) -> Option<Cmd> {
    match msg {
        ModalMsg::OpenNewTab(window) => {
            if model.workspace.window(window).is_none() {
                tracing::warn!("New tab: unknown window {:?}", window);
                return None;
            }
            model.ui.open_modal(ModalState::NewTab(NewTabState {
                target: window,
                choices: model.registry.panel_types(),
            }));
            Some(Cmd::Redraw)
        }

        ModalMsg::Confirm(panel_type) => {
            let Some(target) = model.ui.active_modal.as_ref().map(ModalState::target) else {
                tracing::debug!("Confirm ignored: no modal open");
                return None;
            };
            if !model.registry.contains(&panel_type) {
                model
                    .ui
                    .set_status(format!("Unknown panel type: {}", panel_type));
                return Some(Cmd::Redraw);
            }
            model.ui.close_modal();
            layout::add_pair(model, target, &panel_type);
            Some(Cmd::Redraw)
        }

        ModalMsg::Cancel => {
            model.ui.close_modal()?;
            Some(Cmd::Redraw)
        }
    }
}
