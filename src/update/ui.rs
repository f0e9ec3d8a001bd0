//! UI message handlers (status message, debug-info log)

use crate::commands::Cmd;
use crate::messages::UiMsg;
use crate::model::AppModel;

/// Handle UI messages
pub fn update_ui(model: &mut AppModel, msg: UiMsg) -> Option<Cmd> {
    match msg {
        UiMsg::SetStatus(message) => {
            model.ui.set_status(message);
            Some(Cmd::Redraw)
        }

        UiMsg::ToggleDebugInfo => {
            let log = &mut model.ui.debug_log;
            log.visible = !log.visible;
            Some(Cmd::Redraw)
        }
    }
}
