//! App message handlers

use crate::commands::Cmd;
use crate::messages::AppMsg;
use crate::model::AppModel;

/// Handle app messages
pub fn update_app(model: &mut AppModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::Resize(width, height) => {
            if model.window_size == (width, height) {
                return None;
            }
            model.resize(width, height);
            Some(Cmd::Redraw)
        }
    }
}
