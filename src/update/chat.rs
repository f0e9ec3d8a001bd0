//! Chat handlers

use crate::commands::Cmd;
use crate::messages::ChatMsg;
use crate::model::AppModel;

/// Handle chat messages
pub fn update_chat(model: &mut AppModel, msg: ChatMsg) -> Option<Cmd> {
    match msg {
        ChatMsg::Submit(query) => {
            let query = query.trim();
            if query.is_empty() {
                return None;
            }
            model.chat.push_query(query);
            model.ui.debug_log.push("Sending chat request");
            Some(Cmd::batch(vec![
                Cmd::Redraw,
                Cmd::SendChat {
                    query: query.to_string(),
                },
            ]))
        }

        ChatMsg::Reply(result) => {
            match &result {
                Ok(_) => model.ui.debug_log.push("Received chat response"),
                Err(e) => model.ui.debug_log.push(format!("Chat error: {}", e)),
            }
            model.chat.push_reply(result);
            Some(Cmd::Redraw)
        }
    }
}
