//! State dump for inspection and scripted checks
//!
//! Serializes a snapshot of the layout and collaborator state to JSON.

use serde::Serialize;

use crate::model::{AppModel, ModalState, Window};

#[derive(Debug, Serialize)]
pub struct StateDump {
    pub window_size: (u32, u32),
    pub windows: Vec<WindowDump>,
    pub drag: Option<DragDump>,
    pub modal: Option<ModalDump>,
    pub status: String,
    pub debug_log: Vec<String>,
    pub chat: ChatDump,
    pub challenge: ChallengeDump,
}

#[derive(Debug, Serialize)]
pub struct WindowDump {
    pub id: u64,
    pub width_percent: f32,
    pub active: Option<u64>,
    pub tabs: Vec<TabDump>,
}

#[derive(Debug, Serialize)]
pub struct TabDump {
    pub pair_id: u64,
    pub panel_type: String,
    pub label: String,
    pub is_active: bool,
}

#[derive(Debug, Serialize)]
pub struct DragDump {
    pub dragged: u64,
    pub source: u64,
    pub hover_window: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct ModalDump {
    pub target: u64,
    pub choices: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatDump {
    pub messages: usize,
    pub pending: usize,
}

#[derive(Debug, Serialize)]
pub struct ChallengeDump {
    pub loaded: bool,
    pub topics: usize,
    pub current: usize,
    pub feedback: Option<&'static str>,
}

impl StateDump {
    pub fn from_model(model: &AppModel) -> Self {
        Self {
            window_size: model.window_size,
            windows: model
                .workspace
                .windows
                .iter()
                .map(WindowDump::from_window)
                .collect(),
            drag: model.drag.as_ref().map(|d| DragDump {
                dragged: d.dragged.0,
                source: d.source.0,
                hover_window: d.hover.map(|h| h.window.0),
            }),
            modal: model.ui.active_modal.as_ref().map(|modal| match modal {
                ModalState::NewTab(state) => ModalDump {
                    target: state.target.0,
                    choices: state
                        .choices
                        .iter()
                        .map(|c| c.as_str().to_string())
                        .collect(),
                },
            }),
            status: model.ui.status_message.clone(),
            debug_log: model.ui.debug_log.lines().map(str::to_string).collect(),
            chat: ChatDump {
                messages: model.chat.messages.len(),
                pending: model.chat.pending,
            },
            challenge: ChallengeDump {
                loaded: model.challenges.document.is_some(),
                topics: model
                    .challenges
                    .document
                    .as_ref()
                    .map_or(0, |doc| doc.topics.len()),
                current: model.challenges.current,
                feedback: model.challenges.feedback.map(|v| v.message()),
            },
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
    }
}

impl WindowDump {
    fn from_window(window: &Window) -> Self {
        Self {
            id: window.id.0,
            width_percent: window.width_share * 100.0,
            active: window.active.map(|p| p.0),
            tabs: window
                .pairs
                .iter()
                .map(|pair| TabDump {
                    pair_id: pair.id().0,
                    panel_type: pair.tab.panel_type.as_str().to_string(),
                    label: pair.tab.label.clone(),
                    is_active: window.is_active(pair.id()),
                })
                .collect(),
        }
    }
}
