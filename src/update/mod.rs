//! Message handlers
//!
//! Every change to the layout, the drag session, the modal and the
//! collaborator state goes through [`update`].

mod app;
mod challenge;
mod chat;
mod drag;
pub mod layout;
mod modal;
mod pointer;
mod ui;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::AppModel;

#[cfg(debug_assertions)]
use crate::tracing::LayoutSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use app::update_app;
pub use challenge::update_challenge;
pub use chat::update_chat;
pub use drag::update_drag;
pub use layout::update_layout;
pub use modal::update_modal;
pub use pointer::update_pointer;
pub use ui::update_ui;

/// Apply one message to the model, returning any side effect to run.
///
/// Debug builds route through a traced wrapper; release builds dispatch directly.
#[inline]
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Dispatch by message family
fn update_inner(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Layout(m) => layout::update_layout(model, m),
        Msg::Drag(m) => drag::update_drag(model, m),
        Msg::Pointer(m) => pointer::update_pointer(model, m),
        Msg::Modal(m) => modal::update_modal(model, m),
        Msg::Chat(m) => chat::update_chat(model, m),
        Msg::Challenge(m) => challenge::update_challenge(model, m),
        Msg::Ui(m) => ui::update_ui(model, m),
        Msg::App(m) => app::update_app(model, m),
    }
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after layout state, logs the diff and checks the model
/// invariants after every message. Pointer moves during a drag are not logged.
#[cfg(debug_assertions)]
fn update_traced(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    use crate::messages::PointerMsg;

    let is_noisy = matches!(&msg, Msg::Pointer(PointerMsg::DragOver { .. }));

    let msg_name = msg_type_name(&msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    let before = LayoutSnapshot::from_model(model);

    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let result = update_inner(model, msg);

    let after = LayoutSnapshot::from_model(model);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "layout", %diff, "state changed");
    }

    model.workspace.assert_invariants();

    result
}

/// Short name for span fields, e.g.
/// - `Layout::Split`
/// - `Pointer::Click { x: 10.0, y: 4.0 }`
/// - `App::Resize(1280, 800)`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Layout(m) => format!("Layout::{:?}", m),
        Msg::Drag(m) => format!("Drag::{:?}", m),
        Msg::Pointer(m) => format!("Pointer::{:?}", m),
        Msg::Modal(m) => format!("Modal::{:?}", m),
        Msg::Chat(m) => format!("Chat::{:?}", m),
        Msg::Challenge(m) => format!("Challenge::{:?}", m),
        Msg::Ui(m) => format!("Ui::{:?}", m),
        Msg::App(m) => format!("App::{:?}", m),
    }
}
