//! HTML projection of the model
//!
//! The page is rebuilt from the model on every render; nothing in the markup
//! is read back. Collaborator output (chat transcript, current challenge) is
//! placed into panels through template slots.

use std::fmt::Write as _;

use crate::model::{AppModel, ModalState, Window, CHALLENGE_SLOT, CHAT_SLOT};
use crate::util::escape_html;

use super::geometry::WindowGeometry;

/// Render the whole page body
pub fn render(model: &AppModel) -> String {
    let chat_html = model.chat.render_html();
    let challenge_html = model.challenges.render_html();

    let mut out = String::from("<div id=\"container\">\n");
    for window in &model.workspace.windows {
        render_window(&mut out, model, window, &chat_html, &challenge_html);
    }
    out.push_str("</div>\n");

    if let Some(modal) = &model.ui.active_modal {
        render_modal(&mut out, model, modal);
    }
    render_debug_info(&mut out, model);
    out
}

/// Render a complete standalone document
pub fn render_document(model: &AppModel) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>splitdeck</title>\n</head>\n<body>\n{}</body>\n</html>\n",
        render(model)
    )
}

/// Replace collaborator slots in panel content
pub fn fill_slots(content: &str, chat_html: &str, challenge_html: &str) -> String {
    content
        .replace(CHAT_SLOT, chat_html)
        .replace(CHALLENGE_SLOT, challenge_html)
}

fn render_window(
    out: &mut String,
    model: &AppModel,
    window: &Window,
    chat_html: &str,
    challenge_html: &str,
) {
    let dragged = model.drag.as_ref().map(|d| d.dragged);
    let hovered = model
        .drag
        .as_ref()
        .and_then(|d| d.hover)
        .is_some_and(|h| h.window == window.id);

    let _ = writeln!(
        out,
        "<div class=\"window\" data-window=\"{}\" style=\"width: {}%\">",
        window.id.0,
        window.width_share * 100.0
    );

    let tab_width = WindowGeometry::tab_width(window, &model.config.tab_bar, window.rect.width);

    let bar_class = if hovered { "tab-bar drop-target" } else { "tab-bar" };
    let _ = writeln!(out, "<div class=\"{}\">", bar_class);
    for pair in &window.pairs {
        let mut class = String::from("tab");
        if window.is_active(pair.id()) {
            class.push_str(" active");
        }
        if dragged == Some(pair.id()) {
            class.push_str(" dragging");
        }
        let _ = writeln!(
            out,
            "<div class=\"{}\" draggable=\"true\" data-pair=\"{}\" style=\"width: {}px\">{}<span class=\"tab-close\">\u{d7}</span></div>",
            class,
            pair.id().0,
            tab_width,
            escape_html(&pair.tab.label)
        );
    }
    if window.controls.new_tab {
        out.push_str("<button class=\"new-tab-button\">+</button>\n");
    }
    if window.controls.split {
        out.push_str("<button class=\"new-window-button\">\u{25eb}</button>\n");
    }
    out.push_str("</div>\n");

    out.push_str("<div class=\"content-area\">\n");
    for pair in &window.pairs {
        let class = if window.is_active(pair.id()) {
            "panel active"
        } else {
            "panel"
        };
        let _ = writeln!(
            out,
            "<div class=\"{}\" data-pair=\"{}\" data-panel-type=\"{}\">\n{}\n</div>",
            class,
            pair.id().0,
            escape_html(pair.tab.panel_type.as_str()),
            fill_slots(&pair.panel.content, chat_html, challenge_html)
        );
    }
    out.push_str("</div>\n</div>\n");
}

fn render_modal(out: &mut String, model: &AppModel, modal: &ModalState) {
    match modal {
        ModalState::NewTab(state) => {
            let _ = writeln!(
                out,
                "<div id=\"newTabModal\" class=\"modal\" data-target=\"{}\" style=\"display: block\">",
                state.target.0
            );
            for choice in &state.choices {
                let _ = writeln!(
                    out,
                    "<button data-panel-type=\"{}\">{}</button>",
                    escape_html(choice.as_str()),
                    escape_html(&model.registry.label(choice))
                );
            }
            out.push_str("</div>\n");
        }
    }
}

fn render_debug_info(out: &mut String, model: &AppModel) {
    let log = &model.ui.debug_log;
    let display = if log.visible { "block" } else { "none" };
    let _ = writeln!(out, "<div id=\"debug-info\" style=\"display: {}\">", display);
    for line in log.lines() {
        let _ = writeln!(out, "<p>{}</p>", escape_html(line));
    }
    out.push_str("</div>\n");
}
