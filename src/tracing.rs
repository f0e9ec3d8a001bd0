//! Logging setup and layout snapshots
//!
//! `RUST_LOG` controls the console (stderr) output, e.g.
//! `RUST_LOG=layout=debug,message=debug` to follow layout changes message by
//! message. A second layer writes everything at debug level to
//! `~/.config/splitdeck/logs/splitdeck.log`, rotated daily.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::{AppModel, PairId, WindowId};

/// Install the global subscriber. Call once, before the runtime starts.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - stderr so HTML/JSON output on stdout stays clean
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // Missing log dir only disables the file layer
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "splitdeck.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("splitdeck: file logging disabled: {:#}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of window/tab layout for diffing
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutSnapshot {
    pub windows: Vec<WindowInfo>,
    pub dragging: Option<PairId>,
    pub modal_target: Option<WindowId>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WindowInfo {
    pub id: WindowId,
    pub order: Vec<PairId>,
    pub active: Option<PairId>,
    pub width_share: f32,
}

impl LayoutSnapshot {
    pub fn from_model(model: &AppModel) -> Self {
        Self {
            windows: model
                .workspace
                .windows
                .iter()
                .map(|w| WindowInfo {
                    id: w.id,
                    order: w.order(),
                    active: w.active,
                    width_share: w.width_share,
                })
                .collect(),
            dragging: model.drag.as_ref().map(|d| d.dragged),
            modal_target: model.ui.active_modal.as_ref().map(|m| m.target()),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &LayoutSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.windows.len() != other.windows.len() {
            changes.push(format!(
                "window count: {} → {}",
                self.windows.len(),
                other.windows.len()
            ));
        }

        for after in &other.windows {
            let Some(before) = self.windows.iter().find(|w| w.id == after.id) else {
                changes.push(format!("window {} created", after.id.0));
                continue;
            };
            if before.order != after.order {
                changes.push(format!(
                    "window {}: tabs {} → {}",
                    after.id.0,
                    format_ids(&before.order),
                    format_ids(&after.order)
                ));
            }
            if before.active != after.active {
                changes.push(format!(
                    "window {}: active {:?} → {:?}",
                    after.id.0,
                    before.active.map(|p| p.0),
                    after.active.map(|p| p.0)
                ));
            }
            if before.width_share != after.width_share {
                changes.push(format!(
                    "window {}: width {}% → {}%",
                    after.id.0,
                    before.width_share * 100.0,
                    after.width_share * 100.0
                ));
            }
        }
        for before in &self.windows {
            if !other.windows.iter().any(|w| w.id == before.id) {
                changes.push(format!("window {} removed", before.id.0));
            }
        }

        if self.dragging != other.dragging {
            let status = match other.dragging {
                Some(pair) => format!("drag started ({})", pair.0),
                None => "drag cleared".to_string(),
            };
            changes.push(status);
        }
        if self.modal_target != other.modal_target {
            let status = match other.modal_target {
                Some(window) => format!("modal opened for window {}", window.0),
                None => "modal closed".to_string(),
            };
            changes.push(status);
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}

fn format_ids(ids: &[PairId]) -> String {
    let ids: Vec<String> = ids.iter().map(|id| id.0.to_string()).collect();
    format!("[{}]", ids.join(","))
}
