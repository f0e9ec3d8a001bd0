//! Application model - the complete state of the workspace
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod drag;
pub mod registry;
pub mod ui;
pub mod window;
pub mod workspace;

pub use drag::{DragSession, DropTarget};
pub use registry::{PanelRegistry, PanelType, CHALLENGE_SLOT, CHAT_SLOT};
pub use ui::{DebugLog, ModalState, NewTabState, UiState};
pub use window::{InsertAt, Pair, Panel, Tab, TabBarControls, Window};
pub use workspace::{PairId, Rect, WindowId, Workspace, MAX_WINDOWS};

use crate::challenge::ChallengeState;
use crate::chat::ChatState;
use crate::config::AppConfig;

/// The complete application model
#[derive(Debug)]
pub struct AppModel {
    /// Windows, pairs and width allocation
    pub workspace: Workspace,
    /// Read-only panel templates
    pub registry: PanelRegistry,
    /// In-progress tab drag, if any
    pub drag: Option<DragSession>,
    /// UI state (modal, status, debug log)
    pub ui: UiState,
    /// Chat transcript shown in chat panels
    pub chat: ChatState,
    /// Challenge quiz shown in challenge panels
    pub challenges: ChallengeState,
    pub config: AppConfig,
    /// Page dimensions
    pub window_size: (u32, u32),
}

impl AppModel {
    /// Create a model with a single window holding the configured initial tabs
    pub fn new(config: AppConfig, registry: PanelRegistry) -> Self {
        let mut workspace = Workspace::new(TabBarControls::default());
        let primary = workspace.primary().id;

        let mut ui = UiState::with_debug_limit(config.debug_log_limit);
        for name in &config.panels.initial_tabs {
            let panel_type = PanelType::new(name.clone());
            if workspace.add_pair(primary, &panel_type, &registry).is_none() {
                tracing::warn!("Initial tab '{}' has no panel template", name);
            }
        }
        // The leftmost tab is the one shown on startup
        if let Some(first) = workspace.primary().pairs.first().map(Pair::id) {
            if let Some(window) = workspace.window_mut(primary) {
                window.activate(first);
            }
        }
        ui.set_status("Application initialized");

        let window_size = (config.viewport.width, config.viewport.height);
        let mut model = Self {
            workspace,
            registry,
            drag: None,
            ui,
            chat: ChatState::new(),
            challenges: ChallengeState::new(),
            config,
            window_size,
        };
        model.relayout();
        model
    }

    /// Recompute window rects for the current page size
    pub fn relayout(&mut self) {
        let (width, height) = self.window_size;
        self.workspace
            .compute_layout(Rect::new(0.0, 0.0, width as f32, height as f32));
    }

    /// Update page dimensions and relayout
    pub fn resize(&mut self, width: u32, height: u32) {
        self.window_size = (width, height);
        self.relayout();
    }

    /// Whether a tab drag is in progress
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }
}
