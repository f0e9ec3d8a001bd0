//! UI state - new-tab modal, status message and the debug-info log

use std::collections::VecDeque;

use super::registry::PanelType;
use super::workspace::WindowId;

// ============================================================================
// Modal System
// ============================================================================

/// State for the new-tab picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTabState {
    /// Window that asked for the new tab; valid until confirm or cancel
    pub target: WindowId,
    /// Panel types offered by the picker
    pub choices: Vec<PanelType>,
}

/// Union of all modal states
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalState {
    NewTab(NewTabState),
}

impl ModalState {
    /// Window the modal acts on
    pub fn target(&self) -> WindowId {
        match self {
            ModalState::NewTab(state) => state.target,
        }
    }
}

// ============================================================================
// Debug Log
// ============================================================================

/// Default number of debug log lines kept
pub const DEFAULT_DEBUG_LOG_LIMIT: usize = 200;

/// Bounded log of user-visible debug lines
#[derive(Debug, Clone)]
pub struct DebugLog {
    lines: VecDeque<String>,
    limit: usize,
    /// Whether the debug panel is shown
    pub visible: bool,
}

impl Default for DebugLog {
    fn default() -> Self {
        Self::with_limit(DEFAULT_DEBUG_LOG_LIMIT)
    }
}

impl DebugLog {
    pub fn with_limit(limit: usize) -> Self {
        Self {
            lines: VecDeque::new(),
            limit,
            visible: false,
        }
    }

    pub fn push(&mut self, line: impl Into<String>) {
        if self.limit == 0 {
            return;
        }
        if self.lines.len() == self.limit {
            self.lines.pop_front();
        }
        self.lines.push_back(line.into());
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

// ============================================================================
// UI State
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Last status message
    pub status_message: String,
    /// Currently active modal (if any)
    pub active_modal: Option<ModalState>,
    pub debug_log: DebugLog,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_debug_limit(limit: usize) -> Self {
        Self {
            debug_log: DebugLog::with_limit(limit),
            ..Self::default()
        }
    }

    /// Set the status message and mirror it into the debug log
    pub fn set_status(&mut self, message: impl Into<String>) {
        let message = message.into();
        self.debug_log.push(message.clone());
        self.status_message = message;
    }

    pub fn has_modal(&self) -> bool {
        self.active_modal.is_some()
    }

    pub fn open_modal(&mut self, modal: ModalState) {
        self.active_modal = Some(modal);
    }

    /// Close the active modal, returning it
    pub fn close_modal(&mut self) -> Option<ModalState> {
        self.active_modal.take()
    }
}
