//! Message types for the Elm-style architecture
//!
//! All user input, collaborator replies and system events are expressed as
//! messages. The update layer is the only place they are interpreted.

use crate::challenge::ChallengeDocument;
use crate::model::{DropTarget, InsertAt, PairId, PanelType, WindowId};

/// Layout messages (pairs and windows)
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutMsg {
    /// Make a pair the active one in its window
    ActivatePair { window: WindowId, pair: PairId },
    /// Close a pair (tab close glyph)
    ClosePair { window: WindowId, pair: PairId },
    /// Add a new pair of the given type to a window
    AddPair {
        window: WindowId,
        panel_type: PanelType,
    },
    /// Split into two windows (ignored at the window limit)
    Split,
    /// Move a pair to a position in a window
    MovePair {
        source: WindowId,
        pair: PairId,
        target: WindowId,
        at: InsertAt,
    },
}

/// Drag session messages, already resolved to model ids
#[derive(Debug, Clone, PartialEq)]
pub enum DragMsg {
    /// Begin dragging a pair out of a window
    Start { window: WindowId, pair: PairId },
    /// Pointer moved during a drag; `None` means not over a valid target
    Over(Option<DropTarget>),
    /// Pointer released; `None` cancels
    Drop(Option<DropTarget>),
    /// Drag ended without a drop
    End,
}

/// Raw pointer gestures in page coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerMsg {
    Click { x: f32, y: f32 },
    DragStart { x: f32, y: f32 },
    DragOver { x: f32, y: f32 },
    Drop { x: f32, y: f32 },
    DragEnd,
}

/// New-tab modal messages
#[derive(Debug, Clone, PartialEq)]
pub enum ModalMsg {
    /// Open the picker for a window
    OpenNewTab(WindowId),
    /// Pick a panel type for the modal's target window
    Confirm(PanelType),
    Cancel,
}

/// Chat collaborator messages
#[derive(Debug, Clone, PartialEq)]
pub enum ChatMsg {
    /// User submitted a query
    Submit(String),
    /// Backend replied (answer markup or error text)
    Reply(Result<String, String>),
}

/// Challenge quiz messages
#[derive(Debug, Clone, PartialEq)]
pub enum ChallengeMsg {
    /// Load the configured challenge document
    Load,
    /// Document finished loading
    Loaded(Result<ChallengeDocument, String>),
    Next,
    Previous,
    /// Check a solution against the current exercise
    Submit(String),
}

/// UI messages
#[derive(Debug, Clone, PartialEq)]
pub enum UiMsg {
    /// Show or hide the debug-info log
    ToggleDebugInfo,
    /// Set the status message
    SetStatus(String),
}

/// Application-level messages
#[derive(Debug, Clone, PartialEq)]
pub enum AppMsg {
    /// Page resized
    Resize(u32, u32),
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    Layout(LayoutMsg),
    Drag(DragMsg),
    Pointer(PointerMsg),
    Modal(ModalMsg),
    Chat(ChatMsg),
    Challenge(ChallengeMsg),
    Ui(UiMsg),
    App(AppMsg),
}
