//! Session scripts
//!
//! A script is a YAML list of user gestures replayed against the runtime:
//!
//! ```yaml
//! steps:
//!   - split
//!   - drag: { from: { x: 10, y: 10 }, to: { x: 700, y: 10 } }
//!   - open_new_tab: { window: 1 }
//!   - confirm: { panel: notes }
//!   - ask: { query: "what is til?" }
//!   - wait
//! ```
//!
//! Pointer steps use page coordinates. Tab steps address a tab by its index in
//! the window's tab bar, resolved against the model when the step runs.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::messages::{
    AppMsg, ChallengeMsg, ChatMsg, LayoutMsg, ModalMsg, Msg, PointerMsg, UiMsg,
};
use crate::model::{AppModel, PairId, PanelType, WindowId};
use crate::runtime::Runtime;

/// A point in page coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// One user gesture
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// Press the split control
    Split,
    Click(Point),
    /// Full drag gesture: start, one hover, drop
    Drag { from: Point, to: Point },
    DragStart(Point),
    DragOver(Point),
    Drop(Point),
    DragEnd,
    /// Activate the tab at `index` in `window`
    Activate { window: u64, index: usize },
    /// Close the tab at `index` in `window`
    Close { window: u64, index: usize },
    /// Add a tab directly, without the modal
    NewTab { window: u64, panel: String },
    OpenNewTab { window: u64 },
    Confirm { panel: String },
    Cancel,
    Ask { query: String },
    NextChallenge,
    PrevChallenge,
    SubmitSolution { solution: String },
    ToggleDebug,
    Resize { width: u32, height: u32 },
    /// Wait for background requests to finish
    Wait,
}

impl Step {
    /// Translate a step into messages against the current model
    pub fn to_msgs(&self, model: &AppModel) -> Vec<Msg> {
        match self {
            Step::Split => vec![Msg::Layout(LayoutMsg::Split)],
            Step::Click(p) => vec![Msg::Pointer(PointerMsg::Click { x: p.x, y: p.y })],
            Step::Drag { from, to } => vec![
                Msg::Pointer(PointerMsg::DragStart {
                    x: from.x,
                    y: from.y,
                }),
                Msg::Pointer(PointerMsg::DragOver { x: to.x, y: to.y }),
                Msg::Pointer(PointerMsg::Drop { x: to.x, y: to.y }),
            ],
            Step::DragStart(p) => vec![Msg::Pointer(PointerMsg::DragStart { x: p.x, y: p.y })],
            Step::DragOver(p) => vec![Msg::Pointer(PointerMsg::DragOver { x: p.x, y: p.y })],
            Step::Drop(p) => vec![Msg::Pointer(PointerMsg::Drop { x: p.x, y: p.y })],
            Step::DragEnd => vec![Msg::Pointer(PointerMsg::DragEnd)],
            Step::Activate { window, index } => tab_at(model, *window, *index)
                .map(|(window, pair)| Msg::Layout(LayoutMsg::ActivatePair { window, pair }))
                .into_iter()
                .collect(),
            Step::Close { window, index } => tab_at(model, *window, *index)
                .map(|(window, pair)| Msg::Layout(LayoutMsg::ClosePair { window, pair }))
                .into_iter()
                .collect(),
            Step::NewTab { window, panel } => vec![Msg::Layout(LayoutMsg::AddPair {
                window: WindowId(*window),
                panel_type: PanelType::new(panel.clone()),
            })],
            Step::OpenNewTab { window } => {
                vec![Msg::Modal(ModalMsg::OpenNewTab(WindowId(*window)))]
            }
            Step::Confirm { panel } => {
                vec![Msg::Modal(ModalMsg::Confirm(PanelType::new(panel.clone())))]
            }
            Step::Cancel => vec![Msg::Modal(ModalMsg::Cancel)],
            Step::Ask { query } => vec![Msg::Chat(ChatMsg::Submit(query.clone()))],
            Step::NextChallenge => vec![Msg::Challenge(ChallengeMsg::Next)],
            Step::PrevChallenge => vec![Msg::Challenge(ChallengeMsg::Previous)],
            Step::SubmitSolution { solution } => {
                vec![Msg::Challenge(ChallengeMsg::Submit(solution.clone()))]
            }
            Step::ToggleDebug => vec![Msg::Ui(UiMsg::ToggleDebugInfo)],
            Step::Resize { width, height } => vec![Msg::App(AppMsg::Resize(*width, *height))],
            Step::Wait => Vec::new(),
        }
    }
}

fn tab_at(model: &AppModel, window: u64, index: usize) -> Option<(WindowId, PairId)> {
    let window_id = WindowId(window);
    let pair = model.workspace.window(window_id)?.pairs.get(index)?;
    Some((window_id, pair.id()))
}

/// A sequence of steps
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Script {
    pub fn parse(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Malformed session script")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("In script {}", path.display()))
    }

    /// Replay every step against the runtime.
    ///
    /// `Wait` steps block until background requests finish or `wait` elapses.
    pub fn run(&self, runtime: &mut Runtime, wait: Duration) {
        for (i, step) in self.steps.iter().enumerate() {
            if *step == Step::Wait {
                runtime.wait_idle(wait);
                continue;
            }
            let msgs = step.to_msgs(&runtime.model);
            if msgs.is_empty() {
                tracing::warn!("Script step {} ({:?}) matched nothing", i + 1, step);
            }
            for msg in msgs {
                runtime.dispatch(msg);
            }
            runtime.process_async_messages();
        }
    }
}
