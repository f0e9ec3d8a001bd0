//! Runtime that owns the model and executes commands
//!
//! Updates run on the owning thread. Commands that do I/O run on spawned
//! threads and report back as messages over an mpsc channel.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::challenge;
use crate::chat::ChatBackend;
use crate::commands::Cmd;
use crate::messages::{ChallengeMsg, ChatMsg, Msg};
use crate::model::AppModel;
use crate::update::update;

pub struct Runtime {
    pub model: AppModel,
    chat: Arc<dyn ChatBackend>,
    msg_tx: Sender<Msg>,
    msg_rx: Receiver<Msg>,
    /// Worker threads whose reply has not been applied yet
    in_flight: usize,
}

impl Runtime {
    pub fn new(model: AppModel, chat: Arc<dyn ChatBackend>) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        Self {
            model,
            chat,
            msg_tx,
            msg_rx,
            in_flight: 0,
        }
    }

    /// Kick off startup work (challenge loading)
    pub fn start(&mut self) -> bool {
        self.dispatch(Msg::Challenge(ChallengeMsg::Load))
    }

    /// Apply a message and execute the resulting command.
    /// Returns true if the page needs re-rendering.
    pub fn dispatch(&mut self, msg: Msg) -> bool {
        match update(&mut self.model, msg) {
            Some(cmd) => {
                let needs_redraw = cmd.needs_redraw();
                self.process_cmd(cmd);
                needs_redraw
            }
            None => false,
        }
    }

    /// Number of worker replies still outstanding
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    fn process_cmd(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::None => {}
            Cmd::Redraw => {}
            Cmd::SendChat { query } => {
                let tx = self.msg_tx.clone();
                let backend = Arc::clone(&self.chat);
                self.in_flight += 1;
                std::thread::spawn(move || {
                    let result = backend.ask(&query).map_err(|e| format!("{:#}", e));
                    let _ = tx.send(Msg::Chat(ChatMsg::Reply(result)));
                });
            }
            Cmd::LoadChallenges { source } => {
                let tx = self.msg_tx.clone();
                self.in_flight += 1;
                std::thread::spawn(move || {
                    let result = challenge::load_document(&source).map_err(|e| format!("{:#}", e));
                    let _ = tx.send(Msg::Challenge(ChallengeMsg::Loaded(result)));
                });
            }
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(cmd);
                }
            }
        }
    }

    /// Apply any worker replies that have already arrived.
    /// Returns true if the page needs re-rendering.
    pub fn process_async_messages(&mut self) -> bool {
        let mut needs_redraw = false;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.in_flight = self.in_flight.saturating_sub(1);
            if self.dispatch(msg) {
                needs_redraw = true;
            }
        }
        needs_redraw
    }

    /// Block until every worker has replied or the timeout elapses.
    /// Returns true if the runtime is idle.
    pub fn wait_idle(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        while self.in_flight > 0 {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.msg_rx.recv_timeout(remaining) {
                Ok(msg) => {
                    self.in_flight -= 1;
                    self.dispatch(msg);
                }
                Err(RecvTimeoutError::Timeout) => {
                    tracing::warn!("{} background task(s) still running", self.in_flight);
                    return false;
                }
                Err(RecvTimeoutError::Disconnected) => {
                    self.in_flight = 0;
                }
            }
        }
        true
    }
}
