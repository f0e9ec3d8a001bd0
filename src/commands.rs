//! Side effects requested by the update functions
//!
//! The runtime executes these after each update; network and file work runs
//! on worker threads and reports back as messages.

/// Commands returned by update functions
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Request a re-render of the page
    Redraw,
    /// Send a chat query on a worker thread.
    /// Sends Msg::Chat(Reply) when done
    SendChat { query: String },
    /// Load the challenge document from a path or URL.
    /// Sends Msg::Challenge(Loaded) when done
    LoadChallenges { source: String },
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            // Worker commands redraw once their reply message arrives
            Cmd::SendChat { .. } | Cmd::LoadChallenges { .. } => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
        }
    }

    /// Whether this command spawns background work
    pub fn is_async(&self) -> bool {
        match self {
            Cmd::SendChat { .. } | Cmd::LoadChallenges { .. } => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.is_async()),
            Cmd::None | Cmd::Redraw => false,
        }
    }
}
