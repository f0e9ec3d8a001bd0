//! splitdeck - Elm-style split-window tab workspace
//!
//! This crate provides the core types and logic for a workspace of at most two
//! side-by-side windows whose tabs can be reordered or moved between windows
//! by drag-and-drop, implementing the Elm Architecture pattern.

pub mod challenge;
pub mod chat;
pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod dump;
pub mod messages;
pub mod model;
pub mod runtime;
pub mod script;
pub mod tracing;
pub mod update;
pub mod util;
pub mod view;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::AppConfig;
pub use messages::Msg;
pub use model::AppModel;
pub use runtime::Runtime;
