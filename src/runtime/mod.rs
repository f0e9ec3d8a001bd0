//! Runtime module - command execution and the async message pump
//!
//! - `app` - owns the model, runs the update loop and executes commands

pub mod app;

pub use app::Runtime;
