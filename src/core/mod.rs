// Public modules
pub mod action;
pub mod actions;
pub mod config;
pub mod error;
pub mod watcher;

// Re-export common types for convenience
pub use action::{Action, MatchOption};
pub use actions::{command_from_actions, command_from_args};
pub use error::{Error, ErrorCode, Result};
pub use watcher::{Invocation, WatcherConfig};
