//! Generic utility primitives with zero domain knowledge.
//!
//! - `io` - File and spec-source reading with consistent error handling
//! - `shell` - Shell escaping, quoting, and quoting strategies

pub mod io;
pub mod shell;
