//! Line-oriented terminal front end for the task list editor.
//!
//! # Responsibility
//! - Render `tasklist_core` snapshots as plain text.
//! - Convert typed commands and row numbers into view intents.

pub mod command;
pub mod config;
pub mod render;
pub mod session;

pub use command::{parse_command, Command, CommandError};
pub use config::CliConfig;
pub use session::run_session;
