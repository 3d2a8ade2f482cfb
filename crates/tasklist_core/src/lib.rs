//! Core domain logic for the task list editor.
//! This crate is the single source of truth for list invariants; any
//! presentation layer renders from it and forwards intents into it.

pub mod logging;
pub mod model;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::display_mode::DisplayMode;
pub use model::task::{Task, TaskId, TaskValidationError};
pub use model::task_list::TaskList;
pub use service::task_view::{TaskView, ViewSnapshot};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
