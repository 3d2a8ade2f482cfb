//! View-level services.
//!
//! # Responsibility
//! - Hold the mutable aggregate one view instance owns.
//! - Keep presentation layers decoupled from list internals.

pub mod task_view;
