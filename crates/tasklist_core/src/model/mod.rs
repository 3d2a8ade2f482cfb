//! Task list domain model.
//!
//! # Responsibility
//! - Define the task record, its id, and the display ordering mode.
//! - Own the ordered in-memory collection and its three mutations.
//!
//! # Invariants
//! - Every task is identified by a `TaskId` that is never reused by its list.
//! - Deletion is a hard delete; there are no tombstones.

pub mod display_mode;
pub mod task;
pub mod task_list;
