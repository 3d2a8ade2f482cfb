//! Task domain model.
//!
//! # Responsibility
//! - Define the single to-do entry shown by every view.
//! - Reject blank text at construction time.
//!
//! # Invariants
//! - `id` is assigned once and never changes.
//! - `text` is trimmed and never empty.
//! - `text` has no setter; only `completed` is mutable.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Opaque identifier of one task.
///
/// Issued by [`crate::TaskList`] from a monotonic counter, so an id is never
/// handed out twice within one list, even after the task is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    /// Wraps a raw id value.
    ///
    /// Used by presentation layers that round-trip ids through text.
    pub const fn from_raw(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw numeric value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validation errors for task construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Text is empty or whitespace-only after trimming.
    EmptyText,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyText => write!(f, "task text must not be blank"),
        }
    }
}

impl Error for TaskValidationError {}

/// One to-do entry.
///
/// `Serialize`/`Deserialize` exist for handing tasks to a presentation
/// toolkit that lives across a serialization boundary (a web view or a
/// separate UI process). Nothing is persisted. Deserialization goes through
/// the same blank-text check as [`Task::new`], so a task coming back from
/// such a toolkit never violates the text invariant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TaskWire")]
pub struct Task {
    id: TaskId,
    text: String,
    /// Whether the task is marked done.
    pub completed: bool,
}

impl Task {
    /// Creates an open task from raw user text.
    ///
    /// Leading and trailing whitespace is stripped before storing.
    ///
    /// # Errors
    /// - [`TaskValidationError::EmptyText`] when nothing is left after trimming.
    pub fn new(id: TaskId, raw_text: &str) -> Result<Self, TaskValidationError> {
        let text = raw_text.trim();
        if text.is_empty() {
            return Err(TaskValidationError::EmptyText);
        }
        Ok(Self {
            id,
            text: text.to_string(),
            completed: false,
        })
    }

    /// Id issued when the task was added; never changes.
    pub fn id(&self) -> TaskId {
        self.id
    }

    /// Trimmed, non-empty text; there is no way to edit it.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Flips `completed` and returns the new value.
    pub fn toggle(&mut self) -> bool {
        self.completed = !self.completed;
        self.completed
    }

    /// Number of characters in the stored text.
    ///
    /// Log events carry this instead of the text itself.
    pub fn text_chars(&self) -> usize {
        self.text.chars().count()
    }
}

#[derive(Deserialize)]
struct TaskWire {
    id: TaskId,
    text: String,
    #[serde(default)]
    completed: bool,
}

impl TryFrom<TaskWire> for Task {
    type Error = TaskValidationError;

    fn try_from(value: TaskWire) -> Result<Self, Self::Error> {
        let mut task = Task::new(value.id, &value.text)?;
        task.completed = value.completed;
        Ok(task)
    }
}
