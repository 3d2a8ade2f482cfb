//! In-memory ordered task collection.
//!
//! # Responsibility
//! - Own tasks in insertion (base) order.
//! - Issue task ids and apply add/toggle/remove.
//! - Derive display order and counts on demand.
//!
//! # Invariants
//! - Ids in the list are pairwise distinct.
//! - Ids come from a counter that only moves forward; a removed id is never
//!   issued again by the same list.
//! - Every operation is total: blank text or unknown ids are no-ops.
//! - Derived values are recomputed from the live list on every call.

use crate::model::display_mode::DisplayMode;
use crate::model::task::{Task, TaskId};
use log::debug;

/// Ordered, in-memory list of tasks.
#[derive(Debug, Clone, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
    next_id: u64,
}

impl TaskList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a task built from `raw_text`.
    ///
    /// Returns the created task, or `None` when the trimmed text is empty.
    /// A rejected add does not consume an id.
    pub fn add(&mut self, raw_text: &str) -> Option<&Task> {
        let id = TaskId::from_raw(self.next_id);
        let task = match Task::new(id, raw_text) {
            Ok(task) => task,
            Err(err) => {
                debug!("event=task_add module=task_list status=noop reason=\"{err}\"");
                return None;
            }
        };
        self.next_id += 1;

        debug!(
            "event=task_add module=task_list status=ok id={} text_chars={} len={}",
            id,
            task.text_chars(),
            self.tasks.len() + 1
        );
        self.tasks.push(task);
        self.tasks.last()
    }

    /// Flips `completed` on the task with `id`.
    ///
    /// Returns the new completed value, or `None` when no such task exists.
    pub fn toggle(&mut self, id: TaskId) -> Option<bool> {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id() == id) else {
            debug!("event=task_toggle module=task_list status=noop id={id}");
            return None;
        };
        let completed = task.toggle();
        debug!("event=task_toggle module=task_list status=ok id={id} completed={completed}");
        Some(completed)
    }

    /// Deletes the task with `id`, keeping the others in order.
    ///
    /// Returns the removed task, or `None` when no such task exists.
    pub fn remove(&mut self, id: TaskId) -> Option<Task> {
        let Some(index) = self.position(id) else {
            debug!("event=task_remove module=task_list status=noop id={id}");
            return None;
        };
        let removed = self.tasks.remove(index);
        debug!(
            "event=task_remove module=task_list status=ok id={id} len={}",
            self.tasks.len()
        );
        Some(removed)
    }

    /// Returns tasks in the order a view should show them.
    ///
    /// `CompletedLast` is a stable partition: open tasks first, then
    /// completed ones, each group in base order.
    pub fn display_order(&self, mode: DisplayMode) -> Vec<&Task> {
        match mode {
            DisplayMode::InsertionOrder => self.tasks.iter().collect(),
            DisplayMode::CompletedLast => {
                let (open, done): (Vec<&Task>, Vec<&Task>) =
                    self.tasks.iter().partition(|task| !task.completed);
                open.into_iter().chain(done).collect()
            }
        }
    }

    /// Number of tasks not yet completed.
    pub fn remaining_count(&self) -> usize {
        self.tasks.iter().filter(|task| !task.completed).count()
    }

    /// Number of completed tasks.
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.completed).count()
    }

    /// Total number of tasks, open and completed.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// True when the list holds no tasks; drives the empty-state message.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Looks up one task by id.
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Returns whether a task with `id` is currently in the list.
    pub fn contains(&self, id: TaskId) -> bool {
        self.position(id).is_some()
    }

    /// Iterates tasks in base order.
    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id() == id)
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
