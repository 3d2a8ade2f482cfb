//! View aggregate for a single task list screen.
//!
//! # Responsibility
//! - Own `{ list, display mode, pending input }` for one view instance.
//! - Expose the intents a presentation layer forwards (add, toggle, remove,
//!   display mode) and the read side it renders from.
//!
//! # Invariants
//! - State changes only through `TaskView` methods; there is no shared or
//!   global copy.
//! - The pending input is cleared by a successful submit and left as typed
//!   after a rejected one.
//! - `snapshot()` is always built from live state.

use crate::model::display_mode::DisplayMode;
use crate::model::task::{Task, TaskId};
use crate::model::task_list::TaskList;
use log::debug;
use serde::Serialize;

/// Render-ready copy of a view's state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewSnapshot {
    /// Tasks in display order.
    pub tasks: Vec<Task>,
    /// Count of tasks not yet completed.
    pub remaining: usize,
    /// Drives the empty-state message.
    pub is_empty: bool,
    /// Current sort button state.
    pub sort_completed_to_bottom: bool,
    /// Text currently in the input box.
    pub pending_input: String,
}

impl ViewSnapshot {
    /// Maps a 1-based display row to the task id shown there.
    pub fn id_at_row(&self, row: usize) -> Option<TaskId> {
        row.checked_sub(1)
            .and_then(|index| self.tasks.get(index))
            .map(Task::id)
    }
}

/// Mutable state owned by one task list view.
#[derive(Debug, Clone, Default)]
pub struct TaskView {
    list: TaskList,
    display_mode: DisplayMode,
    pending_input: String,
}

impl TaskView {
    /// Creates a view with an empty list and insertion-order display.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the pending input text.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.pending_input = text.into();
    }

    /// Text currently held in the input buffer.
    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    /// Adds the pending input as a new task.
    ///
    /// # Contract
    /// - Success: returns the created task and clears the input.
    /// - Blank input: returns `None` and keeps the input unchanged.
    pub fn submit(&mut self) -> Option<Task> {
        let created = self.list.add(&self.pending_input).cloned();
        if created.is_some() {
            self.pending_input.clear();
        }
        created
    }

    /// Adds `raw_text` without going through the input buffer.
    pub fn add(&mut self, raw_text: &str) -> Option<Task> {
        self.list.add(raw_text).cloned()
    }

    /// Flips completion of one task; unknown ids are ignored.
    pub fn toggle(&mut self, id: TaskId) -> Option<bool> {
        self.list.toggle(id)
    }

    /// Deletes one task; unknown ids are ignored.
    pub fn remove(&mut self, id: TaskId) -> Option<Task> {
        self.list.remove(id)
    }

    /// Sets whether completed tasks sink to the bottom.
    pub fn set_display_mode(&mut self, sort_completed_to_bottom: bool) {
        self.apply_display_mode(DisplayMode::from(sort_completed_to_bottom));
    }

    /// Flips the display mode, as the sort button does.
    pub fn toggle_display_mode(&mut self) -> DisplayMode {
        self.apply_display_mode(self.display_mode.toggled());
        self.display_mode
    }

    /// Current display ordering mode.
    pub fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }

    /// Sort button state.
    pub fn sort_completed_to_bottom(&self) -> bool {
        self.display_mode.sort_completed_to_bottom()
    }

    /// Tasks in the order the view shows them under the current mode.
    pub fn display_order(&self) -> Vec<&Task> {
        self.list.display_order(self.display_mode)
    }

    /// Number of open tasks, recomputed on every call.
    pub fn remaining_count(&self) -> usize {
        self.list.remaining_count()
    }

    /// True when the list holds no tasks.
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Read access to the underlying list in base order.
    pub fn list(&self) -> &TaskList {
        &self.list
    }

    /// Builds an owned snapshot for rendering.
    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            tasks: self.display_order().into_iter().cloned().collect(),
            remaining: self.remaining_count(),
            is_empty: self.is_empty(),
            sort_completed_to_bottom: self.sort_completed_to_bottom(),
            pending_input: self.pending_input.clone(),
        }
    }

    fn apply_display_mode(&mut self, mode: DisplayMode) {
        debug!(
            "event=display_mode_set module=task_view status=ok from={} to={}",
            self.display_mode.as_str(),
            mode.as_str()
        );
        self.display_mode = mode;
    }
}

#[cfg(test)]
mod tests {
    use super::TaskView;

    #[test]
    fn snapshot_rows_are_one_based() {
        let mut view = TaskView::new();
        let first = view.add("first").expect("non-blank text should be added").id();
        let second = view.add("second").expect("non-blank text should be added").id();

        let snapshot = view.snapshot();
        assert_eq!(snapshot.id_at_row(0), None);
        assert_eq!(snapshot.id_at_row(1), Some(first));
        assert_eq!(snapshot.id_at_row(2), Some(second));
        assert_eq!(snapshot.id_at_row(3), None);
    }

    #[test]
    fn snapshot_rows_follow_display_order() {
        let mut view = TaskView::new();
        let first = view.add("first").expect("non-blank text should be added").id();
        let second = view.add("second").expect("non-blank text should be added").id();
        view.toggle(first);
        view.set_display_mode(true);

        let snapshot = view.snapshot();
        assert_eq!(snapshot.id_at_row(1), Some(second));
        assert_eq!(snapshot.id_at_row(2), Some(first));
    }

    #[test]
    fn direct_add_leaves_pending_input_alone() {
        let mut view = TaskView::new();
        view.set_input("draft");
        view.add("other").expect("non-blank text should be added");
        assert_eq!(view.pending_input(), "draft");
    }
}
