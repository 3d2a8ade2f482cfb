//! Plain-text rendering of a view snapshot.

use tasklist_core::ViewSnapshot;

/// Heading printed at the top of every screen.
pub const TITLE: &str = "Todo List";
/// Shown instead of rows when the list is empty.
pub const EMPTY_MESSAGE: &str = "No todos yet. Add some tasks to get started!";
/// Sort button label while completed tasks sit at the bottom.
pub const SORT_ON_LABEL: &str = "Show All";
/// Sort button label while tasks show in insertion order.
pub const SORT_OFF_LABEL: &str = "Move Completed to Bottom";

/// Command reference printed by `help`.
pub const HELP_TEXT: &str = "\
commands:
  add <text>     add a task (alias: a)
  toggle <n>     mark row n done/undone (aliases: t, x)
  remove <n>     delete row n (aliases: rm, d)
  sort           move completed to bottom / show all (alias: s)
  help           show this help (aliases: h, ?)
  quit           leave (aliases: q, exit)";

/// Label of the sort button for the current mode.
pub fn sort_button_label(sort_completed_to_bottom: bool) -> &'static str {
    if sort_completed_to_bottom {
        SORT_ON_LABEL
    } else {
        SORT_OFF_LABEL
    }
}

/// Renders the whole screen for one snapshot.
pub fn render(snapshot: &ViewSnapshot) -> String {
    let mut out = String::new();
    out.push_str(TITLE);
    out.push('\n');
    out.push_str(&format!(
        "[s] {}    {} remaining\n",
        sort_button_label(snapshot.sort_completed_to_bottom),
        snapshot.remaining
    ));

    if snapshot.is_empty {
        out.push_str(EMPTY_MESSAGE);
        out.push('\n');
        return out;
    }

    for (index, task) in snapshot.tasks.iter().enumerate() {
        let mark = if task.completed { 'x' } else { ' ' };
        out.push_str(&format!("{:>3}. [{mark}] {}\n", index + 1, task.text()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{render, sort_button_label, EMPTY_MESSAGE, SORT_OFF_LABEL, SORT_ON_LABEL};
    use tasklist_core::TaskView;

    #[test]
    fn button_label_follows_mode() {
        assert_eq!(sort_button_label(true), SORT_ON_LABEL);
        assert_eq!(sort_button_label(false), SORT_OFF_LABEL);
    }

    #[test]
    fn empty_view_shows_empty_message() {
        let screen = render(&TaskView::new().snapshot());
        assert!(screen.contains(EMPTY_MESSAGE));
        assert!(screen.contains("0 remaining"));
        assert!(screen.contains(SORT_OFF_LABEL));
    }

    #[test]
    fn rows_show_number_and_mark() {
        let mut view = TaskView::new();
        let id = view.add("first").expect("non-blank text should be added").id();
        view.add("second");
        view.toggle(id);

        let screen = render(&view.snapshot());
        assert!(screen.contains("  1. [x] first\n"));
        assert!(screen.contains("  2. [ ] second\n"));
        assert!(screen.contains("1 remaining"));
        assert!(!screen.contains(EMPTY_MESSAGE));
    }
}
