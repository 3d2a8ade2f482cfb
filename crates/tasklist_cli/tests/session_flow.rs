use std::io::Cursor;
use tasklist_cli::render::{EMPTY_MESSAGE, SORT_OFF_LABEL, SORT_ON_LABEL};
use tasklist_cli::run_session;
use tasklist_core::TaskView;

fn run(script: &str) -> (TaskView, String) {
    let mut view = TaskView::new();
    let mut output = Vec::new();
    run_session(&mut view, Cursor::new(script.to_string()), &mut output)
        .expect("in-memory session should not fail");
    (view, String::from_utf8(output).expect("rendered output should be UTF-8"))
}

fn last_screen(output: &str) -> &str {
    let start = output
        .rfind("Todo List")
        .expect("output should contain at least one screen");
    &output[start..]
}

#[test]
fn add_toggle_sort_remove_flow() {
    let (view, output) = run("add A\nadd B\nadd C\ntoggle 1\nsort\n");

    let screen = last_screen(&output);
    assert!(screen.contains(SORT_ON_LABEL));
    assert!(screen.contains("2 remaining"));
    assert!(screen.contains("  1. [ ] B\n"));
    assert!(screen.contains("  2. [ ] C\n"));
    assert!(screen.contains("  3. [x] A\n"));
    assert_eq!(view.list().len(), 3);
    assert!(view.sort_completed_to_bottom());
}

#[test]
fn rows_follow_the_sorted_screen() {
    // After sorting, row 3 is A; removing it leaves B and C.
    let (view, _) = run("add A\nadd B\nadd C\nx 1\ns\nrm 3\n");

    let texts: Vec<&str> = view.list().iter().map(|task| task.text()).collect();
    assert_eq!(texts, vec!["B", "C"]);
    assert_eq!(view.remaining_count(), 2);
}

#[test]
fn bad_input_does_not_mutate() {
    let (view, output) = run("add one\nedit 1\ntoggle 9\nrm\nadd    \n");

    assert!(output.contains("! unknown command `edit`"));
    assert!(output.contains("! no task at row 9"));
    assert!(output.contains("! `remove` needs a row number"));
    assert!(output.contains("! nothing to add"));
    assert_eq!(view.list().len(), 1);
    assert_eq!(view.remaining_count(), 1);
}

#[test]
fn quit_stops_reading_input() {
    let (view, output) = run("add kept\nquit\nadd ignored\n");

    assert_eq!(view.list().len(), 1);
    assert!(!output.contains("ignored"));
}

#[test]
fn emptying_the_list_shows_empty_message_again() {
    let (view, output) = run("add task1\nt 1\nd 1\n");

    assert!(view.is_empty());
    let screen = last_screen(&output);
    assert!(screen.contains(EMPTY_MESSAGE));
    assert!(screen.contains(SORT_OFF_LABEL));
    assert!(screen.contains("0 remaining"));
}

#[test]
fn invalid_utf8_line_is_reported_and_session_continues() {
    let mut input = b"add one\n".to_vec();
    input.extend_from_slice(b"add caf\xe9\n");
    input.extend_from_slice(b"add two\n");

    let mut view = TaskView::new();
    let mut output = Vec::new();
    run_session(&mut view, Cursor::new(input), &mut output)
        .expect("bad bytes in one line should not end the session");

    let output = String::from_utf8(output).expect("rendered output should be UTF-8");
    assert!(output.contains("! input is not valid UTF-8"));
    let texts: Vec<&str> = view.list().iter().map(|task| task.text()).collect();
    assert_eq!(texts, vec!["one", "two"]);
}

#[test]
fn crlf_line_endings_are_accepted() {
    let (view, output) = run("add one\r\nadd two\r\nx 2\r\n");

    assert!(!output.contains("! "));
    assert_eq!(view.list().len(), 2);
    assert_eq!(view.remaining_count(), 1);
}
