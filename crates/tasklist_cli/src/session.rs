//! Read-eval-render loop over one task view.
//!
//! # Responsibility
//! - Turn input lines into view intents.
//! - Re-render from a fresh snapshot after every line.
//!
//! # Invariants
//! - Row numbers resolve against the snapshot the user last saw.
//! - Bad input produces a notice and no mutation.

use crate::command::{parse_command, Command};
use crate::render::{render, HELP_TEXT};
use log::{debug, info};
use std::io::{self, BufRead, Write};
use tasklist_core::{TaskView, ViewSnapshot};

const PROMPT: &str = "> ";

/// Drives `view` from `input` until `quit` or end of input.
///
/// A line that is not valid UTF-8 is reported and skipped; only I/O
/// failures end the session early.
pub fn run_session<R: BufRead, W: Write>(
    view: &mut TaskView,
    mut input: R,
    mut output: W,
) -> io::Result<()> {
    let mut shown = view.snapshot();
    write_screen(&mut output, &shown)?;

    let mut raw = Vec::new();
    loop {
        raw.clear();
        if input.read_until(b'\n', &mut raw)? == 0 {
            break;
        }
        let Some(line) = decode_line(&raw) else {
            debug!("event=command_parse module=session status=error reason=invalid_utf8");
            writeln!(output, "! input is not valid UTF-8")?;
            write_screen(&mut output, &shown)?;
            continue;
        };
        let command = match parse_command(line) {
            Ok(command) => command,
            Err(err) => {
                debug!("event=command_parse module=session status=error reason=\"{err}\"");
                writeln!(output, "! {err}")?;
                write_screen(&mut output, &shown)?;
                continue;
            }
        };

        if command == Command::Quit {
            break;
        }
        if let Some(notice) = apply(view, &shown, command) {
            writeln!(output, "{notice}")?;
        }

        shown = view.snapshot();
        write_screen(&mut output, &shown)?;
    }

    info!(
        "event=session_end module=session status=ok tasks={} remaining={}",
        view.list().len(),
        view.remaining_count()
    );
    output.flush()
}

/// Applies one command; returns a notice for the user, if any.
fn apply(view: &mut TaskView, shown: &ViewSnapshot, command: Command) -> Option<String> {
    match command {
        Command::Add(text) => {
            view.set_input(text);
            match view.submit() {
                Some(_) => None,
                None => Some("! nothing to add".to_string()),
            }
        }
        Command::Toggle(row) => match shown.id_at_row(row) {
            Some(id) => {
                view.toggle(id);
                None
            }
            None => Some(format!("! no task at row {row}")),
        },
        Command::Remove(row) => match shown.id_at_row(row) {
            Some(id) => {
                view.remove(id);
                None
            }
            None => Some(format!("! no task at row {row}")),
        },
        Command::ToggleSort => {
            view.toggle_display_mode();
            None
        }
        Command::Help => Some(HELP_TEXT.to_string()),
        Command::Quit | Command::Refresh => None,
    }
}

/// Strips the line terminator; `None` when the bytes are not UTF-8.
fn decode_line(raw: &[u8]) -> Option<&str> {
    let line = std::str::from_utf8(raw).ok()?;
    Some(line.trim_end_matches(['\n', '\r']))
}

fn write_screen<W: Write>(output: &mut W, snapshot: &ViewSnapshot) -> io::Result<()> {
    write!(output, "\n{}{PROMPT}", render(snapshot))?;
    output.flush()
}
