//! Terminal entry point.
//!
//! # Responsibility
//! - Resolve settings, start file logging, and run one view session on
//!   stdin/stdout.
//! - Keep going without file logging when the log sink cannot start.

use std::error::Error;
use std::io;
use tasklist_cli::{run_session, CliConfig};
use tasklist_core::{core_version, init_logging, TaskView};

fn main() -> Result<(), Box<dyn Error>> {
    let config = CliConfig::from_env();
    match config.log_dir_str() {
        Some(log_dir) => {
            if let Err(err) = init_logging(&config.log_level, log_dir) {
                eprintln!("tasklist: file logging disabled: {err}");
            }
        }
        None => eprintln!(
            "tasklist: file logging disabled: log_dir `{}` is not valid UTF-8",
            config.log_dir.display()
        ),
    }
    log::info!(
        "event=app_start module=cli status=ok version={} platform={}",
        core_version(),
        std::env::consts::OS
    );

    let mut view = TaskView::new();
    let stdin = io::stdin();
    run_session(&mut view, stdin.lock(), io::stdout().lock())?;
    Ok(())
}
