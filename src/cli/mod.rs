pub mod commands;
pub mod error;
pub mod output;
pub mod tokenizer;

pub use commands::*;
pub use error::*;
pub use output::*;
pub use tokenizer::*;

use crate::models::TaskList;
use crate::storage::{Storage, StorageError};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Run an interactive session over stdin/stdout against the given
/// backing file.
///
/// Every command error is shown and the loop continues; the session only
/// ends on the terminal command (which saves the list exactly once) or at
/// end of input. A corrupted data file is reported once at startup and
/// the session starts with an empty list; an unreadable file location is
/// fatal and propagates to the caller.
pub fn run(data_file: PathBuf) -> Result<()> {
    let storage = Storage::new(data_file);
    let mut ui = Ui::new();
    ui.show_greeting();

    let mut tasks = match storage.load() {
        Ok(tasks) => tasks,
        Err(err @ StorageError::Corrupted { .. }) => {
            // The file's contents are lost, but not silently.
            ui.show_error(&err.to_string());
            TaskList::new()
        }
        Err(StorageError::Io(err)) => {
            return Err(err).with_context(|| {
                format!("failed to open data file {}", storage.path().display())
            });
        }
    };

    loop {
        let Some(line) = ui.read_line().context("failed to read input")? else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        log::debug!("dispatching {:?}", line);
        match dispatch(line, &mut tasks, &storage) {
            Ok(outcome) => {
                ui.show(&outcome.message);
                if outcome.exit {
                    break;
                }
            }
            Err(err) => ui.show_error(&err.to_string()),
        }
    }

    Ok(())
}
