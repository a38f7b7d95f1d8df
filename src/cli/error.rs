// Error taxonomy for command parsing, execution, and dispatch

use crate::storage::StorageError;
use crate::utils::date::InvalidDateTime;
use thiserror::Error;

/// The closed set of reasons a command can fail to build or run.
///
/// Every variant is recoverable at the session loop: it is shown to the
/// user and the next line is read.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command '{command}'{}", suggestion_text(.suggestion))]
    UnknownCommand {
        command: String,
        suggestion: Option<String>,
    },

    #[error("missing argument: {0}")]
    MissingArgument(&'static str),

    #[error("invalid argument '{name}': expected {expected}")]
    InvalidArgument {
        name: &'static str,
        expected: &'static str,
    },

    #[error(transparent)]
    InvalidDateTime(#[from] InvalidDateTime),

    #[error("task {0} does not exist")]
    IndexOutOfRange(i64),
}

fn suggestion_text(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(keyword) => format!(". Did you mean '{}'?", keyword),
        None => String::new(),
    }
}

/// Everything one dispatched line can fail with: a bad command, or a
/// storage fault while the terminal command writes the file back.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Command(#[from] CommandError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_command_message() {
        let err = CommandError::UnknownCommand {
            command: "marc".to_string(),
            suggestion: Some("mark".to_string()),
        };
        assert_eq!(err.to_string(), "unknown command 'marc'. Did you mean 'mark'?");

        let err = CommandError::UnknownCommand {
            command: "frobnicate".to_string(),
            suggestion: None,
        };
        assert_eq!(err.to_string(), "unknown command 'frobnicate'");
    }

    #[test]
    fn test_argument_messages() {
        assert_eq!(
            CommandError::MissingArgument("by").to_string(),
            "missing argument: by"
        );
        assert_eq!(
            CommandError::InvalidArgument {
                name: "index",
                expected: "an integer"
            }
            .to_string(),
            "invalid argument 'index': expected an integer"
        );
        assert_eq!(
            CommandError::IndexOutOfRange(4).to_string(),
            "task 4 does not exist"
        );
    }
}
