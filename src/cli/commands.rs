// Command construction and dispatch
//
// The command set is a closed table: each variant declares its keyword,
// whether it ends the session, and how to build itself from a tokenized
// line. All argument validation happens at construction, before the task
// list is touched; execution can only fail on runtime conditions (an
// index that does not exist, a storage fault on the final save).

use crate::cli::error::{CommandError, SessionError};
use crate::cli::tokenizer::{tokenize, Tokens, POSITIONAL};
use crate::models::{Task, TaskList};
use crate::storage::Storage;
use crate::utils::date::parse_date_time;
use crate::utils::fuzzy;
use chrono::NaiveDateTime;
use std::fmt::Write as _;

/// Result of executing a command: the confirmation text shown to the
/// user and whether the session should stop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub message: String,
    pub exit: bool,
}

impl Outcome {
    fn message(text: impl Into<String>) -> Self {
        Self {
            message: text.into(),
            exit: false,
        }
    }
}

/// A validated operation against the task list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Todo {
        description: String,
    },
    Deadline {
        description: String,
        by: NaiveDateTime,
    },
    Event {
        description: String,
        from: NaiveDateTime,
        to: NaiveDateTime,
    },
    /// 1-based index as the user typed it; range-checked at execution.
    Mark {
        index: i64,
    },
    Unmark {
        index: i64,
    },
    Delete {
        index: i64,
    },
    Bye,
}

/// Keywords the dispatcher recognizes, used for lookup and for typo
/// suggestions.
pub const KEYWORDS: &[&str] = &[
    "list", "todo", "deadline", "event", "mark", "unmark", "delete", "bye",
];

impl Command {
    /// Build a command from a tokenized line, validating every argument.
    pub fn parse(tokens: &Tokens) -> Result<Self, CommandError> {
        match tokens.command.as_str() {
            "list" => Ok(Command::List),
            "todo" => Ok(Command::Todo {
                description: require_description(tokens)?,
            }),
            "deadline" => Ok(Command::Deadline {
                description: require_description(tokens)?,
                by: require_date_time(tokens, "by")?,
            }),
            "event" => Ok(Command::Event {
                description: require_description(tokens)?,
                from: require_date_time(tokens, "from")?,
                to: require_date_time(tokens, "to")?,
            }),
            "mark" => Ok(Command::Mark {
                index: require_index(tokens)?,
            }),
            "unmark" => Ok(Command::Unmark {
                index: require_index(tokens)?,
            }),
            "delete" => Ok(Command::Delete {
                index: require_index(tokens)?,
            }),
            "bye" => Ok(Command::Bye),
            other => Err(CommandError::UnknownCommand {
                command: other.to_string(),
                suggestion: fuzzy::find_closest(other, KEYWORDS, 2).map(str::to_string),
            }),
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            Command::List => "list",
            Command::Todo { .. } => "todo",
            Command::Deadline { .. } => "deadline",
            Command::Event { .. } => "event",
            Command::Mark { .. } => "mark",
            Command::Unmark { .. } => "unmark",
            Command::Delete { .. } => "delete",
            Command::Bye => "bye",
        }
    }

    /// Whether executing this command ends the session.
    pub fn is_exit(&self) -> bool {
        matches!(self, Command::Bye)
    }

    /// Run the command against the task list.
    pub fn execute(&self, tasks: &mut TaskList) -> Result<Outcome, CommandError> {
        match self {
            Command::List => Ok(Outcome::message(render_list(tasks))),
            Command::Todo { description } => {
                Ok(added(tasks, Task::todo(description.clone())))
            }
            Command::Deadline { description, by } => {
                Ok(added(tasks, Task::deadline(description.clone(), *by)))
            }
            Command::Event {
                description,
                from,
                to,
            } => Ok(added(tasks, Task::event(description.clone(), *from, *to))),
            Command::Mark { index } => {
                let i = checked_index(tasks, *index)?;
                let task = tasks.get_mut(i).ok_or(CommandError::IndexOutOfRange(*index))?;
                task.mark();
                Ok(Outcome::message(format!(
                    "Nice! I've marked this task as done:\n  {}",
                    task
                )))
            }
            Command::Unmark { index } => {
                let i = checked_index(tasks, *index)?;
                let task = tasks.get_mut(i).ok_or(CommandError::IndexOutOfRange(*index))?;
                task.unmark();
                Ok(Outcome::message(format!(
                    "OK, I've marked this task as not done yet:\n  {}",
                    task
                )))
            }
            Command::Delete { index } => {
                let i = checked_index(tasks, *index)?;
                let task = tasks.remove(i).ok_or(CommandError::IndexOutOfRange(*index))?;
                Ok(Outcome::message(format!(
                    "Noted. I've removed this task:\n  {}\nNow you have {} task(s) in the list.",
                    task,
                    tasks.len()
                )))
            }
            Command::Bye => Ok(Outcome {
                message: "Bye. Hope to see you again soon!".to_string(),
                exit: true,
            }),
        }
    }
}

/// Tokenize, construct, and execute one raw input line.
///
/// The terminal command is the only one that writes the list back to
/// storage; failed commands leave both the list and the file untouched.
pub fn dispatch(line: &str, tasks: &mut TaskList, storage: &Storage) -> Result<Outcome, SessionError> {
    let tokens = tokenize(line);
    let command = Command::parse(&tokens)?;
    let outcome = command.execute(tasks)?;
    if command.is_exit() {
        storage.save(tasks)?;
    }
    Ok(outcome)
}

fn added(tasks: &mut TaskList, task: Task) -> Outcome {
    let line = task.to_string();
    tasks.push(task);
    Outcome::message(format!(
        "Got it. I've added this task:\n  {}\nNow you have {} task(s) in the list.",
        line,
        tasks.len()
    ))
}

fn render_list(tasks: &TaskList) -> String {
    if tasks.is_empty() {
        return "You have no tasks in your list.".to_string();
    }
    let mut out = String::from("Here are the tasks in your list:");
    for (i, task) in tasks.iter().enumerate() {
        let _ = write!(out, "\n{}.{}", i + 1, task);
    }
    out
}

fn require_description(tokens: &Tokens) -> Result<String, CommandError> {
    match tokens.get(POSITIONAL).map(str::trim) {
        Some(description) if !description.is_empty() => Ok(description.to_string()),
        _ => Err(CommandError::MissingArgument("description")),
    }
}

fn require_date_time(tokens: &Tokens, name: &'static str) -> Result<NaiveDateTime, CommandError> {
    match tokens.get(name) {
        Some(text) if !text.is_empty() => Ok(parse_date_time(text)?),
        _ => Err(CommandError::MissingArgument(name)),
    }
}

fn require_index(tokens: &Tokens) -> Result<i64, CommandError> {
    let text = tokens
        .get(POSITIONAL)
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or(CommandError::MissingArgument("index"))?;
    text.parse().map_err(|_| CommandError::InvalidArgument {
        name: "index",
        expected: "an integer",
    })
}

/// Map a user-facing 1-based index onto the list, rejecting 0, negatives,
/// and anything past the end.
fn checked_index(tasks: &TaskList, index: i64) -> Result<usize, CommandError> {
    if index >= 1 && index <= tasks.len() as i64 {
        Ok((index - 1) as usize)
    } else {
        Err(CommandError::IndexOutOfRange(index))
    }
}
