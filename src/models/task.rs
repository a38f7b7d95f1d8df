use crate::utils::date::format_date_time;
use chrono::NaiveDateTime;
use std::fmt;

/// Variant-specific payload of a task.
///
/// `Event` does not require `from` to precede `to`; inverted ranges are
/// accepted and stored as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskKind {
    Todo,
    Deadline { by: NaiveDateTime },
    Event { from: NaiveDateTime, to: NaiveDateTime },
}

impl TaskKind {
    /// Single-letter tag identifying the variant, used by display and by
    /// the storage codec.
    pub fn type_tag(&self) -> char {
        match self {
            TaskKind::Todo => 'T',
            TaskKind::Deadline { .. } => 'D',
            TaskKind::Event { .. } => 'E',
        }
    }
}

/// A user-tracked to-do item.
///
/// The description is non-empty after trimming; that is enforced where
/// tasks are built from user input, not re-checked here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub description: String,
    pub done: bool,
    pub kind: TaskKind,
}

impl Task {
    pub fn todo(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            done: false,
            kind: TaskKind::Todo,
        }
    }

    pub fn deadline(description: impl Into<String>, by: NaiveDateTime) -> Self {
        Self {
            description: description.into(),
            done: false,
            kind: TaskKind::Deadline { by },
        }
    }

    pub fn event(description: impl Into<String>, from: NaiveDateTime, to: NaiveDateTime) -> Self {
        Self {
            description: description.into(),
            done: false,
            kind: TaskKind::Event { from, to },
        }
    }

    /// Mark this task as done.
    pub fn mark(&mut self) {
        self.done = true;
    }

    /// Mark this task as not done.
    pub fn unmark(&mut self) {
        self.done = false;
    }

    /// "X" for a done task, a space otherwise.
    pub fn status_icon(&self) -> char {
        if self.done {
            'X'
        } else {
            ' '
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}][{}] {}",
            self.kind.type_tag(),
            self.status_icon(),
            self.description
        )?;
        match &self.kind {
            TaskKind::Todo => Ok(()),
            TaskKind::Deadline { by } => write!(f, " (by: {})", format_date_time(by)),
            TaskKind::Event { from, to } => write!(
                f,
                " (from: {} to: {})",
                format_date_time(from),
                format_date_time(to)
            ),
        }
    }
}
