use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Priority given to a task when the caller does not supply one.
pub const DEFAULT_PRIORITY: i32 = 3;
/// Inclusive range accepted by the add flow.
pub const PRIORITY_RANGE: std::ops::RangeInclusive<i32> = 1..=5;

/// One entry of a rich to-do list.
///
/// The record itself does not police `priority`; only the add flow checks
/// it against [`PRIORITY_RANGE`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub description: String,
    pub priority: i32,
    pub completed: bool,
}

impl Task {
    pub fn new(description: &str, priority: i32) -> Self {
        Task {
            description: description.to_string(),
            priority,
            completed: false,
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.completed { "✓" } else { "✗" };
        write!(f, "[{}] (Priority: {}) {}", status, self.priority, self.description)
    }
}

/// One entry of a plain to-do list: just the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlainTask {
    pub description: String,
}

impl PlainTask {
    pub fn new(description: &str) -> Self {
        PlainTask {
            description: description.to_string(),
        }
    }
}

impl fmt::Display for PlainTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description)
    }
}

/// Key used to reorder a rich task list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SortKey {
    #[default]
    Priority,
    Completed,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::Priority => write!(f, "priority"),
            SortKey::Completed => write!(f, "completed"),
        }
    }
}

/// Shape of the records kept in a task file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Rich,
    Plain,
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Rich => write!(f, "rich (priority and completion)"),
            Variant::Plain => write!(f, "plain (text only)"),
        }
    }
}

/// Returns `false` when `text` would span more than one line of the task file.
pub fn is_single_line(text: &str) -> bool {
    !text.contains(['\n', '\r'])
}

/// Returns `false` when `description` would break a rich record's fields.
pub fn is_storable_description(description: &str) -> bool {
    is_single_line(description) && !description.contains('|')
}
