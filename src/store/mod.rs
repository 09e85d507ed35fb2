//! Persistence layer for ticklist.
//!
//! A task list lives in one UTF-8 text file, one record per line. Fields of a
//! rich record are separated by [`DELIMITER`]:
//!
//! ```text
//! Buy milk|2|False
//! Call mom|5|True
//! ```
//!
//! A plain record is the raw line. The whole file is read on every
//! operation and rewritten in full after every change.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use ticklist::libs::task::Task;
//! use ticklist::store::task_file::TaskFile;
//!
//! let store: TaskFile<Task> = TaskFile::new("todo_list.txt");
//! let mut tasks = store.load()?;
//! tasks.push(Task::new("Buy milk", 2));
//! store.save(&tasks)?;
//! # Ok::<(), ticklist::store::StoreError>(())
//! ```

pub mod record;
pub mod task_file;

use std::path::PathBuf;
use thiserror::Error;

/// Separator between the fields of a rich record.
pub const DELIMITER: char = '|';

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access task file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: expected {expected} fields separated by '|', found {found}")]
    FieldCount { line: usize, expected: usize, found: usize },
    #[error("line {line}: priority '{value}' is not an integer")]
    Priority { line: usize, value: String },
}
