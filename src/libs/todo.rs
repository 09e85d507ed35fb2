//! To-do list operations.
//!
//! Each operation reloads the task file, works on the in-memory copy and,
//! when something changed, writes the whole list back before returning a
//! [`Message`] describing the outcome. Task numbers are 1-based positions
//! in the file; anything outside `1..=len` yields
//! [`Message::InvalidTaskNumber`] and leaves the file untouched.

use super::messages::Message;
use super::task::{is_single_line, is_storable_description, PlainTask, SortKey, Task};
use crate::store::record::Record;
use crate::store::task_file::TaskFile;
use crate::store::StoreError;
use std::fmt::Display;

pub struct TodoList<R> {
    store: TaskFile<R>,
}

/// Maps a 1-based task number onto a vector index.
fn position(number: i64, len: usize) -> Option<usize> {
    usize::try_from(number).ok().filter(|n| (1..=len).contains(n)).map(|n| n - 1)
}

impl<R: Record + Display> TodoList<R> {
    pub fn new(store: TaskFile<R>) -> Self {
        TodoList { store }
    }

    pub fn store(&self) -> &TaskFile<R> {
        &self.store
    }

    pub fn tasks(&self) -> Result<Vec<R>, StoreError> {
        self.store.load()
    }

    pub fn view(&self) -> Result<Message, StoreError> {
        let tasks = self.store.load()?;
        if tasks.is_empty() {
            return Ok(Message::NoTasks);
        }

        let lines = tasks.iter().enumerate().map(|(idx, task)| format!("{}. {}", idx + 1, task)).collect();
        Ok(Message::TaskList(lines))
    }

    pub fn delete(&self, number: i64) -> Result<Message, StoreError> {
        let mut tasks = self.store.load()?;
        let Some(idx) = position(number, tasks.len()) else {
            return Ok(Message::InvalidTaskNumber);
        };

        let removed = tasks.remove(idx);
        self.store.save(&tasks)?;
        Ok(Message::TaskDeleted(removed.description().to_string()))
    }

    /// Case-insensitive substring search over descriptions.
    ///
    /// Matches are numbered by their place in the result, as the list is
    /// shown to the user; the `(#n)` suffix is the number to pass to
    /// delete, complete or edit.
    pub fn search(&self, keyword: &str) -> Result<Message, StoreError> {
        let tasks = self.store.load()?;
        let needle = keyword.to_lowercase();

        let lines: Vec<String> = tasks
            .iter()
            .enumerate()
            .filter(|(_, task)| task.description().to_lowercase().contains(&needle))
            .enumerate()
            .map(|(found, (idx, task))| format!("{}. {} (#{})", found + 1, task, idx + 1))
            .collect();

        if lines.is_empty() {
            return Ok(Message::NoTasksMatching(keyword.to_string()));
        }
        Ok(Message::SearchResults {
            keyword: keyword.to_string(),
            lines,
        })
    }

    fn append(&self, record: R) -> Result<(), StoreError> {
        let mut tasks = self.store.load()?;
        tasks.push(record);
        self.store.save(&tasks)
    }
}

impl TodoList<Task> {
    /// Appends a task. The priority is stored as given.
    pub fn add(&self, description: &str, priority: i32) -> Result<Message, StoreError> {
        if !is_storable_description(description) {
            return Ok(Message::InvalidTaskDescription);
        }

        self.append(Task::new(description, priority))?;
        Ok(Message::TaskAdded {
            description: description.to_string(),
            priority: Some(priority),
        })
    }

    pub fn complete(&self, number: i64) -> Result<Message, StoreError> {
        let mut tasks = self.store.load()?;
        let Some(idx) = position(number, tasks.len()) else {
            return Ok(Message::InvalidTaskNumber);
        };

        tasks[idx].completed = true;
        self.store.save(&tasks)?;
        Ok(Message::TaskCompleted(tasks[idx].description.clone()))
    }

    /// Overwrites description and priority; the completion flag is kept.
    pub fn edit(&self, number: i64, description: &str, priority: i32) -> Result<Message, StoreError> {
        if !is_storable_description(description) {
            return Ok(Message::InvalidTaskDescription);
        }

        let mut tasks = self.store.load()?;
        let Some(idx) = position(number, tasks.len()) else {
            return Ok(Message::InvalidTaskNumber);
        };

        tasks[idx].description = description.to_string();
        tasks[idx].priority = priority;
        self.store.save(&tasks)?;
        Ok(Message::TaskEdited(number))
    }

    /// Stable sort; tasks with equal keys keep their relative order.
    pub fn sort(&self, key: SortKey) -> Result<Message, StoreError> {
        let mut tasks = self.store.load()?;
        match key {
            SortKey::Priority => tasks.sort_by_key(|task| task.priority),
            SortKey::Completed => tasks.sort_by_key(|task| task.completed),
        }
        self.store.save(&tasks)?;
        Ok(Message::TasksSorted(key))
    }
}

impl TodoList<PlainTask> {
    pub fn add(&self, description: &str) -> Result<Message, StoreError> {
        if !is_single_line(description) {
            return Ok(Message::InvalidTaskDescription);
        }

        self.append(PlainTask::new(description))?;
        Ok(Message::TaskAdded {
            description: description.to_string(),
            priority: None,
        })
    }
}
