//! Core library modules for ticklist.
//!
//! ## Features
//!
//! - **Core Infrastructure**: configuration, data directory, messaging
//! - **Task Model**: rich and plain records, sort keys, priority bounds
//! - **Operations**: add, view, delete, complete, edit, search and sort
//! - **User Interface**: console input parsing and table rendering
//!
//! ## Usage
//!
//! ```rust,no_run
//! use ticklist::libs::todo::TodoList;
//! use ticklist::libs::task::Task;
//! use ticklist::store::task_file::TaskFile;
//!
//! let list: TodoList<Task> = TodoList::new(TaskFile::new("todo_list.txt"));
//! println!("{}", list.add("Buy milk", 2)?);
//! println!("{}", list.view()?);
//! # Ok::<(), ticklist::store::StoreError>(())
//! ```

pub mod config;
pub mod data_storage;
pub mod input;
pub mod messages;
pub mod task;
pub mod todo;
pub mod view;
