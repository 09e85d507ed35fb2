//! # Ticklist - a personal to-do list manager
//!
//! A command-line to-do list that keeps its tasks in one plain text file.
//!
//! ## Features
//!
//! - **Interactive Menu**: view, add, delete, complete, edit, search and sort
//! - **One-shot Commands**: the same operations as `clap` subcommands
//! - **Two List Kinds**: rich tasks with priority and completion, or plain lines
//! - **Readable Storage**: `description|priority|completed`, one task per line
//!
//! ## Usage
//!
//! ```rust,no_run
//! use ticklist::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;
pub mod store;
