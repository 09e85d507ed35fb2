//! Display implementation for ticklist messages.
//!
//! Every user-facing string in the application is produced here, so the shell,
//! the one-shot subcommands and the tests all agree on the exact wording.
//!
//! ## Message Categories
//!
//! - **Task Messages**: results of add, delete, complete, edit, view, search and sort
//! - **Shell Messages**: menus and input validation feedback
//! - **Store Messages**: debug output from the task file layer
//! - **Configuration Messages**: wizard output and prompts
//!
//! ## Prompts
//!
//! Shell prompts keep their trailing `": "` because the shell writes them
//! without a newline and reads the answer on the same line. Wizard prompts
//! go through `dialoguer`, which adds its own separator.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    /// Converts a `Message` variant into the text shown to the user.
    ///
    /// Multi-line messages (task lists, search results, menus) are joined
    /// with `\n` and carry no trailing newline; callers decide how to
    /// terminate them.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskAdded {
                description,
                priority: Some(priority),
            } => format!("Task \"{}\" added with priority {}.", description, priority),
            Message::TaskAdded { description, priority: None } => format!("Task \"{}\" added.", description),
            Message::TaskDeleted(description) => format!("Task \"{}\" deleted.", description),
            Message::TaskCompleted(description) => format!("Task \"{}\" marked as completed.", description),
            Message::TaskEdited(number) => format!("Task {} updated.", number),
            Message::InvalidTaskNumber => "Invalid task number.".to_string(),
            Message::InvalidTaskDescription => "Task descriptions cannot contain '|' or line breaks.".to_string(),
            Message::NoTasks => "No tasks in the to-do list.".to_string(),
            Message::TaskList(lines) => {
                let mut text = "To-Do List:".to_string();
                for line in lines {
                    text.push('\n');
                    text.push_str(line);
                }
                text
            }
            Message::SearchResults { keyword, lines } => {
                let mut text = format!("Tasks containing '{}':", keyword);
                for line in lines {
                    text.push('\n');
                    text.push_str(line);
                }
                text
            }
            Message::NoTasksMatching(keyword) => format!("No tasks found containing '{}'.", keyword),
            Message::TasksSorted(key) => format!("Tasks sorted by {}.", key),
            Message::TaskTableHeader => "To-Do List".to_string(),
            Message::PlainVariantUnsupported => "This command is not available for plain task lists.".to_string(),
            Message::PriorityUnsupportedForPlain => "Plain task lists do not store a priority; drop --priority.".to_string(),

            // === SHELL MESSAGES ===
            Message::RichMenu => [
                "To-Do List Application",
                "1. View tasks",
                "2. Add task",
                "3. Delete task",
                "4. Mark task as completed",
                "5. Edit task",
                "6. Search tasks",
                "7. Sort tasks by priority",
                "8. Sort tasks by completion status",
                "9. Exit",
            ]
            .join("\n"),
            Message::PlainMenu => ["To-Do List Application", "1. View tasks", "2. Add task", "3. Delete task", "4. Exit"].join("\n"),
            Message::InvalidChoice => "Invalid choice. Please try again.".to_string(),
            Message::InvalidPriority => "Please enter a valid priority (1-5).".to_string(),
            Message::InvalidNumber => "Please enter a valid number.".to_string(),
            Message::InvalidInputs => "Please enter valid inputs.".to_string(),
            Message::ExitingApplication => "Exiting the application.".to_string(),

            // === STORE MESSAGES ===
            Message::TasksLoaded(count, path) => format!("Loaded {} task(s) from {}", count, path),
            Message::TasksSaved(count, path) => format!("Saved {} task(s) to {}", count, path),
            Message::TaskFileMissing(path) => format!("Task file {} does not exist yet, starting empty", path),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigAlreadyAbsent => "No configuration to remove".to_string(),
            Message::ConfigModuleTaskFile => "Task list settings".to_string(),

            // === PROMPTS ===
            Message::PromptChoice => "Enter your choice: ".to_string(),
            Message::PromptTaskDescription => "Enter the task description: ".to_string(),
            Message::PromptTaskPriority => "Enter the task priority (1-5): ".to_string(),
            Message::PromptDeleteNumber => "Enter the task number to delete: ".to_string(),
            Message::PromptCompleteNumber => "Enter the task number to mark as completed: ".to_string(),
            Message::PromptEditNumber => "Enter the task number to edit: ".to_string(),
            Message::PromptNewDescription => "Enter the new task description: ".to_string(),
            Message::PromptNewPriority => "Enter the new task priority (1-5): ".to_string(),
            Message::PromptSearchKeyword => "Enter the keyword to search for: ".to_string(),
            Message::PromptTaskFile => "Path to the task file".to_string(),
            Message::PromptVariant => "Task list kind".to_string(),

            // === GENERAL MESSAGES ===
            Message::OperationFailed(error) => format!("Operation failed: {}", error),
        };

        write!(f, "{}", text)
    }
}
