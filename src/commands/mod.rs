pub mod init;
pub mod shell;
pub mod task;

use crate::libs::{
    config::Config,
    data_storage::DataStorage,
    task::{PlainTask, Task, Variant},
    todo::TodoList,
};
use crate::store::task_file::TaskFile;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Print all tasks as a table")]
    List,
    #[command(about = "Add a task")]
    Add(task::AddArgs),
    #[command(about = "Delete a task by its number")]
    Delete(task::NumberArgs),
    #[command(about = "Mark a task as completed")]
    Done(task::NumberArgs),
    #[command(about = "Replace a task's description and priority")]
    Edit(task::EditArgs),
    #[command(about = "Search tasks by keyword")]
    Search(task::SearchArgs),
    #[command(about = "Sort tasks by priority or completion status")]
    Sort(task::SortArgs),
}

/// Without a subcommand the interactive menu is started.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Task file to use instead of the configured one
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    /// Treat the task file as a plain list of lines
    #[arg(long, global = true)]
    plain: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// A task list opened in the variant chosen by flags or configuration.
pub enum Target {
    Rich(TodoList<Task>),
    Plain(TodoList<PlainTask>),
}

impl Target {
    pub fn open(path: PathBuf, variant: Variant) -> Self {
        match variant {
            Variant::Rich => Target::Rich(TodoList::new(TaskFile::new(path))),
            Variant::Plain => Target::Plain(TodoList::new(TaskFile::new(path))),
        }
    }

    /// Opens the list named by the flags, falling back to the configuration
    /// kept in `storage`. The configuration is only read when a flag leaves
    /// the path or the variant open.
    pub fn resolve(file: Option<PathBuf>, plain: bool, storage: &DataStorage) -> Result<Self> {
        let (path, variant) = match (file, plain) {
            (Some(path), true) => (path, Variant::Plain),
            (Some(path), false) => (path, Config::read_in(storage)?.variant),
            (None, plain) => {
                let config = Config::read_in(storage)?;
                let variant = if plain { Variant::Plain } else { config.variant };
                (config.task_file_path(storage)?, variant)
            }
        };
        Ok(Target::open(path, variant))
    }
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();

        if let Some(Commands::Init(args)) = &cli.command {
            return init::cmd(args);
        }

        let target = Target::resolve(cli.file, cli.plain, &DataStorage::new())?;

        match cli.command {
            None => {
                let mut shell = shell::Shell::new(io::stdin().lock(), io::stdout().lock());
                match &target {
                    Target::Rich(list) => shell.run_rich(list),
                    Target::Plain(list) => shell.run_plain(list),
                }
            }
            Some(Commands::Init(_)) => Ok(()),
            Some(Commands::List) => task::list(&target),
            Some(Commands::Add(args)) => task::add(&target, &args),
            Some(Commands::Delete(args)) => task::delete(&target, &args),
            Some(Commands::Done(args)) => task::done(&target, &args),
            Some(Commands::Edit(args)) => task::edit(&target, &args),
            Some(Commands::Search(args)) => task::search(&target, &args),
            Some(Commands::Sort(args)) => task::sort(&target, &args),
        }
    }
}
