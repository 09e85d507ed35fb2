use super::Target;
use crate::{
    libs::{
        messages::Message,
        task::{SortKey, Task, DEFAULT_PRIORITY},
        todo::TodoList,
        view::View,
    },
    msg_error, msg_info, msg_print, msg_success,
};
use anyhow::{bail, Result};
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task description
    #[arg(required = true)]
    pub description: String,
    /// Priority from 1 (most urgent) to 5
    #[arg(short, long, value_parser = clap::value_parser!(i32).range(1..=5))]
    pub priority: Option<i32>,
}

#[derive(Debug, Args)]
pub struct NumberArgs {
    /// Task number as shown by `list`
    #[arg(allow_negative_numbers = true)]
    pub number: i64,
}

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Task number as shown by `list`
    #[arg(allow_negative_numbers = true)]
    pub number: i64,
    /// New description
    pub description: String,
    /// New priority; not range-checked
    #[arg(short, long, allow_negative_numbers = true)]
    pub priority: i32,
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Case-insensitive text to look for
    pub keyword: String,
}

#[derive(Debug, Args)]
pub struct SortArgs {
    #[arg(short, long, value_enum, default_value_t = SortKey::Priority)]
    pub by: SortKey,
}

pub fn list(target: &Target) -> Result<()> {
    let empty = match target {
        Target::Rich(list) => {
            let tasks = list.tasks()?;
            if !tasks.is_empty() {
                msg_print!(Message::TaskTableHeader, true);
                View::tasks(&tasks)?;
            }
            tasks.is_empty()
        }
        Target::Plain(list) => {
            let tasks = list.tasks()?;
            if !tasks.is_empty() {
                msg_print!(Message::TaskTableHeader, true);
                View::plain_tasks(&tasks)?;
            }
            tasks.is_empty()
        }
    };

    if empty {
        msg_info!(Message::NoTasks);
    }
    Ok(())
}

pub fn add(target: &Target, args: &AddArgs) -> Result<()> {
    let message = match target {
        Target::Rich(list) => list.add(&args.description, args.priority.unwrap_or(DEFAULT_PRIORITY))?,
        Target::Plain(_) if args.priority.is_some() => bail!("{}", Message::PriorityUnsupportedForPlain),
        Target::Plain(list) => list.add(&args.description)?,
    };
    report(message);
    Ok(())
}

pub fn delete(target: &Target, args: &NumberArgs) -> Result<()> {
    let message = match target {
        Target::Rich(list) => list.delete(args.number)?,
        Target::Plain(list) => list.delete(args.number)?,
    };
    report(message);
    Ok(())
}

pub fn done(target: &Target, args: &NumberArgs) -> Result<()> {
    report(rich(target)?.complete(args.number)?);
    Ok(())
}

pub fn edit(target: &Target, args: &EditArgs) -> Result<()> {
    report(rich(target)?.edit(args.number, &args.description, args.priority)?);
    Ok(())
}

pub fn search(target: &Target, args: &SearchArgs) -> Result<()> {
    let message = match target {
        Target::Rich(list) => list.search(&args.keyword)?,
        Target::Plain(list) => list.search(&args.keyword)?,
    };
    report(message);
    Ok(())
}

pub fn sort(target: &Target, args: &SortArgs) -> Result<()> {
    report(rich(target)?.sort(args.by)?);
    Ok(())
}

fn rich(target: &Target) -> Result<&TodoList<Task>> {
    match target {
        Target::Rich(list) => Ok(list),
        Target::Plain(_) => bail!("{}", Message::PlainVariantUnsupported),
    }
}

fn report(message: Message) {
    match message {
        Message::InvalidTaskNumber | Message::InvalidTaskDescription => msg_error!(message),
        Message::NoTasks | Message::NoTasksMatching(_) => msg_info!(message),
        Message::TaskList(_) | Message::SearchResults { .. } => msg_print!(message),
        _ => msg_success!(message),
    }
}
