use super::task::{PlainTask, Task};
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn tasks(tasks: &[Task]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["#", "DONE", "PRIORITY", "DESCRIPTION"]);
        for (idx, task) in tasks.iter().enumerate() {
            let done = if task.completed { "✓" } else { "✗" };
            table.add_row(row![idx + 1, done, task.priority, task.description]);
        }
        table.printstd();

        Ok(())
    }

    pub fn plain_tasks(tasks: &[PlainTask]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["#", "DESCRIPTION"]);
        for (idx, task) in tasks.iter().enumerate() {
            table.add_row(row![idx + 1, task.description]);
        }
        table.printstd();

        Ok(())
    }
}
