//! `tick list` command implementation

use anyhow::Result;
use clap::Args;
use std::path::Path;

use crate::task::TaskStore;

#[derive(Args, Default)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(tasks_path: &Path, args: ListArgs) -> Result<()> {
    let store = TaskStore::open(tasks_path)?;
    let tasks = store.tasks();

    if args.json {
        println!("{}", serde_json::to_string_pretty(tasks)?);
        return Ok(());
    }

    if tasks.is_empty() {
        println!("No tasks found.");
        return Ok(());
    }

    super::print_task_table(&tasks.iter().collect::<Vec<_>>());
    println!();
    println!("Tasks: {}", tasks.len());
    Ok(())
}
