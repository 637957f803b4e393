//! `tick add` command implementation

use anyhow::Result;
use clap::Args;
use std::path::Path;

use crate::task::{Priority, TaskStore};

#[derive(Args)]
pub struct AddArgs {
    /// Task title
    title: String,

    /// Due date (YYYY-MM-DD)
    #[arg(short, long)]
    due: String,

    /// Priority (1-3, high, medium, low; defaults to medium)
    #[arg(short, long, value_parser = Priority::from_arg)]
    priority: Option<Priority>,
}

pub fn run(tasks_path: &Path, args: AddArgs) -> Result<()> {
    let mut store = TaskStore::open(tasks_path)?;
    let task = store.create(&args.title, &args.due, args.priority)?;
    println!("Added task {}: {}", task.id, task.title);
    Ok(())
}
