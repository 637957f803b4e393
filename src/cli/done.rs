//! `tick done` command implementation

use anyhow::Result;
use clap::Args;
use std::path::Path;

use crate::task::TaskStore;

#[derive(Args)]
pub struct DoneArgs {
    /// Task id
    id: u64,
}

pub fn run(tasks_path: &Path, args: DoneArgs) -> Result<()> {
    let mut store = TaskStore::open(tasks_path)?;
    let task = store.toggle(args.id)?;

    if task.completed {
        println!("Completed task {}: {}", task.id, task.title);
    } else {
        println!("Reopened task {}: {}", task.id, task.title);
    }
    Ok(())
}
