//! `tick remove` command implementation

use anyhow::Result;
use clap::Args;
use std::path::Path;

use crate::task::TaskStore;

#[derive(Args)]
pub struct RemoveArgs {
    /// Task id
    id: u64,
}

pub fn run(tasks_path: &Path, args: RemoveArgs) -> Result<()> {
    let mut store = TaskStore::open(tasks_path)?;
    let task = store.delete(args.id)?;
    println!("Removed task {}: {}", task.id, task.title);
    Ok(())
}
