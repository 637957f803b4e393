//! `tick edit` command implementation

use anyhow::Result;
use clap::Args;
use std::path::Path;

use crate::task::TaskStore;

#[derive(Args)]
pub struct EditArgs {
    /// Task id
    id: u64,

    /// New title
    #[arg(short, long)]
    title: Option<String>,

    /// New due date (YYYY-MM-DD)
    #[arg(short, long)]
    due: Option<String>,

    /// New priority (1-3, high, medium, low)
    #[arg(short, long)]
    priority: Option<String>,
}

pub fn run(tasks_path: &Path, args: EditArgs) -> Result<()> {
    let mut store = TaskStore::open(tasks_path)?;
    let outcome = store.edit(
        args.id,
        args.title.as_deref(),
        args.due.as_deref(),
        args.priority.as_deref(),
    )?;

    if outcome.skipped_title {
        eprintln!("warning: empty title ignored");
    }
    if outcome.skipped_due_date {
        eprintln!("warning: invalid due date ignored (expected YYYY-MM-DD)");
    }
    if outcome.skipped_priority {
        eprintln!("warning: invalid priority ignored (use 1-3, high, medium, low)");
    }

    println!("Updated task {}", args.id);
    Ok(())
}
