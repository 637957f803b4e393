//! `tick search` command implementation

use anyhow::Result;
use clap::Args;
use std::path::Path;

use crate::task::TaskStore;

#[derive(Args)]
pub struct SearchArgs {
    /// Keyword to match against task titles (case-insensitive)
    keyword: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(tasks_path: &Path, args: SearchArgs) -> Result<()> {
    let store = TaskStore::open(tasks_path)?;
    let results = store.search(&args.keyword)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("No tasks matching \"{}\".", args.keyword.trim());
        return Ok(());
    }

    super::print_task_table(&results);
    println!();
    println!("Results for \"{}\": {}", args.keyword.trim(), results.len());
    Ok(())
}
