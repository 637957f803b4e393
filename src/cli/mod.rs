//! CLI command implementations

pub mod add;
pub mod config;
pub mod definition;
pub mod done;
pub mod edit;
pub mod list;
pub mod remove;
pub mod search;

pub use definition::{Cli, Commands};

use anyhow::Result;
use std::path::PathBuf;

use crate::task::Task;

const TABLE_COL_ID: usize = 4;
const TABLE_COL_MARK: usize = 3;
const TABLE_COL_TITLE: usize = 30;
const TABLE_COL_DUE: usize = 10;

/// Resolve the tasks file: `--file` flag (or `TICK_FILE` env), then the
/// config file, then the platform data directory.
pub fn tasks_path(file: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = file {
        return Ok(path);
    }

    let config = crate::config::Config::load()?;
    if let Some(path) = config.data_file {
        return Ok(path);
    }

    crate::task::default_tasks_path()
}

pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else if max <= 3 {
        s.chars().take(max).collect()
    } else {
        let head: String = s.chars().take(max - 3).collect();
        format!("{}...", head)
    }
}

fn print_table_header() {
    println!(
        "{:>width_id$} {:<width_mark$} {:<width_title$} {:<width_due$} PRIO",
        "ID",
        "",
        "TITLE",
        "DUE",
        width_id = TABLE_COL_ID,
        width_mark = TABLE_COL_MARK,
        width_title = TABLE_COL_TITLE,
        width_due = TABLE_COL_DUE
    );
    println!(
        "{}",
        "-".repeat(TABLE_COL_ID + TABLE_COL_MARK + TABLE_COL_TITLE + TABLE_COL_DUE + 7)
    );
}

fn print_table_row(task: &Task) {
    let title = truncate(&task.title, TABLE_COL_TITLE);
    println!(
        "{:>width_id$} {:<width_mark$} {:<width_title$} {:<width_due$} {}",
        task.id,
        task.mark(),
        title,
        task.due_date.format("%Y-%m-%d"),
        task.priority.label(),
        width_id = TABLE_COL_ID,
        width_mark = TABLE_COL_MARK,
        width_title = TABLE_COL_TITLE,
        width_due = TABLE_COL_DUE
    );
}

/// Render a task table the way `list` and `search` show it.
pub fn print_task_table(tasks: &[&Task]) {
    print_table_header();
    for task in tasks {
        print_table_row(task);
    }
}
