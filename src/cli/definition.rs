//! Top-level clap definition

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use super::add::AddArgs;
use super::config::ConfigCommands;
use super::done::DoneArgs;
use super::edit::EditArgs;
use super::list::ListArgs;
use super::remove::RemoveArgs;
use super::search::SearchArgs;

#[derive(Parser)]
#[command(name = "tick", about = "Single-user to-do list manager", version)]
pub struct Cli {
    /// Path to the tasks file (defaults to the platform data dir)
    #[arg(long, global = true, env = "TICK_FILE")]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new task
    Add(AddArgs),

    /// List all tasks (the default when no command is given)
    List(ListArgs),

    /// Search tasks by title keyword
    Search(SearchArgs),

    /// Edit a task's title, due date, or priority
    Edit(EditArgs),

    /// Toggle a task's completion state
    Done(DoneArgs),

    /// Remove a task
    Remove(RemoveArgs),

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
