//! Tick - single-user to-do list manager

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use tick::cli::{self, Cli, Commands};

fn main() -> Result<()> {
    if std::env::var("TICK_DEBUG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter("tick=debug")
            .init();
    }

    let cli = Cli::parse();

    // Handle commands that don't touch the tasks file.
    match cli.command {
        Some(Commands::Completion { shell }) => {
            generate(shell, &mut Cli::command(), "tick", &mut std::io::stdout());
            return Ok(());
        }
        Some(Commands::Config { command }) => return cli::config::run(command),
        _ => {}
    }

    let tasks_path = cli::tasks_path(cli.file)?;

    match cli.command {
        Some(Commands::Add(args)) => cli::add::run(&tasks_path, args),
        Some(Commands::List(args)) => cli::list::run(&tasks_path, args),
        Some(Commands::Search(args)) => cli::search::run(&tasks_path, args),
        Some(Commands::Edit(args)) => cli::edit::run(&tasks_path, args),
        Some(Commands::Done(args)) => cli::done::run(&tasks_path, args),
        Some(Commands::Remove(args)) => cli::remove::run(&tasks_path, args),
        None => cli::list::run(&tasks_path, Default::default()),
        _ => unreachable!(),
    }
}
