//! `tick config` command implementation

use anyhow::Result;
use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::config::Config;

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective tasks file location
    Show,

    /// Set the default tasks file path
    SetFile(SetFileArgs),

    /// Clear the default tasks file path
    ClearFile,
}

#[derive(Args)]
pub struct SetFileArgs {
    /// Tasks file path
    path: PathBuf,
}

pub fn run(command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show => {
            let config = Config::load()?;
            match &config.data_file {
                Some(path) => println!("data_file = {}", path.display()),
                None => println!("data_file is not set"),
            }
            println!("tasks file: {}", super::tasks_path(None)?.display());
            Ok(())
        }
        ConfigCommands::SetFile(args) => {
            let mut config = Config::load()?;
            config.data_file = Some(args.path.clone());
            config.save()?;
            println!("Default tasks file set to {}", args.path.display());
            Ok(())
        }
        ConfigCommands::ClearFile => {
            let mut config = Config::load()?;
            config.data_file = None;
            config.save()?;
            println!("Default tasks file cleared");
            Ok(())
        }
    }
}
