//! Tick library - core functionality for the to-do list manager

pub mod cli;
pub mod config;
pub mod task;
