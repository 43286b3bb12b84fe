//! CLI module for vidsum
//!
//! Contains argument parsing, command implementations and the interactive session.

pub mod args;
pub mod commands;
pub mod completions;
pub mod interactive;

pub use args::{Cli, Commands, ConfigCommand};
