//! Command-line interface.

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, CompletionsArgs, RunArgs, StatusArgs, TargetArgs};
pub use commands::dispatcher::{Command, CommandDispatcher, CommandResult};
