//! Subcommand implementations.

pub mod completions;
pub mod dispatcher;
pub mod run;
pub mod status;
