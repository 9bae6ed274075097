//! Sub-process execution and platform detection.

pub mod command;
pub mod platform;

pub use command::{execute, run_checked, CommandResult, CommandSpec};
pub use platform::{is_ci, is_elevated};
