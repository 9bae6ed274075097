//! The `run` command: the full bootstrap sequence.

use crate::cli::args::RunArgs;
use crate::cli::commands::dispatcher::{Command, CommandResult};
use crate::config::Config;
use crate::error::Result;
use crate::shell::is_elevated;
use crate::steps;
use crate::ui::UserInterface;

/// Runs the bootstrap: pyenv, Python, pip, virtualenv.
pub struct RunCommand {
    args: RunArgs,
}

impl RunCommand {
    /// Create a run command from parsed arguments.
    pub fn new(args: RunArgs) -> Self {
        Self { args }
    }
}

impl Command for RunCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = Config::resolve(&self.args.target, self.args.no_path_hints)?;
        tracing::debug!(?config, "resolved configuration");

        if is_elevated() {
            ui.warning(
                "Running as root: the toolchain will be installed under root's home directory",
            );
        }

        steps::run_all(&config, ui)?;
        Ok(CommandResult::success())
    }
}
