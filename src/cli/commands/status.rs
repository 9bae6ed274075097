//! The `status` command: report what is already installed.

use crate::cli::args::StatusArgs;
use crate::cli::commands::dispatcher::{Command, CommandResult};
use crate::config::Config;
use crate::error::Result;
use crate::status::ToolchainStatus;
use crate::ui::UserInterface;

/// Shows a snapshot of the toolchain without changing anything.
pub struct StatusCommand {
    args: StatusArgs,
}

impl StatusCommand {
    /// Create a status command from parsed arguments.
    pub fn new(args: StatusArgs) -> Self {
        Self { args }
    }
}

impl Command for StatusCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = Config::resolve(&self.args.target, false)?;
        let status = ToolchainStatus::collect(&config);

        if self.args.json {
            let json = serde_json::to_string_pretty(&status)
                .map_err(|e| anyhow::anyhow!("failed to serialize status: {e}"))?;
            ui.message(&json);
        } else {
            for line in status.summary_lines() {
                ui.message(&line);
            }
        }

        Ok(CommandResult::success())
    }
}
