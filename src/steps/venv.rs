//! Virtual-environment installer.

use crate::config::Config;
use crate::error::Result;
use crate::shell::{self, command::path_arg, CommandSpec};
use crate::steps::path_export::PathExport;
use crate::ui::UserInterface;

/// Install virtualenv into the freshly installed runtime via its pip.
///
/// The exit status is checked like every other step; a failing pip
/// propagates its exit code.
pub fn run(config: &Config, export: &PathExport, ui: &mut dyn UserInterface) -> Result<()> {
    let pip = config.version_bin_dir.join("pip");
    let mut spinner = ui.start_spinner("Installing virtualenv");
    let install = CommandSpec::new(path_arg(&pip))
        .args(["install", "virtualenv"])
        .env("PATH", export.path_var.as_str());
    match shell::run_checked(&install) {
        Ok(result) => {
            spinner.finish_success("virtualenv installed");
            ui.command_output(&result.stdout);
            Ok(())
        }
        Err(e) => {
            spinner.finish_error("virtualenv install failed");
            Err(e)
        }
    }
}
