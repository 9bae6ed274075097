//! Runtime installer: the pinned Python version, then a pip self-upgrade.

use crate::config::Config;
use crate::error::{PycampError, Result};
use crate::shell::{self, command::path_arg, CommandSpec};
use crate::steps::path_export::PathExport;
use crate::ui::UserInterface;

/// Install the pinned Python version and upgrade its pip.
pub fn run(config: &Config, export: &PathExport, ui: &mut dyn UserInterface) -> Result<()> {
    let pyenv = crate::detect::resolve_tool("pyenv", &export.entries).ok_or_else(|| {
        PycampError::StepFailed {
            step: "runtime".to_string(),
            message: format!(
                "pyenv is not available after setup; check {}",
                config.pyenv_bin_dir().display()
            ),
        }
    })?;

    let mut spinner = ui.start_spinner(&format!(
        "Installing Python {} (skipped if already installed)",
        config.python_version
    ));
    let install = CommandSpec::new(path_arg(&pyenv))
        .args(["install", "--skip-existing"])
        .arg(config.python_version.as_str())
        .env("PYENV_ROOT", path_arg(&config.pyenv_root))
        .env("PATH", export.path_var.as_str());
    match shell::run_checked(&install) {
        Ok(result) => {
            spinner.finish_success(&format!("Python {} available", config.python_version));
            ui.command_output(&result.stdout);
        }
        Err(e) => {
            spinner.finish_error(&format!("Python {} install failed", config.python_version));
            return Err(e);
        }
    }

    if let Some(hint) = path_hint(config, export) {
        ui.message(&hint);
    }

    // Runs whether or not the install above was skipped.
    let pip = config.version_bin_dir.join("pip");
    let mut spinner = ui.start_spinner("Upgrading pip");
    let upgrade = CommandSpec::new(path_arg(&pip))
        .args(["install", "--upgrade", "pip"])
        .env("PATH", export.path_var.as_str());
    match shell::run_checked(&upgrade) {
        Ok(result) => {
            spinner.finish_success("pip upgraded");
            ui.command_output(&result.stdout);
            Ok(())
        }
        Err(e) => {
            spinner.finish_error("pip upgrade failed");
            Err(e)
        }
    }
}

/// Select the PATH hint to print after installation, if any.
///
/// pycamp never edits profile files; when the per-version bin directory
/// is missing from the original PATH it recommends the export line to add
/// manually. The suppression flag silences both messages without changing
/// what gets installed.
pub fn path_hint(config: &Config, export: &PathExport) -> Option<String> {
    if config.no_path_hints {
        return None;
    }
    if export.version_bin_on_path {
        Some(format!(
            "{} is already on your PATH, no action needed",
            config.version_bin_dir.display()
        ))
    } else {
        Some(format!(
            "To use this Python directly, append to your shell profile: export PATH=\"{}:$PATH\"",
            config.version_bin_dir.display()
        ))
    }
}
