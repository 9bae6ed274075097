//! Repository fetcher: clone pyenv at the pinned revision and build the
//! python-build plugin.
//!
//! Idempotence: an existing root directory is a pure skip. The pinned
//! checkout and the plugin build run only on the code path where the clone
//! just succeeded, so a partially populated root from an interrupted run
//! is never mutated further (delete it and re-run to recover).

use crate::config::{Config, PINNED_BRANCH};
use crate::error::Result;
use crate::shell::{self, command::path_arg, CommandSpec};
use crate::steps::StepOutcome;
use crate::ui::UserInterface;

/// Fetch pyenv into the configured root.
pub fn run(config: &Config, ui: &mut dyn UserInterface) -> Result<StepOutcome> {
    if config.pyenv_root.exists() {
        tracing::info!(
            root = %config.pyenv_root.display(),
            "pyenv root already present, skipping clone"
        );
        let mut spinner = ui.start_spinner("Fetching pyenv");
        spinner.finish_skipped(&format!(
            "pyenv already present at {}",
            config.pyenv_root.display()
        ));
        return Ok(StepOutcome::Skipped);
    }

    if let Some(parent) = config.pyenv_root.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let root_arg = path_arg(&config.pyenv_root);
    let mut spinner = ui.start_spinner(&format!("Cloning {}", config.repo_url));

    let clone = CommandSpec::new("git")
        .arg("clone")
        .arg(config.repo_url.as_str())
        .arg(root_arg.as_str());
    if let Err(e) = shell::run_checked(&clone) {
        spinner.finish_error("Clone failed");
        return Err(e);
    }

    spinner.set_message(&format!("Pinning to {}", short(&config.pinned_commit)));
    let checkout = CommandSpec::new("git")
        .args(["-C", root_arg.as_str(), "checkout", "-b", PINNED_BRANCH])
        .arg(config.pinned_commit.as_str());
    if let Err(e) = shell::run_checked(&checkout) {
        spinner.finish_error("Checkout of the pinned revision failed");
        return Err(e);
    }

    // python-build's installer copies the plugin into $PREFIX/bin.
    spinner.set_message("Building the python-build plugin");
    let installer = config.plugin_dir().join("install.sh");
    let build = CommandSpec::new(path_arg(&installer))
        .current_dir(config.plugin_dir())
        .env("PREFIX", root_arg.as_str());
    match shell::run_checked(&build) {
        Ok(result) => {
            spinner.finish_success(&format!("pyenv ready at {}", config.pyenv_root.display()));
            ui.command_output(&result.stdout);
            Ok(StepOutcome::Completed)
        }
        Err(e) => {
            spinner.finish_error("python-build plugin build failed");
            Err(e)
        }
    }
}

fn short(commit: &str) -> String {
    commit.chars().take(12).collect()
}
