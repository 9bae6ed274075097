//! The bootstrap steps, run in a fixed order.
//!
//! The sequence is strictly forward-only: every step either completes or
//! the whole run terminates with the failing sub-process's exit code. No
//! rollback, no retry.

pub mod downloader;
pub mod fetch;
pub mod path_export;
pub mod runtime;
pub mod venv;

use crate::config::Config;
use crate::detect;
use crate::error::Result;
use crate::ui::UserInterface;

/// Outcome of an individual step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The step did its work.
    Completed,
    /// The step found nothing to do.
    Skipped,
}

const TOTAL_STEPS: usize = 4;

/// Run the full bootstrap sequence.
///
/// 1. Fetch pyenv (skipped when `pyenv` already resolves on PATH, or when
///    the clone directory exists).
/// 2. Verify a download tool is available.
/// 3. Install the pinned Python version and upgrade pip.
/// 4. Install virtualenv.
///
/// The pyenv `bin` and `shims` directories are prepended to a
/// process-local copy of PATH between steps 1 and 2; nothing is written
/// to shell profile files.
pub fn run_all(config: &Config, ui: &mut dyn UserInterface) -> Result<()> {
    ui.show_header(&format!("pycamp · Python {}", config.python_version));

    let original_path = detect::parse_system_path();

    ui.show_progress(1, TOTAL_STEPS);
    if detect::resolve_tool("pyenv", &original_path).is_some() {
        tracing::info!("pyenv already resolves on PATH, skipping fetch");
        let mut spinner = ui.start_spinner("Fetching pyenv");
        spinner.finish_skipped("pyenv already on PATH");
    } else {
        fetch::run(config, ui)?;
    }

    let export = path_export::build(config, &original_path);
    tracing::debug!(path = %export.path_var, "augmented search path");

    ui.show_progress(2, TOTAL_STEPS);
    downloader::run(&export.entries, ui)?;

    ui.show_progress(3, TOTAL_STEPS);
    runtime::run(config, &export, ui)?;

    ui.show_progress(4, TOTAL_STEPS);
    venv::run(config, &export, ui)?;

    ui.success("Python toolchain ready");
    Ok(())
}
