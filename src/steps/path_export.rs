//! Process-local search-path export.
//!
//! Prepends the version manager's `bin` and `shims` directories to a copy
//! of the search path used for all subsequent child processes. The export
//! is a returned value threaded through the later steps, never a mutation
//! of this process's environment, and never persisted to a profile file.

use crate::config::Config;
use crate::detect;
use std::path::PathBuf;

/// The augmented search path for the rest of the run.
#[derive(Debug, Clone)]
pub struct PathExport {
    /// PATH-style value handed to child processes.
    pub path_var: String,

    /// Parsed entries of `path_var`, pyenv directories first.
    pub entries: Vec<PathBuf>,

    /// Whether the per-version bin directory was already on the original
    /// search path. Selects which hint message the runtime step prints.
    pub version_bin_on_path: bool,
}

/// Build the augmented path from the original PATH entries.
pub fn build(config: &Config, original_path: &[PathBuf]) -> PathExport {
    let mut entries = Vec::new();
    for dir in [config.pyenv_bin_dir(), config.shims_dir()] {
        if !detect::dir_on_path(&dir, original_path) {
            entries.push(dir);
        }
    }
    entries.extend_from_slice(original_path);

    let version_bin_on_path = detect::dir_on_path(&config.version_bin_dir, original_path);

    PathExport {
        path_var: detect::join_path(&entries),
        entries,
        version_bin_on_path,
    }
}
