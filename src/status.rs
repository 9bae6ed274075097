//! Toolchain status snapshot.

use crate::config::Config;
use crate::detect;
use crate::steps::downloader;
use serde::Serialize;
use std::path::PathBuf;

/// What the `status` command reports: which pieces of the toolchain are
/// already in place, without changing anything.
#[derive(Debug, Serialize)]
pub struct ToolchainStatus {
    /// Whether `pyenv` resolves on the current PATH.
    pub pyenv_on_path: bool,
    /// Configured pyenv root.
    pub pyenv_root: PathBuf,
    /// Whether the root directory (the clone target) exists.
    pub clone_present: bool,
    /// First usable download tool, if any.
    pub downloader: Option<String>,
    /// Target Python version.
    pub python_version: String,
    /// Whether the per-version bin directory exists.
    pub runtime_present: bool,
}

impl ToolchainStatus {
    /// Collect the snapshot for the given configuration.
    pub fn collect(config: &Config) -> Self {
        let path = detect::parse_system_path();
        Self {
            pyenv_on_path: detect::resolve_tool("pyenv", &path).is_some(),
            pyenv_root: config.pyenv_root.clone(),
            clone_present: config.pyenv_root.is_dir(),
            downloader: downloader::probe(&path).map(|d| d.to_string()),
            python_version: config.python_version.clone(),
            runtime_present: config.version_bin_dir.is_dir(),
        }
    }

    /// Human-readable summary, one line per item.
    pub fn summary_lines(&self) -> Vec<String> {
        fn yes_no(b: bool) -> &'static str {
            if b {
                "yes"
            } else {
                "no"
            }
        }
        vec![
            format!("pyenv on PATH: {}", yes_no(self.pyenv_on_path)),
            format!(
                "pyenv root:    {} ({})",
                self.pyenv_root.display(),
                if self.clone_present {
                    "present"
                } else {
                    "absent"
                }
            ),
            format!(
                "download tool: {}",
                self.downloader.as_deref().unwrap_or("none found")
            ),
            format!(
                "Python {}:  {}",
                self.python_version,
                if self.runtime_present {
                    "installed"
                } else {
                    "not installed"
                }
            ),
        ]
    }
}
