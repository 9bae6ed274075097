//! Runtime configuration.
//!
//! All behavior is controlled through environment variables (each doubled
//! as a CLI flag) read once at startup into a [`Config`] with named fields
//! and documented defaults. The struct is passed explicitly to each step;
//! there is no global mutable state.

use crate::cli::args::TargetArgs;
use crate::error::{PycampError, Result};
use std::path::PathBuf;

/// Python version installed when none is requested.
pub const DEFAULT_PYTHON_VERSION: &str = "3.7.2";

/// Upstream pyenv repository.
pub const DEFAULT_PYENV_REPO: &str = "https://github.com/pyenv/pyenv.git";

/// Pinned pyenv revision, for reproducible bootstraps. Overridable via
/// `PYCAMP_PYENV_COMMIT` for tests and mirrors.
pub const DEFAULT_PYENV_COMMIT: &str = "b07b457ea1cb65d0df27b5f95b3f99899f72966f";

/// Local branch name created at the pinned revision.
pub const PINNED_BRANCH: &str = "pycamp-pinned";

/// Resolved configuration for one invocation.
#[derive(Debug, Clone)]
pub struct Config {
    /// Python version to install (default "3.7.2").
    pub python_version: String,

    /// pyenv installation root (default `$HOME/.pyenv`).
    pub pyenv_root: PathBuf,

    /// Per-version binary directory
    /// (default `<root>/versions/<version>/bin`).
    pub version_bin_dir: PathBuf,

    /// Suppress the PATH export hint messages (default false).
    pub no_path_hints: bool,

    /// Repository to clone when pyenv is absent.
    pub repo_url: String,

    /// Revision the clone is pinned to.
    pub pinned_commit: String,
}

impl Config {
    /// Resolve the configuration from parsed target arguments.
    ///
    /// `$HOME` must be resolvable unless both the root and the version bin
    /// directory are given explicitly.
    pub fn resolve(target: &TargetArgs, no_path_hints: bool) -> Result<Self> {
        let pyenv_root = match &target.pyenv_root {
            Some(root) => root.clone(),
            None => dirs::home_dir()
                .ok_or(PycampError::HomeDirUnavailable)?
                .join(".pyenv"),
        };

        let version_bin_dir = target.version_bin.clone().unwrap_or_else(|| {
            pyenv_root
                .join("versions")
                .join(&target.python_version)
                .join("bin")
        });

        Ok(Self {
            python_version: target.python_version.clone(),
            pyenv_root,
            version_bin_dir,
            no_path_hints,
            repo_url: target.repo_url.clone(),
            pinned_commit: target.pinned_commit.clone(),
        })
    }

    /// Directory the built python-build plugin lives in after a clone.
    pub fn plugin_dir(&self) -> PathBuf {
        self.pyenv_root.join("plugins").join("python-build")
    }

    /// The version manager's own binary directory.
    pub fn pyenv_bin_dir(&self) -> PathBuf {
        self.pyenv_root.join("bin")
    }

    /// The version manager's shims directory.
    pub fn shims_dir(&self) -> PathBuf {
        self.pyenv_root.join("shims")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target_with(root: Option<&str>, bin: Option<&str>) -> TargetArgs {
        TargetArgs {
            pyenv_root: root.map(PathBuf::from),
            version_bin: bin.map(PathBuf::from),
            ..TargetArgs::default()
        }
    }

    #[test]
    fn derives_version_bin_from_root_and_version() {
        let config = Config::resolve(&target_with(Some("/opt/pyenv"), None), false).unwrap();
        assert_eq!(config.python_version, DEFAULT_PYTHON_VERSION);
        assert_eq!(
            config.version_bin_dir,
            PathBuf::from("/opt/pyenv/versions/3.7.2/bin")
        );
    }

    #[test]
    fn explicit_version_bin_wins() {
        let config =
            Config::resolve(&target_with(Some("/opt/pyenv"), Some("/custom/bin")), false).unwrap();
        assert_eq!(config.version_bin_dir, PathBuf::from("/custom/bin"));
    }

    #[test]
    fn default_root_is_under_home() {
        let config = Config::resolve(&TargetArgs::default(), false).unwrap();
        assert!(config.pyenv_root.ends_with(".pyenv"));
    }

    #[test]
    fn helper_dirs_are_under_root() {
        let config = Config::resolve(&target_with(Some("/opt/pyenv"), None), true).unwrap();
        assert_eq!(
            config.plugin_dir(),
            PathBuf::from("/opt/pyenv/plugins/python-build")
        );
        assert_eq!(config.pyenv_bin_dir(), PathBuf::from("/opt/pyenv/bin"));
        assert_eq!(config.shims_dir(), PathBuf::from("/opt/pyenv/shims"));
        assert!(config.no_path_hints);
    }

    #[test]
    fn defaults_carry_repo_and_commit() {
        let config = Config::resolve(&TargetArgs::default(), false).unwrap();
        assert_eq!(config.repo_url, DEFAULT_PYENV_REPO);
        assert_eq!(config.pinned_commit, DEFAULT_PYENV_COMMIT);
    }
}
