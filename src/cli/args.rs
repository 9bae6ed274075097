//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! Every option of the `run` and `status` commands is also readable from an
//! environment variable, which is the primary interface: `pycamp` with no
//! flags at all performs a full bootstrap driven by `PYCAMP_*` variables
//! and their defaults.

use crate::config::{DEFAULT_PYENV_COMMIT, DEFAULT_PYENV_REPO, DEFAULT_PYTHON_VERSION};
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Pycamp - Automated pyenv and Python toolchain bootstrap.
#[derive(Debug, Parser)]
#[command(name = "pycamp")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Show verbose output (includes sub-command output)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the bootstrap (default if no command specified)
    Run(RunArgs),

    /// Show what is already installed
    Status(StatusArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Options describing the toolchain being targeted, shared by `run` and
/// `status`.
#[derive(Debug, Clone, clap::Args)]
pub struct TargetArgs {
    /// Python version to install
    #[arg(
        long,
        env = "PYCAMP_PYTHON_VERSION",
        default_value = DEFAULT_PYTHON_VERSION,
        value_name = "VERSION"
    )]
    pub python_version: String,

    /// pyenv installation root (default $HOME/.pyenv)
    #[arg(long, env = "PYENV_ROOT", value_name = "DIR")]
    pub pyenv_root: Option<PathBuf>,

    /// Per-version binary directory (derived from the root and version
    /// unless set)
    #[arg(long, env = "PYCAMP_VERSION_BIN", value_name = "DIR")]
    pub version_bin: Option<PathBuf>,

    /// pyenv repository to clone
    #[arg(
        long,
        env = "PYCAMP_PYENV_REPO",
        default_value = DEFAULT_PYENV_REPO,
        hide = true
    )]
    pub repo_url: String,

    /// pyenv revision to pin the clone to
    #[arg(
        long,
        env = "PYCAMP_PYENV_COMMIT",
        default_value = DEFAULT_PYENV_COMMIT,
        hide = true
    )]
    pub pinned_commit: String,
}

impl Default for TargetArgs {
    fn default() -> Self {
        Self {
            python_version: DEFAULT_PYTHON_VERSION.to_string(),
            pyenv_root: None,
            version_bin: None,
            repo_url: DEFAULT_PYENV_REPO.to_string(),
            pinned_commit: DEFAULT_PYENV_COMMIT.to_string(),
        }
    }
}

/// Arguments for the `run` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Suppress the PATH export hint printed after installation
    #[arg(long, env = "PYCAMP_NO_PATH_HINTS")]
    pub no_path_hints: bool,
}

impl RunArgs {
    /// Resolve run arguments from the environment alone, as if `run` had
    /// been invoked with no flags. Bare `pycamp` goes through here so the
    /// `PYCAMP_*` variables apply exactly as they do for `pycamp run`.
    pub fn from_env() -> Result<Self, clap::Error> {
        use clap::{Args, FromArgMatches};
        let cmd = Self::augment_args(clap::Command::new("run"));
        let matches = cmd.try_get_matches_from(["run"])?;
        Self::from_arg_matches(&matches)
    }
}

/// Arguments for the `status` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct StatusArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
