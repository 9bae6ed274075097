//! Pycamp - Automated pyenv and Python toolchain bootstrap.
//!
//! Pycamp replaces the ad-hoc "install pyenv, then Python, then virtualenv"
//! shell script with a single CLI. It clones a pinned pyenv revision, builds
//! the bundled python-build plugin, verifies a download tool is available,
//! installs a pinned Python version, upgrades pip, and installs virtualenv.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration resolved once at startup from env/flags
//! - [`detect`] - Search-path parsing and tool resolution
//! - [`error`] - Error types and result aliases
//! - [`shell`] - Structured sub-process execution
//! - [`status`] - Toolchain status snapshot for the `status` command
//! - [`steps`] - The bootstrap steps, run in a fixed order
//! - [`ui`] - Spinners, theming, and terminal output
//!
//! # Example
//!
//! ```
//! use pycamp::steps::downloader::wget_version_acceptable;
//!
//! // wget releases before 1.14 lack reliable TLS SNI support
//! assert!(wget_version_acceptable("GNU Wget 1.21.2 built on linux-gnu."));
//! assert!(!wget_version_acceptable("GNU Wget 1.13 built on linux-gnu."));
//! ```

pub mod cli;
pub mod config;
pub mod detect;
pub mod error;
pub mod shell;
pub mod status;
pub mod steps;
pub mod ui;

pub use error::{PycampError, Result};
