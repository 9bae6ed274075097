//! Download tool verification.
//!
//! python-build shells out to a downloader when fetching source tarballs,
//! so the bootstrap fails early if none is usable: curl, aria2c, or a
//! sufficiently new wget. The wget version is extracted from the first
//! line of its `--version` banner.

use crate::detect;
use crate::error::{PycampError, Result};
use crate::shell::{self, CommandSpec};
use crate::ui::UserInterface;
use regex::Regex;
use std::fmt;
use std::path::PathBuf;

/// Minimum acceptable wget version. Releases before 1.14 lack reliable
/// TLS SNI support and fail against modern download hosts.
const MIN_WGET_VERSION: (u32, u32) = (1, 14);

/// An acceptable download tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Downloader {
    Curl,
    Aria2,
    Wget,
}

impl fmt::Display for Downloader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Curl => "curl",
            Self::Aria2 => "aria2c",
            Self::Wget => "wget",
        };
        write!(f, "{}", name)
    }
}

/// Find a usable downloader on the given search path, preferring curl,
/// then aria2c, then wget.
pub fn probe(path_entries: &[PathBuf]) -> Option<Downloader> {
    if detect::resolve_tool("curl", path_entries).is_some() {
        return Some(Downloader::Curl);
    }
    if detect::resolve_tool("aria2c", path_entries).is_some() {
        return Some(Downloader::Aria2);
    }
    if let Some(wget) = detect::resolve_tool("wget", path_entries) {
        let spec = CommandSpec::new(shell::command::path_arg(&wget)).arg("--version");
        if let Ok(result) = shell::execute(&spec) {
            if result.success && wget_version_acceptable(&result.stdout) {
                return Some(Downloader::Wget);
            }
            tracing::debug!(banner = %result.stdout.lines().next().unwrap_or(""), "wget rejected");
        }
    }
    None
}

/// Verify a downloader exists, failing the run with an explanatory
/// message otherwise.
pub fn run(path_entries: &[PathBuf], ui: &mut dyn UserInterface) -> Result<Downloader> {
    let mut spinner = ui.start_spinner("Checking download tools");
    match probe(path_entries) {
        Some(tool) => {
            spinner.finish_success(&format!("Found {}", tool));
            Ok(tool)
        }
        None => {
            spinner.finish_error("No usable download tool");
            Err(PycampError::DownloaderMissing {
                message: "install curl, aria2, or wget 1.14 or newer, then re-run".to_string(),
            })
        }
    }
}

/// Check a wget `--version` banner against the minimum version.
///
/// An unparseable banner is treated as unacceptable; curl or aria2c
/// should be used instead.
pub fn wget_version_acceptable(banner: &str) -> bool {
    match parse_wget_version(banner) {
        Some(version) => version >= MIN_WGET_VERSION,
        None => false,
    }
}

/// Extract (major, minor) from a banner like "GNU Wget 1.21.2 built on ...".
fn parse_wget_version(banner: &str) -> Option<(u32, u32)> {
    let re = Regex::new(r"GNU Wget (\d+)\.(\d+)").ok()?;
    let caps = re.captures(banner)?;
    let major = caps.get(1)?.as_str().parse().ok()?;
    let minor = caps.get(2)?.as_str().parse().ok()?;
    Some((major, minor))
}
