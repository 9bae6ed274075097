//! Error types for pycamp operations.
//!
//! This module defines [`PycampError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `PycampError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `PycampError::Other`) for unexpected errors
//! - Sub-process failures carry the captured exit code so the process can
//!   re-exit with it

use thiserror::Error;

/// Core error type for pycamp operations.
#[derive(Debug, Error)]
pub enum PycampError {
    /// The home directory could not be resolved.
    #[error("Could not determine the home directory")]
    HomeDirUnavailable,

    /// None of the acceptable download tools is usable.
    #[error("No usable download tool found: {message}")]
    DownloaderMissing { message: String },

    /// A sub-process exited non-zero (or was killed by a signal).
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// A bootstrap step failed for a reason other than a sub-process exit.
    #[error("Step '{step}' failed: {message}")]
    StepFailed { step: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PycampError {
    /// Process exit code for this error.
    ///
    /// A failing sub-step propagates its captured exit code; everything
    /// else (including a missing download tool) exits 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::CommandFailed {
                code: Some(code), ..
            } => *code,
            _ => 1,
        }
    }
}

/// Result type alias for pycamp operations.
pub type Result<T> = std::result::Result<T, PycampError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_failed_displays_command_and_code() {
        let err = PycampError::CommandFailed {
            command: "git clone https://example.com/pyenv.git".into(),
            code: Some(128),
        };
        let msg = err.to_string();
        assert!(msg.contains("git clone"));
        assert!(msg.contains("128"));
    }

    #[test]
    fn command_failed_propagates_exit_code() {
        let err = PycampError::CommandFailed {
            command: "pyenv install".into(),
            code: Some(2),
        };
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn command_killed_by_signal_exits_one() {
        let err = PycampError::CommandFailed {
            command: "make".into(),
            code: None,
        };
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn downloader_missing_exits_one() {
        let err = PycampError::DownloaderMissing {
            message: "install curl".into(),
        };
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().contains("install curl"));
    }

    #[test]
    fn step_failed_displays_step_and_message() {
        let err = PycampError::StepFailed {
            step: "runtime".into(),
            message: "pyenv not found".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("runtime"));
        assert!(msg.contains("pyenv not found"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: PycampError = io_err.into();
        assert!(matches!(err, PycampError::Io(_)));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(PycampError::HomeDirUnavailable)
        }
        assert!(returns_error().is_err());
    }
}
