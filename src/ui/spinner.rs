//! Progress spinners.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use super::theme::PycampTheme;
use super::SpinnerHandle;

/// A progress spinner for long-running sub-processes (clone, build,
/// runtime install).
pub struct ProgressSpinner {
    bar: ProgressBar,
}

impl ProgressSpinner {
    /// Create a new spinner with a message.
    pub fn new(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));

        Self { bar }
    }

    /// Create a spinner that doesn't show (for silent mode).
    pub fn hidden() -> Self {
        let bar = ProgressBar::hidden();
        Self { bar }
    }

    fn finish_with(&mut self, msg: String) {
        self.bar
            .set_style(ProgressStyle::default_spinner().template("{msg}").unwrap());
        self.bar.finish_with_message(msg);
    }
}

impl SpinnerHandle for ProgressSpinner {
    fn set_message(&mut self, msg: &str) {
        self.bar.set_message(msg.to_string());
    }

    fn finish_success(&mut self, msg: &str) {
        let theme = PycampTheme::new();
        self.finish_with(theme.format_success(msg));
    }

    fn finish_error(&mut self, msg: &str) {
        let theme = PycampTheme::new();
        self.finish_with(theme.format_error(msg));
    }

    fn finish_skipped(&mut self, msg: &str) {
        let theme = PycampTheme::new();
        self.finish_with(theme.format_skipped(msg));
    }
}

/// Spinner for non-interactive output: prints plain finish lines instead
/// of animating.
pub struct NoopSpinner {
    print: bool,
}

impl NoopSpinner {
    /// Create a noop spinner; `print` controls whether finish lines show.
    pub fn new(print: bool) -> Self {
        Self { print }
    }
}

impl SpinnerHandle for NoopSpinner {
    fn set_message(&mut self, _msg: &str) {}

    fn finish_success(&mut self, msg: &str) {
        if self.print {
            println!("✓ {}", msg);
        }
    }

    fn finish_error(&mut self, msg: &str) {
        if self.print {
            eprintln!("✗ {}", msg);
        }
    }

    fn finish_skipped(&mut self, msg: &str) {
        if self.print {
            println!("○ {}", msg);
        }
    }
}
