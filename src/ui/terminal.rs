//! Interactive terminal UI.

use super::non_interactive::NonInteractiveUI;
use super::spinner::ProgressSpinner;
use super::theme::{should_use_colors, PycampTheme};
use super::{OutputMode, SpinnerHandle, UserInterface};

/// UI implementation for interactive terminal sessions.
pub struct TerminalUI {
    mode: OutputMode,
    theme: PycampTheme,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            PycampTheme::new()
        } else {
            PycampTheme::plain()
        };
        Self { mode, theme }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", self.theme.format_success(msg));
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("{}", self.theme.format_warning(msg));
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }

    fn command_output(&mut self, output: &str) {
        if self.mode.shows_command_output() && !output.is_empty() {
            print!("{}", self.theme.dim.apply_to(output));
        }
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            Box::new(ProgressSpinner::new(message))
        } else {
            Box::new(ProgressSpinner::hidden())
        }
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("\n{}\n", self.theme.format_header(title));
        }
    }

    fn show_progress(&mut self, current: usize, total: usize) {
        if self.mode.shows_status() {
            println!(
                "{}",
                self.theme
                    .step_number
                    .apply_to(format!("[{}/{}]", current, total))
            );
        }
    }

    fn is_interactive(&self) -> bool {
        true
    }
}

/// Create the appropriate UI for the current environment.
///
/// Interactive terminals get spinners; CI and piped output get plain
/// line-oriented output.
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    if interactive && console::Term::stdout().is_term() {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_ui_reports_mode() {
        let ui = TerminalUI::new(OutputMode::Quiet);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
        assert!(ui.is_interactive());
    }

    #[test]
    fn create_ui_piped_is_non_interactive() {
        // Test processes have piped stdout, so this always picks the
        // non-interactive implementation.
        let ui = create_ui(true, OutputMode::Normal);
        assert!(!ui.is_interactive());
    }
}
