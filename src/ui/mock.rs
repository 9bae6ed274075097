//! Mock UI for unit tests.

use std::sync::{Arc, Mutex};

use super::{OutputMode, SpinnerHandle, UserInterface};

/// An event recorded by [`MockUI`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Message(String),
    Success(String),
    Warning(String),
    Error(String),
    CommandOutput(String),
    SpinnerStart(String),
    SpinnerSuccess(String),
    SpinnerError(String),
    SpinnerSkipped(String),
    Header(String),
    Progress(usize, usize),
}

/// Records every UI interaction for assertions.
#[derive(Clone)]
pub struct MockUI {
    mode: OutputMode,
    events: Arc<Mutex<Vec<UiEvent>>>,
}

impl MockUI {
    /// Create a mock UI in normal mode.
    pub fn new() -> Self {
        Self::with_mode(OutputMode::Normal)
    }

    /// Create a mock UI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Snapshot of recorded events.
    pub fn events(&self) -> Vec<UiEvent> {
        self.events.lock().unwrap().clone()
    }

    /// All recorded message texts (of any event kind), concatenated.
    pub fn transcript(&self) -> String {
        self.events()
            .iter()
            .map(|e| match e {
                UiEvent::Message(s)
                | UiEvent::Success(s)
                | UiEvent::Warning(s)
                | UiEvent::Error(s)
                | UiEvent::CommandOutput(s)
                | UiEvent::SpinnerStart(s)
                | UiEvent::SpinnerSuccess(s)
                | UiEvent::SpinnerError(s)
                | UiEvent::SpinnerSkipped(s)
                | UiEvent::Header(s) => s.clone(),
                UiEvent::Progress(c, t) => format!("[{}/{}]", c, t),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn push(&self, event: UiEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl Default for MockUI {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.push(UiEvent::Message(msg.to_string()));
    }

    fn success(&mut self, msg: &str) {
        self.push(UiEvent::Success(msg.to_string()));
    }

    fn warning(&mut self, msg: &str) {
        self.push(UiEvent::Warning(msg.to_string()));
    }

    fn error(&mut self, msg: &str) {
        self.push(UiEvent::Error(msg.to_string()));
    }

    fn command_output(&mut self, output: &str) {
        self.push(UiEvent::CommandOutput(output.to_string()));
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.push(UiEvent::SpinnerStart(message.to_string()));
        Box::new(MockSpinner {
            events: Arc::clone(&self.events),
        })
    }

    fn show_header(&mut self, title: &str) {
        self.push(UiEvent::Header(title.to_string()));
    }

    fn show_progress(&mut self, current: usize, total: usize) {
        self.push(UiEvent::Progress(current, total));
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

/// Spinner handle that records finishes into the owning [`MockUI`].
pub struct MockSpinner {
    events: Arc<Mutex<Vec<UiEvent>>>,
}

impl SpinnerHandle for MockSpinner {
    fn set_message(&mut self, _msg: &str) {}

    fn finish_success(&mut self, msg: &str) {
        self.events
            .lock()
            .unwrap()
            .push(UiEvent::SpinnerSuccess(msg.to_string()));
    }

    fn finish_error(&mut self, msg: &str) {
        self.events
            .lock()
            .unwrap()
            .push(UiEvent::SpinnerError(msg.to_string()));
    }

    fn finish_skipped(&mut self, msg: &str) {
        self.events
            .lock()
            .unwrap()
            .push(UiEvent::SpinnerSkipped(msg.to_string()));
    }
}
