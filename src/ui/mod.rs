//! Interactive user interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`MockUI`] for tests, with scripted answers
//! - A spinner shown while a runtime is being provisioned
//!
//! All launcher output goes to stderr; stdout belongs to the runtime.
//!
//! # Example
//!
//! ```
//! use myst_launcher::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.queue_answers(["y"]);
//!
//! assert_eq!(ui.ask("Install Node.js? (y/N)"), "y");
//! assert_eq!(ui.questions(), ["Install Node.js? (y/N)"]);
//! ```

pub mod mock;
pub mod prompts;
pub mod spinner;
pub mod terminal;
pub mod theme;

pub use mock::{MockSpinner, MockUI, SpinnerEvent};
pub use prompts::ask_on_terminal;
pub use spinner::ProgressSpinner;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, LauncherTheme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Ask a free-form question and return the raw answer.
    ///
    /// Returns an empty string when no answer can be read.
    fn ask(&mut self, question: &str) -> String;

    /// Start a spinner for an operation.
    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle>;
}

/// Handle for controlling a spinner.
pub trait SpinnerHandle {
    /// Update the spinner message.
    fn set_message(&mut self, msg: &str);

    /// Mark the operation as successful.
    fn finish_success(&mut self, msg: &str);

    /// Mark the operation as failed.
    fn finish_error(&mut self, msg: &str);

    /// A thread-safe setter for streaming updates, if the spinner is live.
    fn message_sink(&self) -> Option<Box<dyn Fn(&str) + Send>> {
        None
    }
}
