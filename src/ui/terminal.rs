//! Interactive terminal UI.

use console::Term;
use std::io::Write;

use super::{
    ask_on_terminal, should_use_colors, LauncherTheme, ProgressSpinner, SpinnerHandle,
    UserInterface,
};

/// Terminal UI writing to stderr.
pub struct TerminalUI {
    term: Term,
    theme: LauncherTheme,
}

impl TerminalUI {
    pub fn new() -> Self {
        let theme = if should_use_colors() {
            LauncherTheme::new()
        } else {
            LauncherTheme::plain()
        };

        Self {
            term: Term::stderr(),
            theme,
        }
    }
}

impl Default for TerminalUI {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        writeln!(self.term, "{}", msg).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_error(msg)).ok();
    }

    fn ask(&mut self, question: &str) -> String {
        ask_on_terminal(question, &self.term)
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.term.is_term() {
            Box::new(ProgressSpinner::new(message, self.theme.clone()))
        } else {
            writeln!(self.term, "{}", message).ok();
            Box::new(ProgressSpinner::hidden())
        }
    }
}
