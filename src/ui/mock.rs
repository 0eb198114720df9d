//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion. Answers to questions come from a
//! queue, then from an optional fallback, then default to empty input.
//!
//! # Example
//!
//! ```
//! use myst_launcher::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("Couldn't find installed `node`.");
//!
//! assert!(ui.has_message("Couldn't find"));
//! assert_eq!(ui.ask("Proceed?"), "");
//! ```

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use super::{SpinnerHandle, UserInterface};

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    messages: Vec<String>,
    errors: Vec<String>,
    spinners: Vec<String>,
    spinner_events: Rc<RefCell<Vec<SpinnerEvent>>>,
    answers: VecDeque<String>,
    default_answer: Option<String>,
    questions: Vec<String>,
}

/// Something that happened to a spinner started through `MockUI`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpinnerEvent {
    Message(String),
    Success(String),
    Error(String),
}

impl MockUI {
    /// Create a new MockUI.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue answers, returned in order by `ask`.
    pub fn queue_answers<I, S>(&mut self, answers: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.answers.extend(answers.into_iter().map(Into::into));
    }

    /// Answer used once the queue is exhausted.
    pub fn set_default_answer(&mut self, answer: &str) {
        self.default_answer = Some(answer.to_string());
    }

    /// Every question asked, in order.
    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured errors.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Messages spinners were started with.
    pub fn spinners(&self) -> &[String] {
        &self.spinners
    }

    /// Everything spinners reported after starting.
    pub fn spinner_events(&self) -> Vec<SpinnerEvent> {
        self.spinner_events.borrow().clone()
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }
}

impl UserInterface for MockUI {
    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn ask(&mut self, question: &str) -> String {
        self.questions.push(question.to_string());
        self.answers
            .pop_front()
            .or_else(|| self.default_answer.clone())
            .unwrap_or_default()
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.spinners.push(message.to_string());
        Box::new(MockSpinner {
            events: Rc::clone(&self.spinner_events),
        })
    }
}

/// Mock spinner that reports into its `MockUI`.
#[derive(Debug, Default)]
pub struct MockSpinner {
    events: Rc<RefCell<Vec<SpinnerEvent>>>,
}

impl SpinnerHandle for MockSpinner {
    fn set_message(&mut self, msg: &str) {
        self.events
            .borrow_mut()
            .push(SpinnerEvent::Message(msg.to_string()));
    }

    fn finish_success(&mut self, msg: &str) {
        self.events
            .borrow_mut()
            .push(SpinnerEvent::Success(msg.to_string()));
    }

    fn finish_error(&mut self, msg: &str) {
        self.events
            .borrow_mut()
            .push(SpinnerEvent::Error(msg.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_come_from_queue_in_order() {
        let mut ui = MockUI::new();
        ui.queue_answers(["first", "second"]);
        assert_eq!(ui.ask("q1"), "first");
        assert_eq!(ui.ask("q2"), "second");
        assert_eq!(ui.questions(), ["q1", "q2"]);
    }

    #[test]
    fn default_answer_after_queue() {
        let mut ui = MockUI::new();
        ui.queue_answers(["y"]);
        ui.set_default_answer("n");
        assert_eq!(ui.ask("a"), "y");
        assert_eq!(ui.ask("b"), "n");
    }

    #[test]
    fn unanswered_question_is_empty() {
        let mut ui = MockUI::new();
        assert_eq!(ui.ask("anything?"), "");
    }

    #[test]
    fn captures_output_channels() {
        let mut ui = MockUI::new();
        ui.message("hello");
        ui.error("broken");
        assert!(ui.has_message("hello"));
        assert!(ui.has_error("broken"));
        assert_eq!(ui.errors(), ["broken"]);
    }

    #[test]
    fn spinner_events_are_shared() {
        let mut ui = MockUI::new();
        let mut spinner = ui.start_spinner("Installing");
        spinner.set_message("step 1");
        spinner.finish_success("Installed");

        assert_eq!(ui.spinners(), ["Installing"]);
        assert_eq!(
            ui.spinner_events(),
            vec![
                SpinnerEvent::Message("step 1".to_string()),
                SpinnerEvent::Success("Installed".to_string()),
            ]
        );
    }
}
