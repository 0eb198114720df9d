//! Consent to provision a private runtime.
//!
//! Provisioning downloads and installs software, so it never happens
//! silently. An override variable may pre-approve it; otherwise the operator
//! is asked, and anything but an explicit yes is a no.

use std::path::Path;

use crate::config::ProcessEnv;
use crate::ui::UserInterface;

/// Override values that grant consent (compared case-insensitively).
const AFFIRMATIVE_OVERRIDES: &[&str] = &["yes", "true", "1", "y"];

/// Interactive answers that grant consent (compared case-insensitively).
const AFFIRMATIVE_ANSWERS: &[&str] = &["y", "yes"];

/// Outcome of asking for consent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsentDecision {
    Granted,
    Denied,
}

impl ConsentDecision {
    pub fn is_granted(self) -> bool {
        self == ConsentDecision::Granted
    }
}

/// Decides whether provisioning may proceed.
#[derive(Debug, Clone)]
pub struct ConsentGate {
    variable: String,
    runtime_label: String,
}

impl ConsentGate {
    /// `variable` names the override; `runtime_label` is used in the question.
    pub fn new(variable: impl Into<String>, runtime_label: impl Into<String>) -> Self {
        Self {
            variable: variable.into(),
            runtime_label: runtime_label.into(),
        }
    }

    pub fn variable(&self) -> &str {
        &self.variable
    }

    /// Decide once for this resolution attempt.
    ///
    /// An affirmative override grants consent without prompting. Any other
    /// value, or none, falls through to the prompt.
    pub fn decide(
        &self,
        env: &ProcessEnv,
        version_tag: &str,
        install_root: &Path,
        ui: &mut dyn UserInterface,
    ) -> ConsentDecision {
        if let Some(value) = env.get_string(&self.variable) {
            if is_affirmative(&value, AFFIRMATIVE_OVERRIDES) {
                tracing::info!("Provisioning approved by {}={}", self.variable, value);
                return ConsentDecision::Granted;
            }
            tracing::debug!(
                "{}={} is not affirmative; asking interactively",
                self.variable,
                value
            );
        }

        let question = format!(
            "Install {} {} in '{}'? (y/N)",
            self.runtime_label,
            version_tag,
            install_root.display()
        );
        let answer = ui.ask(&question);

        if is_affirmative(&answer, AFFIRMATIVE_ANSWERS) {
            ConsentDecision::Granted
        } else {
            tracing::debug!("Provisioning declined with answer {:?}", answer);
            ConsentDecision::Denied
        }
    }
}

fn is_affirmative(value: &str, accepted: &[&str]) -> bool {
    let value = value.trim();
    accepted.iter().any(|a| a.eq_ignore_ascii_case(value))
}
