//! Progress spinners.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

use super::theme::LauncherTheme;
use super::SpinnerHandle;

/// Longest installer line echoed next to the spinner.
const MAX_LIVE_LINE: usize = 72;

/// A progress spinner for long-running operations, drawn on stderr.
pub struct ProgressSpinner {
    bar: ProgressBar,
    base_message: String,
    theme: LauncherTheme,
}

impl ProgressSpinner {
    /// Create a new spinner with a message.
    pub fn new(message: &str, theme: LauncherTheme) -> Self {
        let bar = ProgressBar::with_draw_target(None, ProgressDrawTarget::stderr());
        if let Ok(style) = ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.magenta} {msg}")
        {
            bar.set_style(style);
        }
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));

        Self {
            bar,
            base_message: message.to_string(),
            theme,
        }
    }

    /// Create a spinner that doesn't show.
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            base_message: String::new(),
            theme: LauncherTheme::plain(),
        }
    }

    fn finish_with(&mut self, rendered: String) {
        if let Ok(style) = ProgressStyle::default_spinner().template("{msg}") {
            self.bar.set_style(style);
        }
        self.bar.finish_with_message(rendered);
    }
}

impl SpinnerHandle for ProgressSpinner {
    fn set_message(&mut self, msg: &str) {
        self.bar.set_message(msg.to_string());
    }

    fn finish_success(&mut self, msg: &str) {
        let rendered = self.theme.format_success(msg);
        self.finish_with(rendered);
    }

    fn finish_error(&mut self, msg: &str) {
        let rendered = self.theme.format_error(msg);
        self.finish_with(rendered);
    }

    fn message_sink(&self) -> Option<Box<dyn Fn(&str) + Send>> {
        let bar = self.bar.clone();
        let base = self.base_message.clone();
        let dim = self.theme.dim.clone();
        Some(Box::new(move |line: &str| {
            let line = truncate(line.trim(), MAX_LIVE_LINE);
            if line.is_empty() {
                return;
            }
            bar.set_message(format!("{}\n  {}", base, dim.apply_to(line)));
        }))
    }
}

/// Truncate to at most `max` characters, marking the cut.
fn truncate(line: &str, max: usize) -> String {
    if line.chars().count() <= max {
        line.to_string()
    } else {
        let kept: String = line.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}
