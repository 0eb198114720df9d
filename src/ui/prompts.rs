//! Interactive prompts.

use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;

/// Dialoguer theme without the default yellow `?` prefix.
fn prompt_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_prefix: style("❔".to_string()),
        ..ColorfulTheme::default()
    }
}

/// Ask a question on the terminal and return the trimmed answer.
///
/// Empty input is allowed. When the terminal cannot be read (no TTY,
/// closed stdin, interrupted prompt) the answer is the empty string.
pub fn ask_on_terminal(question: &str, term: &Term) -> String {
    let result = Input::<String>::with_theme(&prompt_theme())
        .with_prompt(question)
        .allow_empty(true)
        .report(false)
        .interact_text_on(term);

    match result {
        Ok(answer) => answer.trim().to_string(),
        Err(e) => {
            tracing::debug!("Prompt could not be answered: {}", e);
            String::new()
        }
    }
}
