//! Interactive prompting.
//!
//! Flows ask for missing input through the [`Prompter`] trait so they can be
//! driven by a script in tests. [`TerminalPrompter`] is the real
//! implementation, built on dialoguer.

use crate::error::{GitshipError, Result};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use std::io::{self, IsTerminal};

/// Capability for asking the user for free text or a single choice.
pub trait Prompter {
    /// Ask for free text. `validate` returns `Err(reason)` to reject an answer;
    /// the terminal implementation shows the reason and asks again.
    ///
    /// Returns `Err(GitshipError::PromptCancelled)` if the user aborts.
    fn input(
        &self,
        message: &str,
        validate: &dyn Fn(&str) -> std::result::Result<(), String>,
    ) -> Result<String>;

    /// Ask the user to pick one of `options`; returns the chosen index.
    ///
    /// Returns `Err(GitshipError::PromptCancelled)` if the user aborts.
    fn select(&self, message: &str, options: &[&str], default: usize) -> Result<usize>;
}

/// Ask for a value that must not be blank and return it trimmed.
///
/// `what` names the value in the validation message, e.g. "Commit message"
/// produces "Commit message is required.".
pub fn required_text(prompter: &dyn Prompter, message: &str, what: &str) -> Result<String> {
    let required = format!("{} is required.", what);
    let value = prompter.input(message, &|value: &str| {
        if value.trim().is_empty() {
            Err(required.clone())
        } else {
            Ok(())
        }
    })?;

    let value = value.trim();
    if value.is_empty() {
        return Err(GitshipError::InvalidInput(required));
    }
    Ok(value.to_string())
}

/// Prompts on the controlling terminal.
pub struct TerminalPrompter {
    interactive: bool,
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    /// Create a prompter; prompting is refused when stdin is not a terminal.
    pub fn new() -> Self {
        Self {
            interactive: io::stdin().is_terminal(),
            theme: ColorfulTheme::default(),
        }
    }

    fn ensure_interactive(&self, message: &str) -> Result<()> {
        if self.interactive {
            Ok(())
        } else {
            Err(GitshipError::InvalidInput(format!(
                "cannot ask '{}' without an interactive terminal.",
                message.trim_end_matches(':')
            )))
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn input(
        &self,
        message: &str,
        validate: &dyn Fn(&str) -> std::result::Result<(), String>,
    ) -> Result<String> {
        self.ensure_interactive(message)?;

        Input::<String>::with_theme(&self.theme)
            .with_prompt(message)
            .validate_with(|value: &String| validate(value.as_str()))
            .interact_text()
            .map_err(from_dialoguer)
    }

    fn select(&self, message: &str, options: &[&str], default: usize) -> Result<usize> {
        self.ensure_interactive(message)?;

        Select::with_theme(&self.theme)
            .with_prompt(message)
            .items(options)
            .default(default)
            .interact_opt()
            .map_err(from_dialoguer)?
            .ok_or(GitshipError::PromptCancelled)
    }
}

/// Ctrl-C surfaces as an interrupted read while the terminal is in raw mode.
fn from_dialoguer(err: dialoguer::Error) -> GitshipError {
    match err {
        dialoguer::Error::IO(e) if e.kind() == io::ErrorKind::Interrupted => {
            GitshipError::PromptCancelled
        }
        other => GitshipError::InvalidInput(format!("failed to read input: {}", other)),
    }
}
