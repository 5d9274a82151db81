//! Interactive prompt boundary.
//!
//! The flow talks to the operator through the [`Prompt`] trait so tests can
//! script answers; [`ConsolePrompt`] renders real dialoguer prompts.

use anyhow::Result;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Password, Select};

/// Operator-facing prompts: free text, masked password, single select.
pub trait Prompt {
    /// Free-text prompt, optionally with a default accepted on empty input.
    fn input(&self, prompt: &str, default: Option<&str>) -> Result<String>;

    /// Masked password prompt.
    fn password(&self, prompt: &str) -> Result<String>;

    /// Single-choice menu; blocks until a valid choice is made. Returns the
    /// chosen index.
    fn select(&self, prompt: &str, items: &[&str]) -> Result<usize>;
}

/// dialoguer-backed prompt implementation.
pub struct ConsolePrompt {
    theme: ColorfulTheme,
}

impl ConsolePrompt {
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for ConsolePrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompt for ConsolePrompt {
    fn input(&self, prompt: &str, default: Option<&str>) -> Result<String> {
        let mut input = Input::<String>::with_theme(&self.theme).with_prompt(prompt);
        if let Some(default) = default {
            input = input.default(default.to_string());
        }
        Ok(input.interact_text()?)
    }

    fn password(&self, prompt: &str) -> Result<String> {
        Ok(Password::with_theme(&self.theme)
            .with_prompt(prompt)
            .interact()?)
    }

    fn select(&self, prompt: &str, items: &[&str]) -> Result<usize> {
        Ok(Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .interact()?)
    }
}
