//! Interactive questions asked when flags leave something open.

use dialoguer::{Confirm, Input, theme::ColorfulTheme};
use eyre::{Context, Result};

/// Source of answers for the interactive flow.
pub trait Prompter {
    /// Ask a yes/no question.
    fn ask_yes_no(&mut self, prompt: &str, default: bool) -> Result<bool>;

    /// Ask for free text. An empty answer is returned as-is.
    fn ask_text(&mut self, prompt: &str) -> Result<String>;
}

/// Prompts on the terminal.
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn ask_yes_no(&mut self, prompt: &str, default: bool) -> Result<bool> {
        Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact()
            .wrap_err("Failed to read answer")
    }

    fn ask_text(&mut self, prompt: &str) -> Result<String> {
        // empty input is validated by the caller
        Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .wrap_err("Failed to read answer")
    }
}
