use std::fmt;

use dialoguer::{theme::ColorfulTheme, Input, Select};
use once_cell::sync::Lazy;

use crate::cli::output;
use crate::cli::CommandError;

static THEME: Lazy<ColorfulTheme> = Lazy::new(ColorfulTheme::default);

/// Print an informational message via the standard CLI output helpers.
pub fn print_info(message: impl fmt::Display) {
    output::info(message);
}

/// Print a warning message via the standard CLI output helpers.
pub fn print_warning(message: impl fmt::Display) {
    output::warning(message);
}

/// Print an error message via the standard CLI output helpers.
pub fn print_error(message: impl fmt::Display) {
    output::error(message);
}

/// Print a success message via the standard CLI output helpers.
pub fn print_success(message: impl fmt::Display) {
    output::success(message);
}

/// Prompt the user for free-form text input; empty input is allowed.
pub fn prompt_text(prompt: &str) -> Result<String, CommandError> {
    Input::<String>::with_theme(&*THEME)
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .map_err(CommandError::from)
}

/// Prompt with a pre-filled default shown to the user.
pub fn prompt_text_with_default(prompt: &str, default: &str) -> Result<String, CommandError> {
    Input::<String>::with_theme(&*THEME)
        .with_prompt(prompt)
        .default(default.to_string())
        .allow_empty(true)
        .interact_text()
        .map_err(CommandError::from)
}

/// Present a list of options and return the chosen index.
pub fn select(prompt: &str, options: &[&str]) -> Result<usize, CommandError> {
    Select::with_theme(&*THEME)
        .with_prompt(prompt)
        .items(options)
        .default(0)
        .interact()
        .map_err(CommandError::from)
}
