pub mod io;
pub mod output;
pub mod screens;
mod shell;

use thiserror::Error;

use crate::core::services::ServiceError;

pub use shell::run_cli;

/// Errors surfaced while driving the interactive wizard.
///
/// Recoverable conditions (a failed upload, an unassigned item) are
/// reported inline and never become a `CommandError`; only broken prompts
/// and unexpected service misuse bubble up here.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
    #[error(transparent)]
    Service(#[from] ServiceError),
}
