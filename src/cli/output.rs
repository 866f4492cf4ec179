use colored::Colorize;
use std::fmt;

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, PartialEq, Eq)]
enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
}

fn render(kind: MessageKind, message: impl fmt::Display) -> String {
    let text = message.to_string();
    match kind {
        MessageKind::Info => format!("{} {}", "INFO:".blue().bold(), text),
        MessageKind::Success => format!("{} {}", "SUCCESS:".green().bold(), text),
        MessageKind::Warning => format!("{} {}", "WARNING:".yellow().bold(), text),
        MessageKind::Error => format!("{} {}", "ERROR:".red().bold(), text),
    }
}

pub fn info(message: impl fmt::Display) {
    println!("{}", render(MessageKind::Info, message));
}

pub fn success(message: impl fmt::Display) {
    println!("{}", render(MessageKind::Success, message));
}

pub fn warning(message: impl fmt::Display) {
    println!("{}", render(MessageKind::Warning, message));
}

pub fn error(message: impl fmt::Display) {
    eprintln!("{}", render(MessageKind::Error, message));
}

/// Section header separating wizard screens.
pub fn section(title: impl fmt::Display) {
    println!();
    println!("{}", format!("=== {} ===", title).bold());
}
