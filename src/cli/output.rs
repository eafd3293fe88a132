use std::fmt;

use colored::Colorize;

/// Styled message helpers for the CLI. `colored` drops the escapes on its
/// own when stdout is not a terminal, so captured output stays readable.
pub fn section(title: impl fmt::Display) -> String {
    format!("=== {} ===", title).bold().to_string()
}

pub fn success(message: impl fmt::Display) -> String {
    message.to_string().green().to_string()
}

pub fn warning(message: impl fmt::Display) -> String {
    message.to_string().yellow().to_string()
}

pub fn error(message: impl fmt::Display) -> String {
    format!("{} {}", "Error:".red().bold(), message)
}
