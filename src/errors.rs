use thiserror::Error;

/// Error type that captures tracker failures across storage, configuration,
/// and user input.
#[derive(Debug, Error)]
pub enum ExpenseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Config error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid amount `{0}`: expected a decimal number")]
    InvalidAmount(String),
    #[error("Malformed expense line: {0}")]
    MalformedLine(String),
    #[error("Input error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
}
