use std::io::BufRead;

use rustyline::{error::ReadlineError, DefaultEditor};

use crate::errors::ExpenseError;

/// Source of interactive answers. The shell never reads the terminal
/// directly: interactive runs go through rustyline, script runs and tests
/// feed prepared lines through a buffered reader.
pub trait Prompter {
    /// Reads one line of input, returning `None` once input is exhausted
    /// (end of file or interrupt).
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, ExpenseError>;
}

pub struct ReadlinePrompter {
    editor: DefaultEditor,
}

impl ReadlinePrompter {
    pub fn new() -> Result<Self, ExpenseError> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl Prompter for ReadlinePrompter {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, ExpenseError> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                self.editor.add_history_entry(line.as_str()).ok();
                Ok(Some(line))
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}

/// Consumes newline-delimited answers from any buffered reader. Prompts
/// are not echoed; script input carries no terminal.
pub struct ScriptPrompter<R: BufRead> {
    input: R,
}

impl<R: BufRead> ScriptPrompter<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }
}

impl<R: BufRead> Prompter for ScriptPrompter<R> {
    fn read_line(&mut self, _prompt: &str) -> Result<Option<String>, ExpenseError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
