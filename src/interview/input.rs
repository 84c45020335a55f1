//! Yes/no input handling using rustyline
//!
//! Wraps a readline editor and keeps re-prompting until the user gives
//! a recognized answer. Interrupt (Ctrl-C) aborts the interview; EOF
//! (Ctrl-D) surfaces as `None` so the caller can decide.
//!
//! Performance target: <50ms input responsiveness

use colored::*;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::errors::{CheckerError, Result};

/// Accepted affirmative answers (case-insensitive)
pub const YES_WORDS: &[&str] = &["yes", "y", "1", "true"];

/// Accepted negative answers (case-insensitive)
pub const NO_WORDS: &[&str] = &["no", "n", "0", "false"];

/// Interpret one line as yes/no. Unrecognized input is `None`.
pub fn parse_yes_no(input: &str) -> Option<bool> {
    let normalized = input.trim().to_lowercase();
    if YES_WORDS.contains(&normalized.as_str()) {
        Some(true)
    } else if NO_WORDS.contains(&normalized.as_str()) {
        Some(false)
    } else {
        None
    }
}

/// Input handler managing the readline interface
pub struct InputHandler {
    editor: DefaultEditor,
}

impl InputHandler {
    /// Create new input handler
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new()
            .map_err(|e| CheckerError::Generic(format!("Could not open terminal input: {}", e)))?;
        Ok(InputHandler { editor })
    }

    /// Read one line of input.
    ///
    /// Returns:
    /// - Ok(Some(input)) for normal input
    /// - Ok(None) for EOF (Ctrl-D)
    /// - Err on interrupt (Ctrl-C) or other errors
    pub fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(Some(line.trim().to_string())),
            Err(ReadlineError::Interrupted) => {
                Err(CheckerError::InterviewAborted("interrupted by user".to_string()))
            }
            Err(ReadlineError::Eof) => Ok(None),
            Err(err) => Err(CheckerError::Generic(format!("Readline error: {}", err))),
        }
    }

    /// Ask a yes/no question, re-prompting until the answer parses.
    ///
    /// Unrecognized input prints a hint and asks again; it is never
    /// fatal. `None` means EOF before a valid answer.
    pub fn ask_yes_no(&mut self, prompt: &str) -> Result<Option<bool>> {
        loop {
            let line = match self.read_line(prompt)? {
                Some(line) => line,
                None => return Ok(None),
            };

            match parse_yes_no(&line) {
                Some(answer) => return Ok(Some(answer)),
                None => {
                    println!(
                        "{}",
                        "  Please answer yes or no (y/n, 1/0, true/false).".yellow()
                    );
                }
            }
        }
    }
}
