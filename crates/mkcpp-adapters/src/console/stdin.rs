//! Interactive console backed by stdin/stderr.

use std::io::{BufRead, Write};

use mkcpp_core::application::ApplicationError;
use mkcpp_core::application::ports::Console;
use mkcpp_core::error::MkcppResult;

/// Production console: prompts on stderr, reads lines from stdin.
///
/// Prompts go to stderr so that redirecting stdout never swallows them.
#[derive(Debug, Default)]
pub struct StdinConsole;

impl StdinConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for StdinConsole {
    fn prompt(&mut self, label: &str) -> MkcppResult<Option<String>> {
        let mut stderr = std::io::stderr();
        write!(stderr, "{label}: ").map_err(console_error)?;
        stderr.flush().map_err(console_error)?;

        let mut line = String::new();
        let bytes = std::io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(console_error)?;

        if bytes == 0 {
            // End-of-input: the capture loop re-prompts.
            return Ok(None);
        }

        // Strip the line terminator only; inner whitespace is the user's.
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }

    fn warn(&mut self, message: &str) {
        eprintln!("{message}");
    }
}

fn console_error(e: std::io::Error) -> mkcpp_core::error::MkcppError {
    ApplicationError::ConsoleFailure {
        reason: e.to_string(),
    }
    .into()
}
