//! Scripted console for testing the capture loops.

use std::collections::VecDeque;

use mkcpp_core::application::ports::Console;
use mkcpp_core::error::MkcppResult;

/// A console whose answers come from a fixed script.
///
/// `None` entries simulate end-of-input. Running past the end of the script
/// panics — a capture loop that consumes more answers than the test
/// provided is a test failure, not an infinite loop.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    answers: VecDeque<Option<String>>,
    prompts: Vec<String>,
    warnings: Vec<String>,
}

impl ScriptedConsole {
    /// Script from `Some("line")` / `None` (end-of-input) entries.
    pub fn with_answers(answers: impl IntoIterator<Item = Option<&'static str>>) -> Self {
        Self {
            answers: answers
                .into_iter()
                .map(|a| a.map(str::to_string))
                .collect(),
            prompts: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Every prompt label shown so far, in order.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Every diagnostic shown so far, in order.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }
}

impl Console for ScriptedConsole {
    fn prompt(&mut self, label: &str) -> MkcppResult<Option<String>> {
        self.prompts.push(label.to_string());
        Ok(self
            .answers
            .pop_front()
            .expect("scripted console ran out of answers"))
    }

    fn warn(&mut self, message: &str) {
        self.warnings.push(message.to_string());
    }
}
