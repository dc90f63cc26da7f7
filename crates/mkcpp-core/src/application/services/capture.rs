//! Configuration capture: three prompt/validate/retry loops.
//!
//! Each field follows the same protocol: prompt, classify, and either
//! return the accepted value or emit the classification's diagnostic and
//! prompt again. There is no retry limit, and end-of-input is treated like
//! any other invalid value — the loop is an explicit `loop`, never
//! recursion.

use tracing::{debug, instrument};

use crate::application::ports::Console;
use crate::domain::{
    ExceptionSupport, LanguageStandard, ProjectConfiguration, Validation, classify_exceptions,
    classify_name, classify_standard,
};
use crate::error::{MkcppError, MkcppResult};

const EOF_DIAGNOSTIC: &str = "no input received; please enter a value";

/// Captures a validated [`ProjectConfiguration`] over the console port.
pub struct CaptureService<'a> {
    console: &'a mut dyn Console,
}

impl<'a> CaptureService<'a> {
    pub fn new(console: &'a mut dyn Console) -> Self {
        Self { console }
    }

    /// Run all three capture loops in order: name, standard, exceptions.
    #[instrument(skip_all)]
    pub fn capture(&mut self) -> MkcppResult<ProjectConfiguration> {
        let name = self.capture_name()?;
        let standard = self.capture_standard()?;
        let exceptions = self.capture_exceptions()?;
        ProjectConfiguration::new(name, standard, exceptions).map_err(MkcppError::from)
    }

    /// Prompt for the project name until a non-empty line is entered.
    pub fn capture_name(&mut self) -> MkcppResult<String> {
        self.capture_field("Project name", classify_name)
    }

    /// Prompt for the language standard until 14, 17 or 20 is entered.
    pub fn capture_standard(&mut self) -> MkcppResult<LanguageStandard> {
        self.capture_field("C++ standard (14/17/20)", classify_standard)
    }

    /// Prompt for the exceptions answer until a yes/no token is entered.
    pub fn capture_exceptions(&mut self) -> MkcppResult<ExceptionSupport> {
        self.capture_field("Enable C++ exceptions? (y/n)", classify_exceptions)
    }

    /// The shared prompt/validate/retry loop.
    fn capture_field<T>(
        &mut self,
        label: &str,
        classify: impl Fn(&str) -> Validation<T>,
    ) -> MkcppResult<T> {
        loop {
            match self.console.prompt(label)? {
                None => {
                    debug!(field = label, "end of input; re-prompting");
                    self.console.warn(EOF_DIAGNOSTIC);
                }
                Some(line) => match classify(&line) {
                    Validation::Accepted(value) => {
                        debug!(field = label, "accepted");
                        return Ok(value);
                    }
                    Validation::Rejected(reason) => {
                        debug!(field = label, %reason, "rejected; re-prompting");
                        self.console.warn(&reason);
                    }
                },
            }
        }
    }
}
