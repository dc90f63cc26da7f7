use thiserror::Error;

/// Root domain error type.
///
/// The domain is deliberately small: almost all bad user input is handled by
/// the capture loop's classification (re-prompt, never an error), so only
/// genuine business-rule violations live here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A `ProjectConfiguration` was constructed with an empty name.
    #[error("project name must not be empty")]
    EmptyProjectName,
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyProjectName => vec![
                "Enter at least one character for the project name".into(),
                "The name becomes the directory root and the executable name".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyProjectName => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
