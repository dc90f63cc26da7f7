//! Application layer errors.
//!
//! Every variant here is fatal: the generator never retries an environment
//! or filesystem failure, and each variant maps to its own documented
//! process exit code in the CLI layer. Recoverable conditions (bad prompt
//! input, end-of-input) never become errors — the capture loop re-prompts.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while orchestrating a generation run.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The package manager itself is not available; nothing can proceed.
    #[error("package manager '{manager}' is not available")]
    PackageManagerUnavailable { manager: &'static str },

    /// A required tool was absent and could not be installed.
    #[error("required tool '{tool}' failed to install: {reason}")]
    ToolInstallFailed { tool: String, reason: String },

    /// A directory of the fixed project layout could not be created.
    #[error("failed to create directory {path}: {reason}")]
    DirectoryCreation { path: PathBuf, reason: String },

    /// A generated artifact could not be written (or made executable).
    #[error("failed to write artifact {path}: {reason}")]
    ArtifactWrite { path: PathBuf, reason: String },

    /// The interactive console failed below the prompt protocol (an I/O
    /// error, not end-of-input — end-of-input re-prompts).
    #[error("console failure: {reason}")]
    ConsoleFailure { reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::PackageManagerUnavailable { manager } => vec![
                format!("'{manager}' was not found on this system"),
                "Install it from https://brew.sh and re-run".into(),
            ],
            Self::ToolInstallFailed { tool, .. } => vec![
                format!("Try installing '{tool}' manually: brew install {tool}"),
                "Check your network connection".into(),
            ],
            Self::DirectoryCreation { path, .. } => vec![
                format!("Could not create: {}", path.display()),
                "Check that you have write permissions in the current directory".into(),
                "Directories created before the failure are left in place".into(),
            ],
            Self::ArtifactWrite { path, .. } => vec![
                format!("Could not write: {}", path.display()),
                "Check write permissions and available disk space".into(),
            ],
            Self::ConsoleFailure { .. } => vec![
                "The interactive console could not be read or written".into(),
                "Run mkcpp from a regular terminal".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::PackageManagerUnavailable { .. } | Self::ToolInstallFailed { .. } => {
                ErrorCategory::Environment
            }
            Self::DirectoryCreation { .. } => ErrorCategory::Filesystem,
            Self::ArtifactWrite { .. } => ErrorCategory::Generation,
            Self::ConsoleFailure { .. } => ErrorCategory::Internal,
        }
    }
}
