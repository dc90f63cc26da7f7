//! Comprehensive error handling for the mkcpp CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Proper error chaining
//! - Exit code mapping

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;

use mkcpp_core::application::ApplicationError;
use mkcpp_core::error::MkcppError;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Comprehensive CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid flag value (flags never enter the interactive retry loop).
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// A configuration file could not be read or parsed.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An error propagated from `mkcpp-core`.
    ///
    /// Wrapped here so that the CLI can attach suggestions and the
    /// documented exit code without touching core internals.
    #[error("Generation failed: {0}")]
    Core(#[from] MkcppError),

    /// An I/O operation failed outside the core (e.g. terminal writes).
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidInput { message } => vec![
                format!("Check your input: {message}"),
                "Use --help for usage information".into(),
                "Omit the flag to be prompted interactively".into(),
            ],
            Self::ConfigError { message, .. } => vec![
                format!("Configuration issue: {message}"),
                "Check your config file (mkcpp --config <FILE>)".into(),
            ],
            Self::Core(core_err) => core_err.suggestions(),
            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {message}"),
                "Check file permissions and available disk space".into(),
            ],
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Condition                     | Code |
    /// |-------------------------------|------|
    /// | Package manager absent        |  1   |
    /// | Required tool install failed  |  2   |
    /// | Directory creation failed     |  3   |
    /// | Artifact write failed         |  4   |
    /// | Usage / invalid flag value    |  64  |
    /// | Internal / unexpected         |  70  |
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::InvalidInput { .. } => 64,
            Self::Core(MkcppError::Application(app)) => match app {
                ApplicationError::PackageManagerUnavailable { .. } => 1,
                ApplicationError::ToolInstallFailed { .. } => 2,
                ApplicationError::DirectoryCreation { .. } => 3,
                ApplicationError::ArtifactWrite { .. } => 4,
                ApplicationError::ConsoleFailure { .. } => 70,
            },
            Self::Core(_) => 70,
            Self::ConfigError { .. } | Self::IoError { .. } => 70,
        }
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = String::new();

        // Error header
        output.push_str(&format!(
            "\n{} {}\n\n",
            "✗".red().bold(),
            "Error:".red().bold()
        ));

        // Main error message
        output.push_str(&format!("  {}\n", self.to_string().red()));

        // Error chain (if verbose)
        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                output.push_str(&format!(
                    "\n  {} {}\n",
                    "→".dimmed(),
                    err.to_string().dimmed()
                ));
                source = err.source();
            }
        }

        // Suggestions
        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            for suggestion in suggestions {
                output.push_str(&format!("  {suggestion}\n"));
            }
        }

        // Hint to re-run with -v
        if !verbose {
            output.push('\n');
            output.push_str(&format!(
                "{} {}\n",
                "\u{2139}".blue(), // ℹ
                "Use -v / --verbose for more details.".dimmed(),
            ));
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`] — no ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = String::new();
        out.push_str(&format!("\nError: {self}\n"));

        if verbose {
            let mut src = std::error::Error::source(self);
            while let Some(err) = src {
                out.push_str(&format!("  Caused by: {err}\n"));
                src = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                out.push_str(&format!("  {s}\n"));
            }
        }

        if !verbose {
            out.push_str("\nUse -v / --verbose for more details.\n");
        }

        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self {
            Self::InvalidInput { .. } => tracing::warn!("User error: {}", self),
            Self::ConfigError { .. } => tracing::error!("Configuration error: {}", self),
            Self::Core(_) => tracing::error!("Generation error: {}", self),
            Self::IoError { .. } => tracing::error!("I/O error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    fn core(app: ApplicationError) -> CliError {
        CliError::Core(MkcppError::Application(app))
    }

    // ── exit codes ────────────────────────────────────────────────────────

    #[test]
    fn exit_code_package_manager_absent() {
        assert_eq!(
            core(ApplicationError::PackageManagerUnavailable { manager: "brew" }).exit_code(),
            1
        );
    }

    #[test]
    fn exit_code_tool_install_failure() {
        assert_eq!(
            core(ApplicationError::ToolInstallFailed {
                tool: "ninja".into(),
                reason: "x".into()
            })
            .exit_code(),
            2
        );
    }

    #[test]
    fn exit_code_directory_creation_failure() {
        assert_eq!(
            core(ApplicationError::DirectoryCreation {
                path: PathBuf::from("Foo/src"),
                reason: "x".into()
            })
            .exit_code(),
            3
        );
    }

    #[test]
    fn exit_code_artifact_write_failure() {
        assert_eq!(
            core(ApplicationError::ArtifactWrite {
                path: PathBuf::from("Foo/mac/build.sh"),
                reason: "x".into()
            })
            .exit_code(),
            4
        );
    }

    #[test]
    fn exit_code_usage_error() {
        assert_eq!(
            CliError::InvalidInput {
                message: "bad --std".into()
            }
            .exit_code(),
            64
        );
    }

    #[test]
    fn exit_code_internal() {
        assert_eq!(
            CliError::IoError {
                message: "x".into(),
                source: io::Error::other("e"),
            }
            .exit_code(),
            70
        );
    }

    // ── format ────────────────────────────────────────────────────────────

    #[test]
    fn format_plain_contains_error_and_suggestions() {
        let err = core(ApplicationError::PackageManagerUnavailable { manager: "brew" });
        let s = err.format_plain(false);
        assert!(s.contains("Error:"));
        assert!(s.contains("Suggestions:"));
        assert!(s.contains("brew"));
    }

    #[test]
    fn format_plain_verbose_omits_hint() {
        let err = CliError::InvalidInput {
            message: "x".into(),
        };
        let s = err.format_plain(true);
        assert!(!s.contains("--verbose"));
    }
}
