//! Homebrew adapter: the package-manager port backed by `brew`.
//!
//! Every query is judged purely by the subprocess's exit status; stdout and
//! stderr are passed through to the user for `install`, suppressed for the
//! boolean queries.

use std::process::{Command, Stdio};

use tracing::debug;

use mkcpp_core::application::ApplicationError;
use mkcpp_core::application::ports::PackageManager;
use mkcpp_core::error::MkcppResult;

const BREW: &str = "brew";

/// Production package manager backed by Homebrew.
#[derive(Debug, Clone, Copy, Default)]
pub struct HomebrewPackageManager;

impl HomebrewPackageManager {
    pub fn new() -> Self {
        Self
    }
}

impl PackageManager for HomebrewPackageManager {
    fn name(&self) -> &'static str {
        BREW
    }

    fn is_available(&self) -> bool {
        Command::new(BREW)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false)
    }

    fn is_installed(&self, tool: &str) -> MkcppResult<bool> {
        // `brew list <tool>` exits non-zero when the formula is absent;
        // that is a negative answer, not an error. Only a failure to spawn
        // brew at all is an error.
        let status = Command::new(BREW)
            .args(["list", tool])
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| ApplicationError::ToolInstallFailed {
                tool: tool.to_string(),
                reason: format!("could not query brew: {e}"),
            })?;

        debug!(tool, installed = status.success(), "install-state query");
        Ok(status.success())
    }

    fn install(&self, tool: &str) -> MkcppResult<()> {
        let status = Command::new(BREW)
            .args(["install", tool])
            .status()
            .map_err(|e| ApplicationError::ToolInstallFailed {
                tool: tool.to_string(),
                reason: format!("could not run brew install: {e}"),
            })?;

        if !status.success() {
            return Err(ApplicationError::ToolInstallFailed {
                tool: tool.to_string(),
                reason: format!("brew install exited with {status}"),
            }
            .into());
        }
        Ok(())
    }
}
