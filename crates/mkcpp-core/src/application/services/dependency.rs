//! Dependency verification: confirm or install the external build tools.

use tracing::{debug, info, instrument};

use crate::application::ApplicationError;
use crate::application::ports::PackageManager;
use crate::error::MkcppResult;

/// The build tools every generated project needs, checked in this order.
pub const REQUIRED_TOOLS: &[&str] = &["cmake", "ninja"];

/// Verifies the build toolchain through the package-manager port.
pub struct DependencyService<'a> {
    manager: &'a dyn PackageManager,
}

impl<'a> DependencyService<'a> {
    pub fn new(manager: &'a dyn PackageManager) -> Self {
        Self { manager }
    }

    /// Check the package manager, then each required tool in order.
    ///
    /// A tool that is present or installs successfully lets verification
    /// continue; a missing package manager or a failed install is fatal.
    #[instrument(skip_all)]
    pub fn verify(&self) -> MkcppResult<()> {
        if !self.manager.is_available() {
            return Err(ApplicationError::PackageManagerUnavailable {
                manager: self.manager.name(),
            }
            .into());
        }
        debug!(manager = self.manager.name(), "package manager available");

        for tool in REQUIRED_TOOLS {
            if self.manager.is_installed(tool)? {
                debug!(tool, "already installed");
                continue;
            }
            info!(tool, "installing");
            self.manager.install(tool)?;
            info!(tool, "installed");
        }

        Ok(())
    }
}
