//! Scripted package manager for testing.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use mkcpp_core::application::ApplicationError;
use mkcpp_core::application::ports::PackageManager;
use mkcpp_core::error::MkcppResult;

/// A package manager whose answers are scripted by the test.
#[derive(Debug, Clone)]
pub struct FakePackageManager {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    available: bool,
    installed: HashSet<String>,
    failing_installs: HashSet<String>,
    install_log: Vec<String>,
}

impl FakePackageManager {
    /// An available manager with nothing installed yet.
    pub fn available() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                available: true,
                ..Inner::default()
            })),
        }
    }

    /// A manager that is not present at all.
    pub fn missing() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner::default())),
        }
    }

    /// Mark `tool` as already installed.
    pub fn with_installed(self, tool: &str) -> Self {
        self.inner.lock().unwrap().installed.insert(tool.into());
        self
    }

    /// Make installing `tool` fail.
    pub fn with_failing_install(self, tool: &str) -> Self {
        self.inner
            .lock()
            .unwrap()
            .failing_installs
            .insert(tool.into());
        self
    }

    /// Tools installed through the port during the test, in order.
    pub fn install_log(&self) -> Vec<String> {
        self.inner.lock().unwrap().install_log.clone()
    }
}

impl PackageManager for FakePackageManager {
    fn name(&self) -> &'static str {
        "fake-brew"
    }

    fn is_available(&self) -> bool {
        self.inner.lock().unwrap().available
    }

    fn is_installed(&self, tool: &str) -> MkcppResult<bool> {
        Ok(self.inner.lock().unwrap().installed.contains(tool))
    }

    fn install(&self, tool: &str) -> MkcppResult<()> {
        let mut inner = self.inner.lock().unwrap();
        inner.install_log.push(tool.to_string());

        if inner.failing_installs.contains(tool) {
            return Err(ApplicationError::ToolInstallFailed {
                tool: tool.to_string(),
                reason: "scripted failure".into(),
            }
            .into());
        }
        inner.installed.insert(tool.to_string());
        Ok(())
    }
}
