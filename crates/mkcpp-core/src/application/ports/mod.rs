//! Driven (output) ports — implemented by infrastructure.
//!
//! These traits define what the application needs from the outside world.
//! The `mkcpp-adapters` crate provides the production implementations and a
//! test double for each.

use std::path::Path;

use crate::error::MkcppResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `mkcpp_adapters::filesystem::LocalFilesystem` (production)
/// - `mkcpp_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories. Idempotent: an
    /// already-existing directory is success, not an error.
    fn create_dir_all(&self, path: &Path) -> MkcppResult<()>;

    /// Write content to a file, truncating any previous content.
    fn write_file(&self, path: &Path, content: &str) -> MkcppResult<()>;

    /// Mark a file executable (no-op where the platform has no such bit).
    fn set_executable(&self, path: &Path) -> MkcppResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for the external package manager.
///
/// The generator depends only on this observable contract: a presence
/// query, a per-tool install-state query, and an install command judged by
/// its success/failure signal. Installing software is a documented side
/// effect of generation, not a hidden one.
///
/// Implemented by:
/// - `mkcpp_adapters::package_manager::HomebrewPackageManager` (production)
/// - `mkcpp_adapters::package_manager::FakePackageManager` (testing)
pub trait PackageManager: Send + Sync {
    /// Human-readable name, used in diagnostics.
    fn name(&self) -> &'static str;

    /// Whether the package manager itself can be invoked.
    fn is_available(&self) -> bool;

    /// Whether `tool` is already installed.
    fn is_installed(&self, tool: &str) -> MkcppResult<bool>;

    /// Install `tool`; an unsuccessful install is an error.
    fn install(&self, tool: &str) -> MkcppResult<()>;
}

/// Port for the interactive console used by configuration capture.
///
/// Implemented by:
/// - `mkcpp_adapters::console::StdinConsole` (production)
/// - `mkcpp_adapters::console::ScriptedConsole` (testing)
pub trait Console {
    /// Display `label` and read one line of input, stripped of its line
    /// terminator. `Ok(None)` signals end-of-input, which the capture loop
    /// treats like any other invalid value.
    fn prompt(&mut self, label: &str) -> MkcppResult<Option<String>>;

    /// Show a validation diagnostic before re-prompting. Best effort.
    fn warn(&mut self, message: &str);
}
