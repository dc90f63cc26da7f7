//! Infrastructure adapters for mkcpp.
//!
//! This crate implements the ports defined in `mkcpp-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod console;
pub mod filesystem;
pub mod package_manager;

// Re-export commonly used adapters
pub use console::{ScriptedConsole, StdinConsole};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use package_manager::{FakePackageManager, HomebrewPackageManager};
