//! Application layer for mkcpp.
//!
//! This layer contains:
//! - **Services**: one per generation stage (dependencies, capture, tree,
//!   artifacts)
//! - **Ports**: interface definitions (traits) for external dependencies
//! - **Errors**: application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{CaptureService, DependencyService, GenerateService, REQUIRED_TOOLS, TreeService};

// Re-export port traits (for adapter implementation)
pub use ports::{Console, Filesystem, PackageManager};

pub use error::ApplicationError;
