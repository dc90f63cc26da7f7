//! Core domain layer for mkcpp.
//!
//! Pure business logic with no I/O: what a valid configuration is, what the
//! fixed project layout looks like, and how raw prompt input is classified.
//! Filesystem, subprocess, and console concerns are reached only through the
//! ports defined in the application layer.

pub mod config;
pub mod error;
pub mod layout;

// Re-exports for convenience
pub use config::{
    ExceptionSupport, LanguageStandard, ProjectConfiguration, Validation, classify_exceptions,
    classify_name, classify_standard,
};
pub use error::{DomainError, ErrorCategory};
pub use layout::{Platform, ProjectLayout};
