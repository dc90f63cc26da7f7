//! mkcpp core - hexagonal architecture implementation.
//!
//! This crate provides the domain and application layers for the mkcpp
//! project generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            mkcpp-cli (CLI)              │
//! │     orchestrates the five stages        │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (Dependency, Capture, Tree, Generate)  │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │  (Filesystem, PackageManager, Console)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     mkcpp-adapters (Infrastructure)     │
//! │ (LocalFilesystem, Homebrew, StdinConsole)│
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain + Render (Pure Logic)     │
//! │ (ProjectConfiguration, ProjectLayout,   │
//! │  FormattingContext, artifact renderers) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use mkcpp_core::{
//!     application::{GenerateService, TreeService},
//!     domain::{ExceptionSupport, LanguageStandard, ProjectConfiguration, ProjectLayout},
//!     render::FormattingContext,
//! };
//!
//! # fn run(filesystem: &dyn mkcpp_core::application::Filesystem) -> mkcpp_core::error::MkcppResult<()> {
//! let config = ProjectConfiguration::new(
//!     "Foo",
//!     LanguageStandard::Cpp17,
//!     ExceptionSupport::Disabled,
//! )?;
//! let layout = ProjectLayout::new(config.name());
//!
//! TreeService::new(filesystem).create_all(&layout, |_| {})?;
//!
//! let ctx = FormattingContext::now();
//! let generator = GenerateService::new(filesystem);
//! generator.write_build_script(&ctx, &layout)?;
//! generator.write_descriptor(&ctx, &config, &layout)?;
//! # Ok(())
//! # }
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Deterministic artifact rendering
pub mod render;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        CaptureService, DependencyService, GenerateService, REQUIRED_TOOLS, TreeService,
        ports::{Console, Filesystem, PackageManager},
    };
    pub use crate::domain::{
        ExceptionSupport, LanguageStandard, Platform, ProjectConfiguration, ProjectLayout,
        Validation,
    };
    pub use crate::error::{MkcppError, MkcppResult};
    pub use crate::render::{ArtifactKind, FormattingContext};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
