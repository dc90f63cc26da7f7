//! Application services, one per generation stage.

pub mod capture;
pub mod dependency;
pub mod generate;
pub mod tree;

pub use capture::CaptureService;
pub use dependency::{DependencyService, REQUIRED_TOOLS};
pub use generate::GenerateService;
pub use tree::TreeService;
