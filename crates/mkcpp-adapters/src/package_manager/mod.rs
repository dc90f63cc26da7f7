//! Package-manager adapters.

mod fake;
mod homebrew;

pub use fake::FakePackageManager;
pub use homebrew::HomebrewPackageManager;
