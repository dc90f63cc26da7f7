//! Deterministic text generation for the two output artifacts.
//!
//! Everything here is pure: renderers take a [`FormattingContext`] (and for
//! the descriptor a [`crate::domain::ProjectConfiguration`]) and return the
//! complete file content as a `String`, assembled from an ordered list of
//! lines. Writing is the application layer's job, through the `Filesystem`
//! port, in a single truncating write per artifact.

pub mod build_script;
pub mod context;
pub mod descriptor;
pub mod frame;
pub mod header;

pub use build_script::render_build_script;
pub use context::{BORDER, FormattingContext, LINE_WIDTH, SECTION};
pub use descriptor::render_descriptor;
pub use header::{ArtifactKind, render_header};
