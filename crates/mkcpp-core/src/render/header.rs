//! The framed header block shared by both generated artifacts.

use crate::render::context::FormattingContext;
use crate::render::frame::{blank, framed, rule, section_break};

/// Author credited on every generated file.
const AUTHOR: &str = "mkcpp";

/// Which of the two artifacts a header is rendered for.
///
/// The two variants differ only in title, usage hint, prose and changelog
/// message; the frame structure is identical.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    BuildScript,
    ProjectDescriptor,
}

impl ArtifactKind {
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::BuildScript => "build.sh",
            Self::ProjectDescriptor => "CMakeLists.txt",
        }
    }

    fn usage_hint(&self) -> &'static str {
        match self {
            Self::BuildScript => "  Usage: ./build.sh",
            Self::ProjectDescriptor => "  Usage: consumed by cmake; not run directly.",
        }
    }

    // Wrapped by hand at authoring time; the frame does no dynamic wrapping.
    fn description(&self) -> &'static [&'static str] {
        match self {
            Self::BuildScript => &[
                "  Links the shared asset directory into the output tree, configures",
                "  the CMake project and drives the ninja build for the mac target.",
            ],
            Self::ProjectDescriptor => &[
                "  Declares the CMake project for the generated source tree: compiler",
                "  flags, output directory and the executable target.",
            ],
        }
    }

    fn changelog_message(&self) -> &'static str {
        match self {
            Self::BuildScript => "Generated build script.",
            Self::ProjectDescriptor => "Generated file.",
        }
    }
}

/// Render the full header block as an ordered list of 80-column lines.
///
/// The date line's padding depends on the rendered month name and is
/// recomputed on every call via the frame builders.
pub fn render_header(ctx: &FormattingContext, kind: ArtifactKind) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(rule());
    lines.push(blank());
    lines.push(framed(&format!("  {}", kind.file_name())));
    lines.push(framed(kind.usage_hint()));
    lines.push(blank());
    for prose in kind.description() {
        lines.push(framed(prose));
    }
    lines.push(blank());
    lines.push(framed(
        "  This file is auto-generated by mkcpp and is overwritten on every",
    ));
    lines.push(framed("  run; do not edit it by hand."));
    lines.push(blank());
    lines.push(framed(&format!("  Author: {AUTHOR}")));
    lines.push(framed(&format!("  Date: {}", ctx.long_date())));
    lines.push(blank());
    lines.push(section_break());
    lines.push(framed(&format!(
        "  {}: {}",
        ctx.short_date(),
        kind.changelog_message()
    )));
    lines.push(blank());
    lines.push(rule());

    lines
}
