//! Body renderer for the generated CMake project descriptor.

use crate::domain::ProjectConfiguration;
use crate::render::context::FormattingContext;
use crate::render::header::{ArtifactKind, render_header};

/// Minimum CMake version asserted by every generated descriptor.
const CMAKE_MINIMUM_VERSION: &str = "3.15";

/// Render the complete `CMakeLists.txt` content for a configuration.
///
/// The descriptor lives in the platform directory, so the source glob
/// reaches one level up into the shared `src` tree while the output
/// directory stays beside the descriptor in `bin`.
pub fn render_descriptor(ctx: &FormattingContext, config: &ProjectConfiguration) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.extend(render_header(ctx, ArtifactKind::ProjectDescriptor));
    lines.push(String::new());

    lines.push(format!(
        "cmake_minimum_required(VERSION {CMAKE_MINIMUM_VERSION})"
    ));
    lines.push(String::new());
    lines.push(format!("project({})", config.name()));
    lines.push(String::new());
    lines.push(format!(
        "set(CMAKE_CXX_FLAGS \"{}\")",
        config.compiler_flags()
    ));
    lines.push("set(CMAKE_RUNTIME_OUTPUT_DIRECTORY ${CMAKE_CURRENT_SOURCE_DIR}/bin)".into());
    lines.push(String::new());
    lines.push("file(GLOB_RECURSE HEADERS ../src/*.h)".into());
    lines.push("file(GLOB_RECURSE SOURCES ../src/*.cpp)".into());
    lines.push(String::new());
    lines.push(format!(
        "add_executable({} ${{HEADERS}} ${{SOURCES}})",
        config.name()
    ));

    let mut content = lines.join("\n");
    content.push('\n');
    content
}
