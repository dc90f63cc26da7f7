//! Body renderer for the generated platform build script.
//!
//! The script is pure text from the generator's point of view: the commands
//! it contains (ln, cmake, ninja) are never executed here. Its contract for
//! the user is documented in the emitted header: exit 4 on asset-link
//! failure, 5 on configuration failure, 6 on build failure, 0 on success.

use crate::render::context::FormattingContext;
use crate::render::frame::{framed, section_break};
use crate::render::header::{ArtifactKind, render_header};

/// Render the complete `build.sh` content.
///
/// The script is independent of the captured configuration; only the header
/// timestamp varies between runs.
pub fn render_build_script(ctx: &FormattingContext) -> String {
    let mut lines: Vec<String> = Vec::new();

    // The shebang must stay the first line; the framed header follows it.
    lines.push("#!/bin/bash".into());
    lines.extend(render_header(ctx, ArtifactKind::BuildScript));
    lines.push(String::new());

    // All three procedures resolve paths relative to the script itself so
    // the script works no matter where it is invoked from.
    lines.push(r#"SCRIPT_DIR="$(cd "$(dirname "$0")" && pwd)""#.into());
    lines.push(String::new());

    push_procedure(
        &mut lines,
        "link_assets: create the shared asset link in the binaries directory",
        &[
            r#"link_assets() {"#,
            r#"    cd "${SCRIPT_DIR}/bin""#,
            r#"    if [ ! -e assets ]; then"#,
            r#"        ln -s ../../assets assets"#,
            r#"        if [ $? -ne 0 ]; then"#,
            r#"            echo "build.sh: failed to create assets link""#,
            r#"            exit 4"#,
            r#"        fi"#,
            r#"    fi"#,
            r#"}"#,
        ],
    );

    push_procedure(
        &mut lines,
        "configure_project: run cmake against the parent directory",
        &[
            r#"configure_project() {"#,
            r#"    cd "${SCRIPT_DIR}/build""#,
            r#"    cmake -G Ninja .."#,
            r#"    if [ $? -ne 0 ]; then"#,
            r#"        echo "build.sh: cmake configuration failed""#,
            r#"        exit 5"#,
            r#"    fi"#,
            r#"}"#,
        ],
    );

    push_procedure(
        &mut lines,
        "run_build: execute the ninja build",
        &[
            r#"run_build() {"#,
            r#"    cd "${SCRIPT_DIR}/build""#,
            r#"    ninja"#,
            r#"    if [ $? -ne 0 ]; then"#,
            r#"        echo "build.sh: ninja build failed""#,
            r#"        exit 6"#,
            r#"    fi"#,
            r#"}"#,
        ],
    );

    // Unconditional call sequence: link, configure, build.
    lines.push("link_assets".into());
    lines.push("configure_project".into());
    lines.push("run_build".into());

    let mut content = lines.join("\n");
    content.push('\n');
    content
}

/// Emit one procedure: framed mini header (name + one-line description)
/// followed by its body and a trailing blank line.
fn push_procedure(lines: &mut Vec<String>, title: &str, body: &[&str]) {
    lines.push(section_break());
    lines.push(framed(&format!("  {title}")));
    lines.push(section_break());
    lines.extend(body.iter().map(|l| (*l).to_string()));
    lines.push(String::new());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::context::LINE_WIDTH;
    use chrono::{Local, TimeZone};

    fn ctx() -> FormattingContext {
        FormattingContext::at(Local.with_ymd_and_hms(2026, 9, 3, 10, 30, 0).unwrap())
    }

    #[test]
    fn shebang_is_the_first_line() {
        let script = render_build_script(&ctx());
        assert!(script.starts_with("#!/bin/bash\n"));
    }

    #[test]
    fn defines_and_calls_all_three_procedures_in_order() {
        let script = render_build_script(&ctx());
        for name in ["link_assets()", "configure_project()", "run_build()"] {
            assert!(script.contains(name), "missing definition: {name}");
        }

        // The trailing call sequence preserves link -> configure -> build.
        let tail: Vec<&str> = script.trim_end().lines().rev().take(3).collect();
        assert_eq!(tail, ["run_build", "configure_project", "link_assets"]);
    }

    #[test]
    fn encodes_the_documented_exit_codes() {
        let script = render_build_script(&ctx());
        assert!(script.contains("exit 4"));
        assert!(script.contains("exit 5"));
        assert!(script.contains("exit 6"));
    }

    #[test]
    fn links_two_levels_up_into_the_asset_directory() {
        let script = render_build_script(&ctx());
        assert!(script.contains("ln -s ../../assets assets"));
        // Only created when absent; re-running the script must be harmless.
        assert!(script.contains("if [ ! -e assets ]; then"));
    }

    #[test]
    fn framed_lines_keep_the_fixed_width() {
        let script = render_build_script(&ctx());
        for line in script.lines().filter(|l| l.starts_with('#') && *l != "#!/bin/bash") {
            assert_eq!(line.chars().count(), LINE_WIDTH, "line: {line:?}");
        }
    }

    #[test]
    fn rendering_is_deterministic_for_a_fixed_context() {
        assert_eq!(render_build_script(&ctx()), render_build_script(&ctx()));
    }
}
