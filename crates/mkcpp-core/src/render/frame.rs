//! Fixed-width comment framing.
//!
//! Every builder here returns a line of exactly [`LINE_WIDTH`] characters.
//! Widths are counted in `char`s; header content is ASCII by construction.

use crate::render::context::{BORDER, LINE_WIDTH, SECTION};

/// Spaces needed to right-pad a line at column `offset` up to the closing
/// border character.
///
/// `offset` is the number of characters already written on the line and must
/// lie in `[1, 79]`; anything else is a caller bug, not a runtime condition.
pub fn fill(offset: usize) -> String {
    debug_assert!(
        (1..LINE_WIDTH).contains(&offset),
        "column offset {offset} outside [1, {}]",
        LINE_WIDTH - 1
    );
    " ".repeat(LINE_WIDTH - 1 - offset)
}

/// A full-width rule of border characters.
pub fn rule() -> String {
    BORDER.to_string().repeat(LINE_WIDTH)
}

/// A framed line around `content`: border, content, fill, border.
pub fn framed(content: &str) -> String {
    let offset = 1 + content.chars().count();
    format!("{BORDER}{content}{}{BORDER}", fill(offset))
}

/// An empty framed line: border, fill, border.
pub fn blank() -> String {
    framed("")
}

/// A section-break line: border, separators, border.
pub fn section_break() -> String {
    format!(
        "{BORDER}{}{BORDER}",
        SECTION.to_string().repeat(LINE_WIDTH - 2)
    )
}
