//! Process-wide formatting constants for one generation run.

use chrono::{DateTime, Local};

/// Total width of every framed line in a generated header, in characters.
pub const LINE_WIDTH: usize = 80;

/// Border character framing every header line.
pub const BORDER: char = '#';

/// Separator character filling a section-break line.
pub const SECTION: char = '-';

/// Write-once rendering state shared by every render call of a run.
///
/// Constructed immediately before the generation engine runs and never
/// mutated afterwards; both artifacts of a run embed the same timestamp.
#[derive(Debug, Clone)]
pub struct FormattingContext {
    timestamp: DateTime<Local>,
}

impl FormattingContext {
    /// Capture the current time as the run's timestamp.
    pub fn now() -> Self {
        Self {
            timestamp: Local::now(),
        }
    }

    /// Build a context with a fixed timestamp. Used by tests to pin the
    /// rendered dates.
    pub fn at(timestamp: DateTime<Local>) -> Self {
        Self { timestamp }
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    /// Long form for the header's date line, e.g. `September 3, 2026`.
    ///
    /// The month name's length varies, so callers must recompute line
    /// padding from the rendered string, never hardcode it.
    pub fn long_date(&self) -> String {
        self.timestamp.format("%B %-d, %Y").to_string()
    }

    /// Short form for the changelog line, e.g. `09/03/26`.
    pub fn short_date(&self) -> String {
        self.timestamp.format("%m/%d/%y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn long_date_spells_out_the_month() {
        let ctx = FormattingContext::at(Local.with_ymd_and_hms(2026, 9, 3, 12, 0, 0).unwrap());
        assert_eq!(ctx.long_date(), "September 3, 2026");
    }

    #[test]
    fn short_date_is_zero_padded() {
        let ctx = FormattingContext::at(Local.with_ymd_and_hms(2026, 9, 3, 12, 0, 0).unwrap());
        assert_eq!(ctx.short_date(), "09/03/26");
    }

    #[test]
    fn day_is_not_zero_padded_in_long_form() {
        let ctx = FormattingContext::at(Local.with_ymd_and_hms(2026, 1, 7, 8, 0, 0).unwrap());
        assert_eq!(ctx.long_date(), "January 7, 2026");
    }
}
