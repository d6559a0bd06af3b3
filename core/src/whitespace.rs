//! Whitespace compaction.

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

// Two or more plain spaces only; tabs and breaks are left alone.
static SPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\x20{2,}").expect("static regex"));
// Any Unicode whitespace, line breaks and U+FEFF included.
static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s\u{FEFF}]+").expect("static regex"));

/// Collapse every run of two or more ASCII spaces into one space.
pub fn collapse_runs(text: &str) -> Cow<'_, str> {
    SPACE_RUN.replace_all(text, " ")
}

/// Collapse every run of any whitespace (line breaks included) into one space.
///
/// A leading BOM counts as whitespace here, so callers that care about the
/// BOM must strip it before calling this.
pub fn all_whitespace_to_single_space(text: &str) -> Cow<'_, str> {
    WHITESPACE_RUN.replace_all(text, " ")
}
