//! Line-ending transforms applied before width segmentation.
//!
//! All three recognise CRLF, lone LF and lone CR. CRLF is matched first by
//! the alternation so it is never split into two breaks.

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

static ANY_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r\n|\n|\r").expect("static regex"));
static NON_LF_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r\n|\r").expect("static regex"));

/// Literal two-character escape used by [`encode_line_breaks`].
pub const ENCODED_BREAK: &str = "\\n";

/// Delete every line break.
pub fn strip_line_breaks(text: &str) -> Cow<'_, str> {
    ANY_BREAK.replace_all(text, "")
}

/// Turn CRLF and lone CR into LF.
pub fn normalize_to_lf(text: &str) -> Cow<'_, str> {
    NON_LF_BREAK.replace_all(text, "\n")
}

/// Replace every line break with the visible escape `\n` (backslash, `n`).
pub fn encode_line_breaks(text: &str) -> Cow<'_, str> {
    ANY_BREAK.replace_all(text, regex::NoExpand(ENCODED_BREAK))
}
