//! Word and line splitting.
//!
//! Both modes strip a leading BOM (when configured) and normalise every line
//! break to LF first. Word mode then collapses all whitespace to single
//! spaces and splits on them; line mode splits on LF as-is, so empty lines
//! survive as empty elements.

use crate::classifier::is_byte_order_mark;
use crate::config::{Config, SplitMode};
use crate::line_ending::normalize_to_lf;
use crate::whitespace::all_whitespace_to_single_space;

/// Split `text` into words or lines according to `cfg.split`.
///
/// Width, line-ending and extra-space options are ignored here. Called with
/// [`SplitMode::Width`] this behaves as line mode; the façade never does that.
pub fn segment_by_boundary(text: &str, cfg: &Config) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let text = if cfg.strip_bom {
        strip_leading_bom(text)
    } else {
        text
    };
    if text.is_empty() {
        return Vec::new();
    }

    let text = normalize_to_lf(text);
    match cfg.split {
        SplitMode::Word => split_words(&text),
        SplitMode::Line | SplitMode::Width => split_lines(&text),
    }
}

fn strip_leading_bom(text: &str) -> &str {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if is_byte_order_mark(u32::from(first)) => chars.as_str(),
        _ => text,
    }
}

fn split_words(text: &str) -> Vec<String> {
    let collapsed = all_whitespace_to_single_space(text);
    let trimmed = collapsed.trim_matches(' ');
    if trimmed.is_empty() {
        return Vec::new();
    }
    trimmed.split(' ').map(str::to_owned).collect()
}

fn split_lines(text: &str) -> Vec<String> {
    text.split('\n').map(str::to_owned).collect()
}
