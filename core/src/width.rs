// string-breaker/core/src/width.rs
//
// Width-based segmentation.
//
// A single forward pass over the scalars of the text. Each scalar is
// charged a cost (1, plus 1 for fullwidth and plus 1 above the BMP when the
// matching flags are set) and the running width decides where a chunk
// ends. Nearest-word mode only changes which scalars are kept and where a
// flush may happen; it never looks ahead or backtracks.
//
// Every chunk is a contiguous slice of the input. Scalars that are dropped
// (a stripped BOM, whitespace leading a chunk, ordinary whitespace at a
// boundary) always sit just before a chunk starts or just where it ends,
// so the iterator hands out `&str` slices instead of building strings.

use crate::classifier::{
    is_byte_order_mark, is_fullwidth, is_non_breaking_space, is_printable_whitespace,
    is_surrogate_pair, is_whitespace,
};
use crate::config::{Config, WidthFlags};
use crate::error::{BreakError, Result};
use std::str::CharIndices;

/// Cells charged for one scalar under `flags`.
///
/// The fullwidth and surrogate-pair bonuses are independent, so a wide
/// scalar above the BMP costs 3 with both flags set.
pub fn scalar_cost(cp: u32, flags: WidthFlags) -> usize {
    let mut cost = 1;
    if flags.contains(WidthFlags::FULLWIDTH) && is_fullwidth(cp) {
        cost += 1;
    }
    if flags.contains(WidthFlags::SURROGATE_PAIR) && is_surrogate_pair(cp) {
        cost += 1;
    }
    cost
}

/// Lazy iterator over the width-based chunks of a text.
#[derive(Debug, Clone)]
pub struct WidthChunks<'a> {
    text: &'a str,
    chars: CharIndices<'a>,
    max_width: usize,
    flags: WidthFlags,
    strip_bom: bool,
    at_start: bool,
}

impl<'a> WidthChunks<'a> {
    /// Build the iterator. Fails when `cfg.width` is below one or
    /// `cfg.width_flags` carries bits outside the known flags, in that order.
    ///
    /// Only the width-related fields of `cfg` are used; line-ending and
    /// space preprocessing is the caller's job.
    pub fn new(text: &'a str, cfg: &Config) -> Result<Self> {
        if cfg.width < 1 {
            return Err(BreakError::WidthOutOfRange(cfg.width));
        }
        let flags = cfg.width_flags.validate()?;
        Ok(Self {
            text,
            chars: text.char_indices(),
            max_width: usize::try_from(cfg.width).unwrap_or(usize::MAX),
            flags,
            strip_bom: cfg.strip_bom,
            at_start: true,
        })
    }
}

impl<'a> Iterator for WidthChunks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let text = self.text;
        let nearest_word = self.flags.contains(WidthFlags::NEAREST_WORD);

        // Accumulator: byte span of the chunk in progress plus its width.
        let mut start: Option<usize> = None;
        let mut end = 0;
        let mut width = 0;

        for (idx, ch) in self.chars.by_ref() {
            let cp = u32::from(ch);
            let next_end = idx + ch.len_utf8();

            if self.at_start {
                self.at_start = false;
                if is_byte_order_mark(cp) {
                    if !self.strip_bom {
                        // kept, but free
                        start = Some(idx);
                        end = next_end;
                    }
                    continue;
                }
            }

            if nearest_word
                && start.is_none()
                && is_whitespace(cp)
                && !is_printable_whitespace(cp)
            {
                continue;
            }

            width += scalar_cost(cp, self.flags);

            if nearest_word {
                if !is_whitespace(cp) || is_non_breaking_space(cp) {
                    // inside a word: never a break point
                    start.get_or_insert(idx);
                    end = next_end;
                    continue;
                }
                if is_printable_whitespace(cp) || width < self.max_width {
                    start.get_or_insert(idx);
                    end = next_end;
                }
            } else {
                start.get_or_insert(idx);
                end = next_end;
            }

            if width >= self.max_width {
                if let Some(begin) = start {
                    let chunk = &text[begin..end];
                    tracing::trace!(width, len = chunk.len(), "flush chunk");
                    return Some(chunk);
                }
                width = 0;
            }
        }

        start.map(|begin| &text[begin..end])
    }
}

/// Break `text` into chunks of `cfg.width` cells.
///
/// ```
/// use string_breaker::{segment_by_width, Config};
///
/// let cfg = Config { width: 5, ..Config::default() };
/// let chunks = segment_by_width("The quick brown fox", &cfg).unwrap();
/// assert_eq!(chunks, ["The q", "uick ", "brown", " fox"]);
/// ```
pub fn segment_by_width(text: &str, cfg: &Config) -> Result<Vec<String>> {
    Ok(WidthChunks::new(text, cfg)?.map(str::to_owned).collect())
}
