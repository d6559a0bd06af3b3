// string-breaker/core/src/classifier.rs
//
// Pure predicates over a single Unicode codepoint (an integer scalar value,
// never a UTF-16 code unit). The segmenters only ask these questions; they
// never inspect character properties directly.
//
// Whitespace sets follow the Unicode Zs category plus the control-range
// breaks, not `char::is_whitespace`: U+2028 (line separator) is
// deliberately not a break point here.

use phf::phf_set;
use unicode_width::UnicodeWidthChar;

/// Byte-order mark markers checked against the first scalar of an input.
///
/// Besides U+FEFF this carries the values inherited from byte-level BOM
/// detection (swapped UTF-16, the UTF-8 byte triple and the UTF-7 variants
/// read as one integer). Most of them are not valid scalars and can never
/// match a `char`; they stay in the table for compatibility only.
static BOM_MARKERS: phf::Set<u64> = phf_set! {
    0xFEFFu64,         // UTF-16-BE
    0xFFFEu64,         // UTF-16-LE
    0xEFBBBFu64,       // UTF-8
    0x2B2F76382Du64,   // UTF-7 +/v8-
    0x2B2F7638u64,     // UTF-7 +/v8
    0x2B2F7639u64,     // UTF-7 +/v9
    0x2B2F7626u64,     // UTF-7 +/v+
};

/// True when the codepoint needs two UTF-16 code units (above the BMP).
///
/// Used purely as a width signal, not as a validity check.
pub fn is_surrogate_pair(cp: u32) -> bool {
    cp >= 0x10000
}

/// True for U+FEFF and the historical encoding markers.
pub fn is_byte_order_mark(cp: u32) -> bool {
    BOM_MARKERS.contains(&u64::from(cp))
}

/// Unicode space separators (category Zs).
pub fn is_z_space(cp: u32) -> bool {
    matches!(
        cp,
        0x0020 | 0x00A0 | 0x1680 | 0x2000..=0x200A | 0x202F | 0x205F | 0x3000
    )
}

/// Zs spaces plus tab through carriage return, next-line and paragraph separator.
pub fn is_whitespace(cp: u32) -> bool {
    matches!(cp, 0x0009..=0x000D | 0x0085 | 0x2029) || is_z_space(cp)
}

/// NBSP and narrow NBSP. Whitespace, but never a break point.
pub fn is_non_breaking_space(cp: u32) -> bool {
    cp == 0x00A0 || cp == 0x202F
}

/// Ogham space mark: the one whitespace scalar that renders a visible glyph.
pub fn is_printable_whitespace(cp: u32) -> bool {
    cp == 0x1680
}

/// True when the scalar occupies two display cells (East Asian Wide/Fullwidth).
pub fn is_fullwidth(cp: u32) -> bool {
    char::from_u32(cp)
        .and_then(|ch| ch.width())
        .is_some_and(|w| w == 2)
}
