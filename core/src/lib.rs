//! string-breaker
//!
//! Breaks text into an ordered list of substrings: fixed display-width
//! chunks, words, or lines. Width chunks can charge fullwidth characters and
//! characters above the BMP two cells, and can be told to break only at
//! whitespace.
//!
//! Public API:
//! - `string_breaker` - resolve options and split, the main entry point
//! - `break_with` - split with an already resolved `Config`
//! - `Config` / `PartialConfig` / `Options` - option resolution and TOML files
//! - `WidthChunks` - lazy width segmentation over borrowed slices
//! - `wire::break_json` - the loosely-typed JSON option object surface
//!
//! ```
//! use string_breaker::{string_breaker, PartialConfig, SplitMode};
//!
//! let x = string_breaker("The quick brown fox jumped over the lazy dog", 5usize).unwrap();
//! assert_eq!(x, ["The q", "uick ", "brown", " fox ", "jumpe", "d ove", "r the", " lazy", " dog"]);
//!
//! let lines = string_breaker(
//!     "Happy cat.\nThe moon is full tonight.\rI like full moons!",
//!     PartialConfig::new().split(SplitMode::Line),
//! )
//! .unwrap();
//! assert_eq!(lines, ["Happy cat.", "The moon is full tonight.", "I like full moons!"]);
//! ```
use std::borrow::Cow;
use tracing::debug;

pub mod boundary;
pub mod classifier;
pub mod config;
pub mod error;
pub mod line_ending;
pub mod whitespace;
pub mod width;
pub mod wire;

pub use boundary::segment_by_boundary;
pub use config::{Config, LineEnding, Options, PartialConfig, SplitMode, WidthFlags, DEFAULT_WIDTH};
pub use error::{BreakError, Result};
pub use width::{scalar_cost, segment_by_width, WidthChunks};

/// Break `text` into a list of strings.
///
/// `options` may be a width (`usize`), a [`PartialConfig`], a full
/// [`Config`], [`Options::Default`] or an `Option` of any of these.
///
/// # Errors
/// When splitting by width: [`BreakError::WidthOutOfRange`] for a width below
/// 1, then [`BreakError::FlagsOutOfRange`] for unknown flag bits. Word and line
/// modes ignore both fields.
pub fn string_breaker(text: &str, options: impl Into<Options>) -> Result<Vec<String>> {
    let cfg = Config::resolve(options);
    break_with(text, &cfg)
}

/// Break `text` with a resolved configuration.
pub fn break_with(text: &str, cfg: &Config) -> Result<Vec<String>> {
    debug!(
        split = %cfg.split,
        width = cfg.width,
        flags = ?cfg.width_flags,
        len = text.len(),
        "string_breaker"
    );

    let chunks = match cfg.split {
        SplitMode::Width => {
            let prepared = prepare_for_width(text, cfg);
            segment_by_width(&prepared, cfg)?
        }
        SplitMode::Word | SplitMode::Line => segment_by_boundary(text, cfg),
    };

    debug!(chunks = chunks.len(), "string_breaker done");
    Ok(chunks)
}

/// Line-ending and extra-space preprocessing; width mode only.
fn prepare_for_width<'a>(text: &'a str, cfg: &Config) -> Cow<'a, str> {
    let text = match cfg.line_ending {
        LineEnding::Keep => Cow::Borrowed(text),
        LineEnding::Strip => line_ending::strip_line_breaks(text),
        LineEnding::Encode => line_ending::encode_line_breaks(text),
    };
    if cfg.collapse_extra_spaces {
        let collapsed = whitespace::collapse_runs(&text);
        if let Cow::Owned(collapsed) = collapsed {
            return Cow::Owned(collapsed);
        }
    }
    text
}
