// string-breaker/core/src/config.rs
//
// Option resolution: partial configurations, the width shorthand and the
// TOML representation all normalise to one `Config` value. Resolution never
// fails and never range-checks: width and flag values are carried as given
// and checked when a width segmenter is built.

use crate::error::{BreakError, Result};
use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Width used when none is given.
pub const DEFAULT_WIDTH: i64 = 80;

bitflags! {
    /// How each scalar is charged against the target width.
    ///
    /// The bit values are the public bitmask: `fullwidth = 1`,
    /// `surrogatePair = 2`, `nearestWord = 4`. Values decoded from the wire
    /// keep unknown bits until [`WidthFlags::validate`] rejects them.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct WidthFlags: i64 {
        /// Fullwidth scalars cost two cells.
        const FULLWIDTH = 1 << 0;
        /// Scalars above the BMP cost one extra cell.
        const SURROGATE_PAIR = 1 << 1;
        /// Break only at whitespace and never start a chunk with whitespace.
        const NEAREST_WORD = 1 << 2;
    }
}

impl WidthFlags {
    /// Decode the integer bitmask as-is, unknown bits included.
    pub fn from_wire(value: i64) -> Self {
        WidthFlags::from_bits_retain(value)
    }

    /// Reject a bitmask outside `0..=7`.
    ///
    /// ```
    /// use string_breaker::WidthFlags;
    ///
    /// let flags = WidthFlags::from_wire(3).validate().unwrap();
    /// assert_eq!(flags, WidthFlags::FULLWIDTH | WidthFlags::SURROGATE_PAIR);
    /// assert!(WidthFlags::from_wire(100).validate().is_err());
    /// ```
    pub fn validate(self) -> Result<Self> {
        WidthFlags::from_bits(self.bits()).ok_or(BreakError::FlagsOutOfRange {
            value: self.bits(),
            max: WidthFlags::all().bits(),
        })
    }
}

/// What to do with line breaks before width segmentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    /// Leave line breaks in place.
    Keep,
    /// Remove all line breaks.
    #[default]
    Strip,
    /// Replace line breaks with the literal `\n`.
    Encode,
}

impl LineEnding {
    /// Map the integer used by the option object (`none`, `noLnBr`, `encode`).
    pub fn from_wire(value: i64) -> Option<Self> {
        match value {
            0 => Some(LineEnding::Keep),
            1 => Some(LineEnding::Strip),
            2 => Some(LineEnding::Encode),
            _ => None,
        }
    }
}

impl fmt::Display for LineEnding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LineEnding::Keep => "keep",
            LineEnding::Strip => "strip",
            LineEnding::Encode => "encode",
        };
        f.write_str(name)
    }
}

impl FromStr for LineEnding {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "keep" | "none" => Ok(LineEnding::Keep),
            "strip" | "nolnbr" => Ok(LineEnding::Strip),
            "encode" => Ok(LineEnding::Encode),
            other => Err(format!(
                "unknown line ending mode '{}', expected keep, strip or encode",
                other
            )),
        }
    }
}

/// Which segmenter produces the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitMode {
    /// Fixed display width chunks.
    #[default]
    Width,
    /// One element per whitespace-separated word.
    Word,
    /// One element per logical line.
    Line,
}

impl SplitMode {
    /// Map the integer used by the option object (`width`, `word`, `line`).
    pub fn from_wire(value: i64) -> Option<Self> {
        match value {
            0 => Some(SplitMode::Width),
            1 => Some(SplitMode::Word),
            2 => Some(SplitMode::Line),
            _ => None,
        }
    }
}

impl fmt::Display for SplitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SplitMode::Width => "width",
            SplitMode::Word => "word",
            SplitMode::Line => "line",
        };
        f.write_str(name)
    }
}

impl FromStr for SplitMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "width" => Ok(SplitMode::Width),
            "word" => Ok(SplitMode::Word),
            "line" | "eol" => Ok(SplitMode::Line),
            other => Err(format!(
                "unknown split mode '{}', expected width, word or line",
                other
            )),
        }
    }
}

/// Fully resolved options.
///
/// Every field has a default, so a TOML file only needs the fields it
/// changes:
///
/// ```
/// use string_breaker::{Config, SplitMode};
///
/// let cfg = Config::from_toml_str("width = 40\nsplit = \"line\"\n").unwrap();
/// assert_eq!(cfg.width, 40);
/// assert_eq!(cfg.split, SplitMode::Line);
/// assert!(cfg.strip_bom);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Target chunk width in cells. Must be at least 1 when splitting by width;
    /// other modes ignore it.
    pub width: i64,
    pub line_ending: LineEnding,
    /// Collapse runs of plain spaces before splitting.
    pub collapse_extra_spaces: bool,
    /// Drop a leading byte-order mark. When false the BOM is kept in the first
    /// chunk and not counted toward its width.
    pub strip_bom: bool,
    /// Only checked, and only used, when splitting by width.
    pub width_flags: WidthFlags,
    pub split: SplitMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            line_ending: LineEnding::Strip,
            collapse_extra_spaces: false,
            strip_bom: true,
            width_flags: WidthFlags::empty(),
            split: SplitMode::Width,
        }
    }
}

impl Config {
    /// Normalise any accepted option shape into a `Config`.
    pub fn resolve(options: impl Into<Options>) -> Config {
        match options.into() {
            Options::Default => Config::default(),
            Options::Width(width) => Config {
                width,
                ..Config::default()
            },
            Options::Partial(partial) => partial.resolve(),
            Options::Config(cfg) => cfg,
        }
    }

    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(
        path: P,
    ) -> std::result::Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(
        &self,
        path: P,
    ) -> std::result::Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// A configuration where every field may be left out.
///
/// Absent fields take the value of whatever base they are resolved over
/// (the defaults for [`PartialConfig::resolve`]).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialConfig {
    pub width: Option<i64>,
    pub line_ending: Option<LineEnding>,
    pub collapse_extra_spaces: Option<bool>,
    pub strip_bom: Option<bool>,
    pub width_flags: Option<WidthFlags>,
    pub split: Option<SplitMode>,
}

impl PartialConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(mut self, width: i64) -> Self {
        self.width = Some(width);
        self
    }

    pub fn line_ending(mut self, mode: LineEnding) -> Self {
        self.line_ending = Some(mode);
        self
    }

    pub fn collapse_extra_spaces(mut self, collapse: bool) -> Self {
        self.collapse_extra_spaces = Some(collapse);
        self
    }

    pub fn strip_bom(mut self, strip: bool) -> Self {
        self.strip_bom = Some(strip);
        self
    }

    pub fn width_flags(mut self, flags: WidthFlags) -> Self {
        self.width_flags = Some(flags);
        self
    }

    pub fn split(mut self, mode: SplitMode) -> Self {
        self.split = Some(mode);
        self
    }

    /// Merge over the documented defaults.
    pub fn resolve(self) -> Config {
        self.resolve_over(Config::default())
    }

    /// Merge over an arbitrary base; present fields win.
    pub fn resolve_over(self, base: Config) -> Config {
        Config {
            width: self.width.unwrap_or(base.width),
            line_ending: self.line_ending.unwrap_or(base.line_ending),
            collapse_extra_spaces: self
                .collapse_extra_spaces
                .unwrap_or(base.collapse_extra_spaces),
            strip_bom: self.strip_bom.unwrap_or(base.strip_bom),
            width_flags: self.width_flags.unwrap_or(base.width_flags),
            split: self.split.unwrap_or(base.split),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == PartialConfig::default()
    }
}

/// The option shapes accepted by [`crate::string_breaker`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Options {
    /// All defaults.
    #[default]
    Default,
    /// Width shorthand; everything else defaults.
    Width(i64),
    Partial(PartialConfig),
    Config(Config),
}

impl From<usize> for Options {
    fn from(width: usize) -> Self {
        Options::Width(i64::try_from(width).unwrap_or(i64::MAX))
    }
}

impl From<i64> for Options {
    fn from(width: i64) -> Self {
        Options::Width(width)
    }
}

impl From<PartialConfig> for Options {
    fn from(partial: PartialConfig) -> Self {
        Options::Partial(partial)
    }
}

impl From<Config> for Options {
    fn from(cfg: Config) -> Self {
        Options::Config(cfg)
    }
}

impl<T: Into<Options>> From<Option<T>> for Options {
    fn from(options: Option<T>) -> Self {
        options.map_or(Options::Default, Into::into)
    }
}
