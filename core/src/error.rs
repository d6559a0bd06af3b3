//! Error type shared by every entry point of the crate.

use thiserror::Error;

/// Errors raised while resolving options or segmenting text.
///
/// All errors are raised before any output is produced: a call either
/// returns the complete chunk list or one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BreakError {
    /// The text argument handed to a loosely-typed entry point was not a string.
    #[error("stringBreaker: text parameter must be of type string, found {found}")]
    InvalidArgumentType { found: &'static str },

    /// The width is below one when splitting by width.
    #[error("stringBreaker: width must be greater than zero, got {0}")]
    WidthOutOfRange(i64),

    /// An option object whose fields have the wrong shape.
    #[error("stringBreaker: invalid options: {reason}")]
    InvalidOptions { reason: String },

    /// A width-flags bitmask outside the known flag set, when splitting by width.
    #[error("stringBreaker: width flags out of range. Expected value to be from 0 to {max}, got {value}")]
    FlagsOutOfRange { value: i64, max: i64 },
}

impl BreakError {
    /// True for the range violations (width or flags).
    pub fn is_out_of_range(&self) -> bool {
        matches!(
            self,
            BreakError::WidthOutOfRange(_) | BreakError::FlagsOutOfRange { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, BreakError>;
