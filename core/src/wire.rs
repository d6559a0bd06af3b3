// string-breaker/core/src/wire.rs
//
// The loosely-typed option object: field names `width`, `lnEnd`, `noExSp`,
// `noBOM`, `lenOpt`, `splitOpt`, enums as integers and the flags as a
// bitmask. Everything here converts into the typed `PartialConfig` as early
// as possible. Width and flag values pass through unchecked; the width
// segmenter range-checks them, so word and line modes accept any value.

use crate::config::{LineEnding, Options, PartialConfig, SplitMode, WidthFlags};
use crate::error::{BreakError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

/// Option object as it appears in JSON.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WireOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// 0 none, 1 noLnBr, 2 encode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ln_end: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_ex_sp: Option<bool>,
    #[serde(rename = "noBOM", skip_serializing_if = "Option::is_none")]
    pub no_bom: Option<bool>,
    /// Bitmask: fullwidth 1, surrogatePair 2, nearestWord 4
    #[serde(skip_serializing_if = "Option::is_none")]
    pub len_opt: Option<i64>,
    /// 0 width, 1 word, 2 line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split_opt: Option<i64>,
}

impl From<WireOptions> for PartialConfig {
    fn from(wire: WireOptions) -> Self {
        let width = wire.width.map(wire_width);
        let width_flags = wire.len_opt.map(WidthFlags::from_wire);

        // Unknown enum values fall through to the plain behaviour.
        let mut line_ending = wire.ln_end.map(|value| {
            LineEnding::from_wire(value).unwrap_or_else(|| {
                warn!(value, "unknown lnEnd value, line breaks left as-is");
                LineEnding::Keep
            })
        });
        let split = match wire.split_opt {
            Some(value) => match SplitMode::from_wire(value) {
                Some(mode) => Some(mode),
                None => {
                    // width chunks without any line-ending handling
                    warn!(value, "unknown splitOpt value, splitting by width");
                    line_ending = Some(LineEnding::Keep);
                    Some(SplitMode::Width)
                }
            },
            None => None,
        };

        PartialConfig {
            width,
            line_ending,
            collapse_extra_spaces: wire.no_ex_sp,
            strip_bom: wire.no_bom,
            width_flags,
            split,
        }
    }
}

impl From<&PartialConfig> for WireOptions {
    fn from(partial: &PartialConfig) -> Self {
        WireOptions {
            width: partial.width.map(|w| w as f64),
            ln_end: partial.line_ending.map(|mode| match mode {
                LineEnding::Keep => 0,
                LineEnding::Strip => 1,
                LineEnding::Encode => 2,
            }),
            no_ex_sp: partial.collapse_extra_spaces,
            no_bom: partial.strip_bom,
            len_opt: partial.width_flags.map(|flags| flags.bits()),
            split_opt: partial.split.map(|mode| match mode {
                SplitMode::Width => 0,
                SplitMode::Word => 1,
                SplitMode::Line => 2,
            }),
        }
    }
}

/// Round a numeric width. NaN becomes 0 and infinities saturate.
fn wire_width(raw: f64) -> i64 {
    raw.round() as i64
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Interpret a JSON options value.
///
/// A number is the width shorthand, an object is a [`WireOptions`]; any
/// other value (null included) means defaults.
pub fn options_from_json(value: &Value) -> Result<Options> {
    match value {
        Value::Number(n) => {
            let raw = n.as_f64().unwrap_or(f64::NAN);
            Ok(Options::Width(wire_width(raw)))
        }
        Value::Object(_) => {
            let wire = WireOptions::deserialize(value).map_err(|e| BreakError::InvalidOptions {
                reason: e.to_string(),
            })?;
            Ok(Options::Partial(PartialConfig::from(wire)))
        }
        _ => Ok(Options::Default),
    }
}

/// Break a JSON text value with JSON options.
///
/// ```
/// use serde_json::json;
/// use string_breaker::wire::break_json;
///
/// let out = break_json(&json!("Hello World"), &json!({ "width": 6 })).unwrap();
/// assert_eq!(out, ["Hello ", "World"]);
/// assert!(break_json(&json!(42), &json!(null)).is_err());
/// ```
pub fn break_json(text: &Value, options: &Value) -> Result<Vec<String>> {
    let text = text.as_str().ok_or(BreakError::InvalidArgumentType {
        found: json_kind(text),
    })?;
    let options = options_from_json(options)?;
    crate::string_breaker(text, options)
}
