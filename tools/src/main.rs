//! Break a text file (or stdin) into width chunks, words or lines.
//!
//! Usage:
//!   cargo run -p string-breaker-tools -- notes.txt --width 40
//!   cat notes.txt | cargo run -p string-breaker-tools -- --split word --json
//!   cargo run -p string-breaker-tools -- utf16.txt --utf16le --keep-bom --width 18
//!   cargo run -p string-breaker-tools -- notes.txt --options '{"width": 76, "lenOpt": 3}'

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::sync::Once;
use string_breaker::{break_with, Config, LineEnding, PartialConfig, SplitMode, WidthFlags};

#[derive(Parser, Debug)]
#[command(name = "strbreak")]
#[command(about = "Break text into fixed-width chunks, words or lines")]
struct Args {
    /// Input file (defaults to stdin)
    input: Option<PathBuf>,

    /// Chunk width in cells
    #[arg(short, long)]
    width: Option<usize>,

    /// Line endings before width splitting: keep, strip or encode
    #[arg(short, long)]
    line_ending: Option<LineEnding>,

    /// Collapse runs of spaces before splitting
    #[arg(long)]
    collapse_spaces: bool,

    /// Keep a leading byte-order mark in the first chunk
    #[arg(long)]
    keep_bom: bool,

    /// Fullwidth characters take two cells
    #[arg(long)]
    fullwidth: bool,

    /// Characters above the BMP take two cells
    #[arg(long)]
    surrogate_pair: bool,

    /// Only break at whitespace
    #[arg(long)]
    nearest_word: bool,

    /// Split mode: width, word or line
    #[arg(short, long)]
    split: Option<SplitMode>,

    /// TOML config file; flags given on the command line override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Option object as JSON, e.g. '{"width": 40, "lenOpt": 3}'
    #[arg(long, conflicts_with_all = [
        "width", "line_ending", "collapse_spaces", "keep_bom", "fullwidth",
        "surrogate_pair", "nearest_word", "split", "config",
    ])]
    options: Option<String>,

    /// Decode the input as UTF-16LE instead of UTF-8
    #[arg(long)]
    utf16le: bool,

    /// Separator written between chunks (\n, \r and \t escapes allowed)
    #[arg(long, default_value = "\\n")]
    separator: String,

    /// Write the chunks as a JSON array
    #[arg(long)]
    json: bool,
}

static TRACING_INIT: Once = Once::new();

/// Install a stderr subscriber when `RUST_LOG` is set.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(io::stderr).with_target(true))
                .with(filter)
                .init();
        }
    });
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let cfg = resolve_config(&args)?;
    let text = read_input(&args)?;
    let chunks = break_with(&text, &cfg)?;
    tracing::info!(chunks = chunks.len(), split = %cfg.split, "done");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.json {
        serde_json::to_writer(&mut out, &chunks)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", chunks.join(&unescape(&args.separator)))?;
    }
    Ok(())
}

fn resolve_config(args: &Args) -> Result<Config> {
    if let Some(raw) = &args.options {
        let value: serde_json::Value =
            serde_json::from_str(raw).context("--options is not valid JSON")?;
        let options = string_breaker::wire::options_from_json(&value)?;
        return Ok(Config::resolve(options));
    }

    let base = match &args.config {
        Some(path) => Config::load_toml(path)
            .map_err(|e| anyhow::anyhow!("failed to load config {}: {}", path.display(), e))?,
        None => Config::default(),
    };
    Ok(partial_from_args(args).resolve_over(base))
}

/// Only flags actually given end up in the partial config.
fn partial_from_args(args: &Args) -> PartialConfig {
    let mut flags = WidthFlags::empty();
    flags.set(WidthFlags::FULLWIDTH, args.fullwidth);
    flags.set(WidthFlags::SURROGATE_PAIR, args.surrogate_pair);
    flags.set(WidthFlags::NEAREST_WORD, args.nearest_word);

    PartialConfig {
        width: args.width.map(|w| i64::try_from(w).unwrap_or(i64::MAX)),
        line_ending: args.line_ending,
        collapse_extra_spaces: args.collapse_spaces.then_some(true),
        strip_bom: args.keep_bom.then_some(false),
        width_flags: (!flags.is_empty()).then_some(flags),
        split: args.split,
    }
}

fn read_input(args: &Args) -> Result<String> {
    let bytes = match &args.input {
        Some(path) => {
            std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?
        }
        None => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };

    if args.utf16le {
        Ok(decode_utf16le(&bytes))
    } else {
        String::from_utf8(bytes).context("input is not valid UTF-8 (try --utf16le)")
    }
}

/// Lossy UTF-16LE decode. A BOM survives as U+FEFF; a trailing odd byte is dropped.
fn decode_utf16le(bytes: &[u8]) -> String {
    let units = bytes
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]));
    char::decode_utf16(units)
        .map(|r| r.unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect()
}

fn unescape(raw: &str) -> String {
    raw.replace("\\n", "\n")
        .replace("\\r", "\r")
        .replace("\\t", "\t")
}
