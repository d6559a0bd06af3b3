// Behaviour vectors for the public entry point.
//
// Width chunks, the documentation examples, line and word splitting with
// BOMs and mixed line endings, nearest-word breaking and the error cases.

use string_breaker::{
    string_breaker, BreakError, Config, LineEnding, PartialConfig, SplitMode, WidthFlags,
};

fn alphabet(len: usize) -> String {
    (0..len).map(|i| (b'a' + (i % 26) as u8) as char).collect()
}

fn utf16_len(s: &str) -> usize {
    s.encode_utf16().count()
}

const MIXED_EOL: &str = "Happy cat.\nThe quick brown fox jumped over the lazy dog.\r\nThe moon is full tonight.\rI like full moons!";

const WORDS: [&str; 20] = [
    "Happy", "cat.", "The", "quick", "brown", "fox", "jumped", "over", "the", "lazy", "dog.",
    "The", "moon", "is", "full", "tonight.", "I", "like", "full", "moons!",
];

#[test]
fn hundred_chars_make_ten_chunks_of_ten() {
    let result = string_breaker(&alphabet(100), PartialConfig::new().width(10)).unwrap();
    assert_eq!(result.len(), 10);
    for chunk in &result {
        assert_eq!(chunk.chars().count(), 10);
    }
}

#[test]
fn long_input_chunks_of_eleven() {
    let result = string_breaker(&alphabet(1320), 11usize).unwrap();
    assert_eq!(result.len(), 120);
    assert!(result.iter().all(|chunk| chunk.len() == 11));
}

#[test]
fn surrogate_pairs_count_once_by_default() {
    let src = "f𝌆𝌆bar";
    let result = string_breaker(src, 2usize).unwrap();
    assert_eq!(result.len(), 3);
    assert_eq!(result.concat(), src);
    // elements 0 and 1 hold one pair (two code units) plus one plain char
    assert_eq!(utf16_len(&result[0]), 3);
    assert_eq!(utf16_len(&result[1]), 3);
    assert_eq!(utf16_len(&result[2]), 2);
}

#[test]
fn documented_width_examples() {
    let x = string_breaker("Hello World\nNice 😇\nhmm... ", 5usize).unwrap();
    assert_eq!(x, ["Hello", " Worl", "dNice", " 😇hmm", "... "]);

    let x = string_breaker("\u{1F607}Hello World\nNice 😇\nhmm...", 6usize).unwrap();
    assert_eq!(x, ["😇Hello", " World", "Nice 😇", "hmm..."]);

    let x = string_breaker(
        "\u{1F607}Hello World\nNice 😇\r\nhmm...",
        PartialConfig::new().width(6).line_ending(LineEnding::Encode),
    )
    .unwrap();
    assert_eq!(x, ["😇Hello", " World", "\\nNice", " 😇\\nhm", "m..."]);
}

#[test]
fn default_width_is_eighty() {
    let src = alphabet(200);
    let result = string_breaker(&src, None::<usize>).unwrap();
    assert_eq!(result.iter().map(String::len).collect::<Vec<_>>(), [80, 80, 40]);
}

#[test]
fn line_breaks_kept_count_as_cells() {
    let result = string_breaker(
        "ab\r\ncd",
        PartialConfig::new().width(3).line_ending(LineEnding::Keep),
    )
    .unwrap();
    assert_eq!(result, ["ab\r", "\ncd"]);
}

#[test]
fn extra_spaces_collapsed_before_breaking() {
    let result = string_breaker(
        "The  quick    brown   fox",
        PartialConfig::new().width(6).collapse_extra_spaces(true),
    )
    .unwrap();
    assert_eq!(result, ["The qu", "ick br", "own fo", "x"]);
}

#[test]
fn kept_bom_is_not_counted() {
    let src = "\u{FEFF}The quick brown fox jumped";
    let result = string_breaker(src, PartialConfig::new().width(18).strip_bom(false)).unwrap();
    assert_eq!(result, ["\u{FEFF}The quick brown fo", "x jumped"]);

    let result = string_breaker(src, 18usize).unwrap();
    assert_eq!(result, ["The quick brown fo", "x jumped"]);
}

#[test]
fn fullwidth_and_surrogate_flags() {
    let flags = WidthFlags::FULLWIDTH | WidthFlags::SURROGATE_PAIR;
    let cfg = PartialConfig::new().width(4).width_flags(flags);

    // 中 and 文 take two cells each
    assert_eq!(string_breaker("中文ab", cfg.clone()).unwrap(), ["中文", "ab"]);
    // 𝐀 is narrow but above the BMP: two cells
    assert_eq!(string_breaker("𝐀𝐀𝐀", cfg.clone()).unwrap(), ["𝐀𝐀", "𝐀"]);
    // 😀 is wide and above the BMP: three cells
    assert_eq!(string_breaker("😀a😀", cfg).unwrap(), ["😀a", "😀"]);
}

#[test]
fn split_by_line_removes_bom_and_mixed_breaks() {
    let src = format!("\u{FEFF}{}", MIXED_EOL);
    let result = string_breaker(&src, PartialConfig::new().width(10).split(SplitMode::Line)).unwrap();
    assert_eq!(result.len(), 4);
    assert_eq!(result[0], "Happy cat.");
    assert_eq!(result[1], "The quick brown fox jumped over the lazy dog.");
    assert_eq!(result[2], "The moon is full tonight.");
    assert_eq!(result[3], "I like full moons!");
}

#[test]
fn split_empty_and_bom_only_by_line() {
    let by_line = PartialConfig::new().split(SplitMode::Line);
    assert!(string_breaker("", by_line.clone()).unwrap().is_empty());
    assert!(string_breaker("\u{FEFF}", by_line).unwrap().is_empty());
}

#[test]
fn split_emoji_by_line() {
    let result = string_breaker(
        "🧀😊😀😃😄😁\n😃😄😁🧀😊😀",
        PartialConfig::new().split(SplitMode::Line),
    )
    .unwrap();
    assert_eq!(result, ["🧀😊😀😃😄😁", "😃😄😁🧀😊😀"]);
}

#[test]
fn split_by_word_removes_bom() {
    let src = format!("\u{FEFF}{}", MIXED_EOL);
    let result = string_breaker(&src, PartialConfig::new().width(10).split(SplitMode::Word)).unwrap();
    assert_eq!(result, WORDS);
}

#[test]
fn split_by_word_with_tabs_and_extra_spaces() {
    let src = "\u{FEFF}\t\t\t  Happy cat.\nThe\tquick\t\t   brown    fox  \t   jumped over the lazy dog.\r\nThe moon is full tonight.\rI like full moons!";
    let result = string_breaker(src, PartialConfig::new().split(SplitMode::Word)).unwrap();
    assert_eq!(result.len(), 20);
    assert_eq!(result, WORDS);
}

#[test]
fn split_emoji_by_word() {
    let result = string_breaker(
        "🧀\n😊 😀😃 😄 😁 😃😄\n 😁🧀😊😀  ",
        PartialConfig::new().split(SplitMode::Word),
    )
    .unwrap();
    assert_eq!(result, ["🧀", "😊", "😀😃", "😄", "😁", "😃😄", "😁🧀😊😀"]);
}

#[test]
fn split_whitespace_only_by_word() {
    let result = string_breaker(
        "\n  \t \t\t\r\n\r  ",
        PartialConfig::new().split(SplitMode::Word),
    )
    .unwrap();
    assert!(result.is_empty());
}

#[test]
fn nearest_word_paragraph() {
    let src = "On this\u{1680}day.\u{1680}For this morning, when Gregor\u{3000}Samsa woke from troubled dreams; he found himself transformed.";
    let result = string_breaker(
        src,
        PartialConfig::new().width(10).width_flags(WidthFlags::NEAREST_WORD),
    )
    .unwrap();
    assert_eq!(
        result,
        [
            "On this\u{1680}day.\u{1680}",
            "For this morning,",
            "when Gregor",
            "Samsa woke",
            "from troubled",
            "dreams; he",
            "found himself",
            "transformed.",
        ]
    );
}

#[test]
fn nearest_word_with_fullwidth() {
    let flags = WidthFlags::NEAREST_WORD | WidthFlags::FULLWIDTH;
    let result = string_breaker("中文 ab cd", PartialConfig::new().width(4).width_flags(flags)).unwrap();
    // 中文 fills four cells, the space after it is the boundary
    assert_eq!(result, ["中文", "ab cd"]);
}

#[test]
fn zero_width_is_out_of_range() {
    let err = string_breaker("abc", 0usize).unwrap_err();
    assert_eq!(err, BreakError::WidthOutOfRange(0));
    assert!(err.is_out_of_range());
}

#[test]
fn full_config_passes_through() {
    let cfg = Config {
        width: 2,
        line_ending: LineEnding::Keep,
        ..Config::default()
    };
    assert_eq!(string_breaker("a\nb", cfg).unwrap(), ["a\n", "b"]);
}
