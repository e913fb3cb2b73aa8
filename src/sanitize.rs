//! Text sanitization for generated content.
//!
//! The cleanup is an ordered chain of pure passes. The order is load-bearing:
//! bracket removal expects markup and ordinals to be gone already, whitespace
//! collapse expects control characters to be gone, and the terminal-mark line
//! breaks must run after the collapse or they would be swallowed by it.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref MARKUP: Regex = Regex::new(r"\*\*|\*|#|- |\+ |= |~").unwrap();
    static ref ORDINALS: Regex = Regex::new(r"\d+\.|\d+\)|①|②|③|④|⑤|⑴|⑵|⑶").unwrap();
    static ref BRACKETED: Regex =
        Regex::new(r"\[.*?\]|\(.*?\)|\{.*?\}|<.*?>|【.*?】|《.*?》").unwrap();
    static ref CONTROL_CHARS: Regex = Regex::new(r"[\x00-\x1F\x7F\u{80}-\u{9F}]").unwrap();
    static ref WHITESPACE_RUNS: Regex = Regex::new(r"\s+").unwrap();
    static ref TERMINAL_MARKS: Regex = Regex::new(r"([。！？；：])").unwrap();
    static ref DISALLOWED: Regex =
        Regex::new(r"[^\u{4e00}-\u{9fa5}a-zA-Z0-9\s，。！？；：]").unwrap();
}

/// Strip markdown-style emphasis, heading, list and bullet markers plus a
/// fixed set of punctuation-as-symbol characters.
pub fn strip_markup(text: &str) -> String {
    MARKUP.replace_all(text, "").into_owned()
}

/// Strip ordinal markers: `1.`, `1)`, circled and parenthesized numerals.
pub fn strip_ordinals(text: &str) -> String {
    ORDINALS.replace_all(text, "").into_owned()
}

/// Strip bracketed spans, non-greedy, for square/paren/curly/angle pairs and
/// the CJK corner and title brackets.
pub fn strip_bracketed(text: &str) -> String {
    BRACKETED.replace_all(text, "").into_owned()
}

/// Strip C0 controls, DEL and the C1 range.
pub fn strip_control_chars(text: &str) -> String {
    CONTROL_CHARS.replace_all(text, "").into_owned()
}

/// Collapse whitespace runs to a single space and trim the ends.
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUNS.replace_all(text, " ").trim().to_string()
}

/// Insert a line break after every CJK terminal mark (。！？；：).
pub fn break_after_terminals(text: &str) -> String {
    TERMINAL_MARKS.replace_all(text, "$1\n").into_owned()
}

/// Drop everything outside CJK ideographs, ASCII letters/digits, whitespace
/// and the allowed CJK punctuation. Applied to the raw completion output
/// before [`clean`]; idempotent on its own output.
pub fn restrict_charset(text: &str) -> String {
    DISALLOWED.replace_all(text, "").into_owned()
}

const PASSES: &[fn(&str) -> String] = &[
    strip_markup,
    strip_ordinals,
    strip_bracketed,
    strip_control_chars,
    collapse_whitespace,
    break_after_terminals,
];

/// Run the full chain and split the result into non-empty paragraphs.
pub fn clean(raw: &str) -> Vec<String> {
    let mut text = raw.to_string();
    for pass in PASSES {
        text = pass(&text);
    }
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
