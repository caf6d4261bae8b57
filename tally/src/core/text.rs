// src/core/text.rs
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use crate::models::TextCounts;

/// One character from the Unicode letter categories (Lu, Ll, Lt, Lm, Lo).
static LETTER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{L}").expect("static regex should not panic"));

/// Counts alphabetic characters and space characters in `text`.
///
/// A character is alphabetic when its Unicode general category is a letter,
/// which covers accented Latin, Greek, Cyrillic, Devanagari, CJK and so on.
/// Combining marks, vowel signs and letter-like numerals such as `Ⅻ` are not
/// letters. Only U+0020 counts as a space; tabs, newlines and no-break spaces
/// do not.
#[inline]
#[must_use]
pub fn count_alphabets_and_spaces(text: &str) -> TextCounts {
    let alphabets = LETTER_REGEX.find_iter(text).count();
    let spaces = text.matches(' ').count();
    debug!(chars = text.chars().count(), alphabets, spaces, "counted text");
    TextCounts::new(alphabets, spaces)
}
