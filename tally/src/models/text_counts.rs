// src/models/text_counts.rs
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextCounts {
    pub alphabets: usize,
    pub spaces: usize,
}

impl TextCounts {
    #[inline]
    #[must_use]
    pub const fn new(alphabets: usize, spaces: usize) -> Self {
        Self { alphabets, spaces }
    }
}

/// Renders the two report lines without a trailing newline.
impl fmt::Display for TextCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Alphabets: {}\nSpaces: {}", self.alphabets, self.spaces)
    }
}
