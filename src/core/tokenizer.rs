// src/core/tokenizer.rs
use std::iter::FusedIterator;

/// Iterator over the words of a line: maximal runs of ASCII letters.
///
/// Anything that is not an ASCII letter separates words, including digits,
/// apostrophes and non-ASCII characters. Calling [`words`] again on the same
/// line restarts the sequence; cloning forks it at the current position.
#[derive(Debug, Clone)]
pub struct Words<'a> {
    rest: &'a str,
}

#[inline]
#[must_use]
pub const fn words(line: &str) -> Words<'_> {
    Words { rest: line }
}

impl<'a> Iterator for Words<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.rest.as_bytes();
        let Some(start) = bytes.iter().position(u8::is_ascii_alphabetic) else {
            self.rest = "";
            return None;
        };
        let end = bytes
            .iter()
            .skip(start)
            .position(|byte| !byte.is_ascii_alphabetic())
            .map_or(bytes.len(), |len| start.saturating_add(len));

        // Both ends sit next to ASCII bytes, so they are char boundaries.
        let word = self.rest.get(start..end)?;
        self.rest = self.rest.get(end..).unwrap_or_default();
        Some(word)
    }
}

impl FusedIterator for Words<'_> {}
