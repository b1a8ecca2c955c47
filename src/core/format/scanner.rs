//! A forward-only character cursor over a template or a content string.

use std::str::Chars;

use super::FormatError;
use crate::core::types::Field;

/// Template escape symbol: `\X` means the literal `X`.
pub(crate) const ESCAPE: char = '\\';

/// Template specifier symbol: `%a`, `%t`, ...
pub(crate) const SPECIFIER: char = '%';

/// Hands out one character per pull; `None` is the end-of-input sentinel.
///
/// Once exhausted it keeps returning `None`, and a consumed character is
/// never handed out again.
#[derive(Debug, Clone)]
pub(crate) struct Scanner<'a> {
    chars: Chars<'a>,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars(),
        }
    }

    /// Pull the field code following a `%`.
    ///
    /// Unknown letters and a `%` at the very end are both `InvalidFormat`.
    pub(crate) fn next_field(&mut self) -> Result<Field, FormatError> {
        self.next()
            .and_then(Field::from_code)
            .ok_or(FormatError::InvalidFormat)
    }

    /// Pull the literal following a `\`. Nothing left to escape is `InvalidFormat`.
    pub(crate) fn next_escaped(&mut self) -> Result<char, FormatError> {
        self.next().ok_or(FormatError::InvalidFormat)
    }
}

impl Iterator for Scanner<'_> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        self.chars.next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yields_chars_then_stays_exhausted() {
        let mut scanner = Scanner::new("ab");
        assert_eq!(scanner.next(), Some('a'));
        assert_eq!(scanner.next(), Some('b'));
        assert_eq!(scanner.next(), None);
        assert_eq!(scanner.next(), None);
    }

    #[test]
    fn works_on_characters_not_bytes() {
        let scanner = Scanner::new("é–ß");
        assert_eq!(scanner.collect::<Vec<_>>(), vec!['é', '–', 'ß']);
    }

    #[test]
    fn next_field_reads_known_codes() {
        let mut scanner = Scanner::new("ly");
        assert_eq!(scanner.next_field(), Ok(Field::Album));
        assert_eq!(scanner.next_field(), Ok(Field::Year));
        assert_eq!(scanner.next_field(), Err(FormatError::InvalidFormat));
    }

    #[test]
    fn next_field_rejects_unknown_code() {
        let mut scanner = Scanner::new("x");
        assert_eq!(scanner.next_field(), Err(FormatError::InvalidFormat));
    }

    #[test]
    fn next_escaped_needs_a_character() {
        let mut scanner = Scanner::new("%");
        assert_eq!(scanner.next_escaped(), Ok('%'));
        assert_eq!(scanner.next_escaped(), Err(FormatError::InvalidFormat));
    }
}
