//! Token types for the date pattern lexer.

/// A token in a date pattern string.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Any non-letter character, copied through as-is.
    Literal(char),
    /// Text inside `[...]`, copied through as-is.
    Escaped(String),
    /// A run of one pattern letter, e.g. `YYYY` is `Run { letter: 'Y', count: 4, ordinal: false }`.
    /// `ordinal` is set when the run is followed by `o` (as in `Do`).
    Run {
        letter: char,
        count: usize,
        ordinal: bool,
    },
    /// A letter that is not part of the pattern alphabet.
    Unknown(char),
    /// End of input
    Eof,
}

/// A token with its position in the source.
#[derive(Debug, Clone)]
pub struct SpannedToken {
    pub token: Token,
    pub start: usize,
    pub end: usize,
}

/// Letters that start a pattern token.
pub(crate) const PATTERN_LETTERS: &[char] = &[
    'Y', 'Q', 'M', 'D', 'd', 'E', 'H', 'h', 'k', 'm', 's', 'S', 'A', 'a', 'Z', 'X', 'x',
];

/// Runs that may carry an `o` ordinal suffix: `Qo`, `Mo`, `Do`, `DDDo` and `do`.
pub(crate) const ORDINAL_RUNS: &[(char, usize)] =
    &[('Q', 1), ('M', 1), ('D', 1), ('D', 3), ('d', 1)];
