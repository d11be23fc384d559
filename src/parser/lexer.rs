//! Lexer for tokenizing date pattern strings.
//!
//! Pattern letters are grouped into runs (`YYYY` is one token), `[...]`
//! brackets escape literal text, and every character that is not a letter
//! is a literal. Letters outside the pattern alphabet are reported as
//! `Token::Unknown` so the parser can reject them.

use crate::error::ParseError;
use crate::parser::tokens::{SpannedToken, Token, ORDINAL_RUNS, PATTERN_LETTERS};

/// A lexer for date pattern strings.
pub struct Lexer<'a> {
    /// The input string being tokenized.
    pub(crate) input: &'a str,
    /// The current position in the input.
    position: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input string.
    pub fn new(input: &'a str) -> Self {
        Self { input, position: 0 }
    }

    /// Returns the next token from the input.
    pub fn next_token(&mut self) -> Result<SpannedToken, ParseError> {
        let start = self.position;
        let Some(ch) = self.current_char() else {
            return Ok(SpannedToken {
                token: Token::Eof,
                start,
                end: start,
            });
        };

        let token = match ch {
            '[' => self.lex_escaped()?,

            c if PATTERN_LETTERS.contains(&c) => {
                let count = self.count_run(|x| x == c);
                let ordinal =
                    ORDINAL_RUNS.contains(&(c, count)) && self.current_char() == Some('o');
                if ordinal {
                    self.advance();
                }
                Token::Run {
                    letter: c,
                    count,
                    ordinal,
                }
            }

            c if c.is_alphabetic() => {
                self.advance();
                Token::Unknown(c)
            }

            // Everything else is a literal
            c => {
                self.advance();
                Token::Literal(c)
            }
        };

        Ok(SpannedToken {
            token,
            start,
            end: self.position,
        })
    }

    /// Returns the character at the current position, if any.
    fn current_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    /// Advances the position by one character.
    fn advance(&mut self) {
        if let Some(ch) = self.current_char() {
            self.position += ch.len_utf8();
        }
    }

    /// Counts and consumes consecutive characters matching the predicate.
    /// Returns the count (always >= 1 since current char matches).
    #[inline]
    fn count_run<F>(&mut self, predicate: F) -> usize
    where
        F: Fn(char) -> bool,
    {
        let mut count = 0;
        while let Some(ch) = self.current_char() {
            if predicate(ch) {
                count += 1;
                self.advance();
            } else {
                break;
            }
        }
        count
    }

    /// Lexes an escaped section ([...]).
    fn lex_escaped(&mut self) -> Result<Token, ParseError> {
        let start = self.position;
        self.advance(); // Skip the opening bracket

        let mut content = String::new();
        loop {
            match self.current_char() {
                Some(']') => {
                    self.advance();
                    return Ok(Token::Escaped(content));
                }
                Some(ch) => {
                    content.push(ch);
                    self.advance();
                }
                None => return Err(ParseError::UnterminatedEscape { position: start }),
            }
        }
    }

    /// Returns all remaining tokens as a vector.
    /// This consumes the lexer.
    pub fn tokenize(mut self) -> Result<Vec<SpannedToken>, ParseError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let is_eof = matches!(token.token, Token::Eof);
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        Ok(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        let mut lexer = Lexer::new("");
        assert!(matches!(lexer.next_token().unwrap().token, Token::Eof));
    }

    #[test]
    fn test_run_span() {
        let mut lexer = Lexer::new("YYYY");
        let tok = lexer.next_token().unwrap();
        assert_eq!(tok.start, 0);
        assert_eq!(tok.end, 4);
    }

    #[test]
    fn test_multibyte_literal() {
        let mut lexer = Lexer::new("€D");
        assert_eq!(lexer.next_token().unwrap().token, Token::Literal('€'));
        let tok = lexer.next_token().unwrap();
        assert_eq!(tok.start, '€'.len_utf8());
    }
}
