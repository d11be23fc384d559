//! Parser for moment-style date patterns.

pub mod lexer;
pub mod tokens;

use crate::ast::{DatePart, DatePattern, PatternPart};
use crate::error::ParseError;
use lexer::Lexer;
use tokens::Token;

/// Parse a pattern string into a DatePattern.
pub fn parse(pattern: &str) -> Result<DatePattern, ParseError> {
    if pattern.is_empty() {
        return Err(ParseError::EmptyPattern);
    }

    let mut lexer = Lexer::new(pattern);
    let mut parts: Vec<PatternPart> = Vec::new();
    let mut has_field = false;

    loop {
        let spanned = lexer.next_token()?;
        match spanned.token {
            Token::Eof => break,
            Token::Literal(c) => push_literal(&mut parts, c.encode_utf8(&mut [0; 4])),
            Token::Escaped(text) => push_literal(&mut parts, &text),
            Token::Run {
                letter,
                count,
                ordinal,
            } => {
                let part = DatePart::from_run(letter, count, ordinal).ok_or(
                    ParseError::UnknownToken {
                        position: spanned.start,
                        found: letter,
                    },
                )?;
                has_field = true;
                parts.push(PatternPart::Field(part));
            }
            Token::Unknown(c) => {
                return Err(ParseError::UnknownToken {
                    position: spanned.start,
                    found: c,
                });
            }
        }
    }

    if !has_field {
        return Err(ParseError::NoDateParts);
    }

    Ok(DatePattern::from_parts(pattern, parts))
}

/// Appends literal text, merging it into a preceding literal.
fn push_literal(parts: &mut Vec<PatternPart>, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(PatternPart::Literal(prev)) = parts.last_mut() {
        prev.push_str(text);
    } else {
        parts.push(PatternPart::Literal(text.to_string()));
    }
}
