//! # JSON Lexer
//!
//! The dispatch loop: a single forward pass over the input that classifies
//! the byte under the cursor and either skips it, emits a punctuation token,
//! or hands a slice to one of the [leaf scanners](crate::tokenizer::scan).
use std::ops::Range;

use crate::tokenizer::scan::{
    is_number_char, scan_boolean, scan_null, scan_number, scan_string,
};
use crate::tokenizer::{LexError, Punct, Token};

/// A token along with the byte range of the input it was lexed from.
pub type Spanned = (Token, Range<usize>);

/// A lexer over JSON-like text. Owns the cursor for the duration of a single
/// [`tokenize`] call.
struct Lexer<'a> {
    /// The input text to tokenize
    input: &'a str,
    /// Current position (byte offset of the byte under examination)
    position: usize,
}

impl<'a> Lexer<'a> {
    const fn new(input: &'a str) -> Self {
        Self { input, position: 0 }
    }

    /// The byte under the cursor, or `None` at end of input.
    fn byte(&self) -> Option<u8> {
        self.input.as_bytes().get(self.position).copied()
    }

    /// Whether `literal` starts at the cursor.
    fn at_literal(&self, literal: &str) -> bool {
        self.input.as_bytes()[self.position..].starts_with(literal.as_bytes())
    }

    /// Returns the next token and its span, `None` at end of input.
    fn next_token(&mut self) -> Result<Option<Spanned>, LexError> {
        self.skip_whitespace();
        let start = self.position;

        let token = match self.byte() {
            None => return Ok(None),
            Some(b'"') => self.read_string()?,
            Some(b'-' | b'+' | b'0'..=b'9') => self.read_number()?,
            Some(byte) => {
                if let Some(punct) = Punct::from_byte(byte) {
                    self.position += 1;
                    Token::Punct(punct)
                } else {
                    self.read_literal()?
                }
            }
        };

        Ok(Some((token, start..self.position)))
    }

    /// Consume whitespace byte(s) starting from the current position.
    fn skip_whitespace(&mut self) {
        while matches!(self.byte(), Some(b' ' | b'\t' | b'\n' | b'\r')) {
            self.position += 1;
        }
    }

    /// Reads a quoted string. The slice ends at the first quote not preceded
    /// by a backslash.
    fn read_string(&mut self) -> Result<Token, LexError> {
        let start = self.position;
        let bytes = self.input.as_bytes();
        let mut end = start + 1;

        while end < bytes.len() && bytes[end] != b'"' {
            // skip the escaped byte so `\"` does not close the string
            end += if bytes[end] == b'\\' { 2 } else { 1 };
        }
        if end >= bytes.len() {
            return Err(LexError::UnterminatedString { start });
        }

        // include the closing quote
        self.position = end + 1;
        let content = scan_string(&self.input[start..self.position])?;
        Ok(Token::StringLit(content.to_string()))
    }

    /// Reads the maximal run of number characters at the cursor.
    fn read_number(&mut self) -> Result<Token, LexError> {
        let start = self.position;
        while self.byte().is_some_and(|b| is_number_char(char::from(b))) {
            self.position += 1;
        }

        let text = scan_number(&self.input[start..self.position])?;
        Ok(Token::NumberLit(text.to_string()))
    }

    /// Reads `true`, `false` or `null` when it starts exactly at the cursor.
    fn read_literal(&mut self) -> Result<Token, LexError> {
        let token = if self.at_literal("true") {
            Token::BoolLit(scan_boolean("true")?)
        } else if self.at_literal("false") {
            Token::BoolLit(scan_boolean("false")?)
        } else if self.at_literal("null") {
            scan_null("null")?;
            Token::NullLit
        } else {
            return Err(self.unexpected_character());
        };

        self.position += token.text().len();
        Ok(token)
    }

    fn unexpected_character(&self) -> LexError {
        // the cursor only ever rests on a char boundary outside of strings
        let character =
            self.input[self.position..].chars().next().unwrap_or('\0');
        LexError::UnexpectedCharacter {
            character,
            position: self.position,
        }
    }
}

/// Tokenize JSON-like text into a sequence of tokens, each paired with the
/// byte range of the input it was produced from.
///
/// Bytes not covered by any span are whitespace.
///
/// # Errors
///
/// Returns the first [`LexError`] encountered; no partial result is kept.
pub fn tokenize_spanned(input: &str) -> Result<Vec<Spanned>, LexError> {
    let mut lexer = Lexer::new(input);
    let mut tokens: Vec<Spanned> = vec![];

    while let Some(spanned) = lexer.next_token()? {
        tokens.push(spanned);
    }

    Ok(tokens)
}

/// Tokenize JSON-like text into a sequence of tokens.
///
/// ```rust
/// use jsonlex::tokenizer::{tokenize, Punct, Token};
///
/// let tokens = tokenize(r#"{"foo": 42}"#).unwrap();
/// assert_eq!(
///     tokens,
///     vec![
///         Token::Punct(Punct::LCurly),
///         Token::StringLit("foo".into()),
///         Token::Punct(Punct::Colon),
///         Token::NumberLit("42".into()),
///         Token::Punct(Punct::RCurly),
///     ]
/// );
/// ```
///
/// # Errors
///
/// Returns the first [`LexError`] encountered; no partial result is kept.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    Ok(tokenize_spanned(input)?
        .into_iter()
        .map(|(token, _)| token)
        .collect())
}
