//! # Lexing Errors
//!
//! Every error is terminal for the call that produced it: lexing stops at the
//! first malformed construct and no partial token stream is returned.
use std::error::Error;
use std::fmt;

/// Represents errors that can occur while lexing JSON-like text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// A scanner was handed an empty slice.
    EmptyInput,
    /// The string slice does not start with a quote.
    InvalidOpeningQuote,
    /// The string slice does not end with a quote.
    InvalidClosingQuote,
    /// A quote appears between the opening and closing quotes.
    UnexpectedQuoteInBody,
    /// No closing quote before end of input. `start` is the byte offset of
    /// the opening quote.
    UnterminatedString {
        /// Byte offset of the opening quote
        start: usize,
    },
    /// A character outside `[0-9+-.e]` reached the number scanner.
    InvalidDigit(char),
    /// Text handed to the boolean scanner is not exactly `true` or `false`.
    InvalidBoolean(String),
    /// Text handed to the null scanner is not exactly `null`.
    InvalidNull(String),
    /// The dispatch loop found a character that starts no token.
    UnexpectedCharacter {
        /// The offending character
        character: char,
        /// Byte offset of the character in the input
        position: usize,
    },
}

impl Error for LexError {}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "empty string found"),
            Self::InvalidOpeningQuote => {
                write!(f, "invalid opening quotes in string")
            }
            Self::InvalidClosingQuote => {
                write!(f, "invalid ending quotes in string")
            }
            Self::UnexpectedQuoteInBody => {
                write!(f, "found quotes in between string")
            }
            Self::UnterminatedString { start } => {
                write!(f, "unterminated string starting at position {start}")
            }
            Self::InvalidDigit(c) => write!(f, "invalid digit found: {c:?}"),
            Self::InvalidBoolean(text) => {
                write!(f, "invalid boolean found: {text:?}")
            }
            Self::InvalidNull(text) => write!(f, "invalid null value: {text:?}"),
            Self::UnexpectedCharacter {
                character,
                position,
            } => {
                write!(f, "invalid character at position {position}: {character}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn lex_error_is_send_sync() {
        assert_send_sync::<LexError>();
    }

    #[test]
    fn display_unexpected_character() {
        let err = LexError::UnexpectedCharacter {
            character: 'a',
            position: 0,
        };
        assert_eq!(err.to_string(), "invalid character at position 0: a");
    }

    #[test]
    fn display_unterminated_string() {
        let err = LexError::UnterminatedString { start: 8 };
        assert_eq!(
            err.to_string(),
            "unterminated string starting at position 8"
        );
    }
}
