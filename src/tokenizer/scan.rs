//! # Leaf Scanners
//!
//! Pure validators for each JSON primitive. The dispatch loop in
//! [`crate::tokenizer::lexer`] selects the slice, these functions check it
//! and extract the token text. They re-validate what the dispatch loop has
//! already checked so each literal kind can be exercised on its own.
use crate::tokenizer::LexError;

/// Extracts the content between the quotes of a string slice.
///
/// Escape sequences are not interpreted: the content is returned verbatim,
/// and an escaped quote inside the body is rejected like any other quote.
///
/// ```rust
/// use jsonlex::tokenizer::{scan::scan_string, LexError};
///
/// assert_eq!(scan_string(r#""abc""#), Ok("abc"));
/// assert_eq!(scan_string(r#""ab"c""#), Err(LexError::UnexpectedQuoteInBody));
/// ```
///
/// # Errors
///
/// - [`LexError::EmptyInput`] if `s` is empty
/// - [`LexError::InvalidOpeningQuote`] if `s` does not start with `"`
/// - [`LexError::InvalidClosingQuote`] if `s` does not end with `"`
/// - [`LexError::UnexpectedQuoteInBody`] if a `"` appears in between
pub fn scan_string(s: &str) -> Result<&str, LexError> {
    let bytes = s.as_bytes();
    let Some(&first) = bytes.first() else {
        return Err(LexError::EmptyInput);
    };

    if first != b'"' {
        return Err(LexError::InvalidOpeningQuote);
    }
    if bytes[bytes.len() - 1] != b'"' {
        return Err(LexError::InvalidClosingQuote);
    }
    // a lone quote is both opening and closing, with nothing in between
    if bytes.len() == 1 {
        return Ok("");
    }

    let body = &s[1..s.len() - 1];
    if body.contains('"') {
        return Err(LexError::UnexpectedQuoteInBody);
    }

    Ok(body)
}

/// Validates the text of a numeric literal and returns it unchanged.
///
/// Only the character class is checked: signs, dots and exponents may appear
/// anywhere and any number of times.
///
/// # Errors
///
/// - [`LexError::EmptyInput`] if `s` is empty
/// - [`LexError::InvalidDigit`] on the first character outside `[0-9+-.e]`
pub fn scan_number(s: &str) -> Result<&str, LexError> {
    if s.is_empty() {
        return Err(LexError::EmptyInput);
    }

    match s.chars().find(|&c| !is_number_char(c)) {
        Some(c) => Err(LexError::InvalidDigit(c)),
        None => Ok(s),
    }
}

/// Validates a boolean literal.
///
/// # Errors
///
/// Returns [`LexError::InvalidBoolean`] unless `s` is exactly `true` or
/// `false`.
pub fn scan_boolean(s: &str) -> Result<bool, LexError> {
    match s {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(LexError::InvalidBoolean(s.to_string())),
    }
}

/// Validates the null literal.
///
/// # Errors
///
/// Returns [`LexError::InvalidNull`] unless `s` is exactly `null`.
pub fn scan_null(s: &str) -> Result<(), LexError> {
    if s == "null" {
        Ok(())
    } else {
        Err(LexError::InvalidNull(s.to_string()))
    }
}

/// Characters a numeric literal may be made of.
pub(crate) const fn is_number_char(c: char) -> bool {
    matches!(c, '0'..='9' | '+' | '-' | '.' | 'e')
}
