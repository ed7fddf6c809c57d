//! # JSON Token
//!
//! Defines the tokens produced from lexing JSON-like text.
use serde::Serialize;
use std::borrow::Cow;
use std::fmt::Display;

/// One of the six structural characters of a JSON document.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize)]
pub enum Punct {
    /// Opening curly brace
    #[serde(rename = "{")]
    LCurly,

    /// Closing curly brace
    #[serde(rename = "}")]
    RCurly,

    /// Opening square bracket
    #[serde(rename = "[")]
    LSquare,

    /// Closing square bracket
    #[serde(rename = "]")]
    RSquare,

    /// Colon character
    #[serde(rename = ":")]
    Colon,

    /// Comma character
    #[serde(rename = ",")]
    Comma,
}

impl Punct {
    /// Maps a structural byte to its punctuation, if it is one.
    #[must_use]
    pub const fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'{' => Some(Self::LCurly),
            b'}' => Some(Self::RCurly),
            b'[' => Some(Self::LSquare),
            b']' => Some(Self::RSquare),
            b':' => Some(Self::Colon),
            b',' => Some(Self::Comma),
            _ => None,
        }
    }

    /// The character this punctuation was lexed from.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::LCurly => '{',
            Self::RCurly => '}',
            Self::LSquare => '[',
            Self::RSquare => ']',
            Self::Colon => ':',
            Self::Comma => ',',
        }
    }
}

/// Represents a lexical unit of a JSON document.
///
/// String and number literals keep their source text verbatim: strings have
/// their surrounding quotes stripped but escape sequences are left
/// unresolved, and numbers are never parsed.
#[derive(Debug, PartialEq, Eq, Clone, Hash, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Token {
    /// Structural character
    Punct(Punct),

    /// String content, without the surrounding quotes
    StringLit(String),

    /// Numeric literal text
    NumberLit(String),

    /// Boolean value
    BoolLit(bool),

    /// Nil value
    NullLit,
}

impl Token {
    /// Returns the flat textual form of the token: the punctuation
    /// character, the string content, the number text, `true`/`false` or
    /// `null`.
    ///
    /// ```rust
    /// use jsonlex::tokenizer::{tokenize, Token};
    ///
    /// let tokens = tokenize(r#"{"a": null}"#).unwrap();
    /// let flat: Vec<_> = tokens.iter().map(Token::text).collect();
    /// assert_eq!(flat, ["{", "a", ":", "null", "}"]);
    /// ```
    #[must_use]
    pub fn text(&self) -> Cow<'_, str> {
        match self {
            Self::Punct(p) => Cow::Owned(p.as_char().to_string()),
            Self::StringLit(s) | Self::NumberLit(s) => Cow::Borrowed(s),
            Self::BoolLit(true) => Cow::Borrowed("true"),
            Self::BoolLit(false) => Cow::Borrowed("false"),
            Self::NullLit => Cow::Borrowed("null"),
        }
    }

    /// Name of the token kind, as used in the serialized form.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Punct(_) => "punct",
            Self::StringLit(_) => "string_lit",
            Self::NumberLit(_) => "number_lit",
            Self::BoolLit(_) => "bool_lit",
            Self::NullLit => "null_lit",
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn token_is_send_sync() {
        assert_send_sync::<Token>();
        assert_send_sync::<Punct>();
    }

    #[test]
    fn punct_round_trips_through_bytes() {
        for byte in *b"{}[]:," {
            let punct = Punct::from_byte(byte).unwrap();
            assert_eq!(punct.as_char(), byte as char);
        }
        assert_eq!(Punct::from_byte(b'"'), None);
    }

    #[test]
    fn text_matches_flat_form() {
        assert_eq!(Token::Punct(Punct::Colon).text(), ":");
        assert_eq!(Token::StringLit(r"a\nb".into()).text(), r"a\nb");
        assert_eq!(Token::NumberLit("-1.5e3".into()).text(), "-1.5e3");
        assert_eq!(Token::BoolLit(false).text(), "false");
        assert_eq!(Token::NullLit.to_string(), "null");
    }

    #[test]
    fn serializes_tagged() {
        let tokens = vec![
            Token::Punct(Punct::LSquare),
            Token::NumberLit("1".into()),
            Token::BoolLit(true),
            Token::NullLit,
        ];
        let json = serde_json::to_string(&tokens).unwrap();
        assert_eq!(
            json,
            r#"[{"kind":"punct","value":"["},{"kind":"number_lit","value":"1"},{"kind":"bool_lit","value":true},{"kind":"null_lit"}]"#
        );
    }
}
