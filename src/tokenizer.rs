//! # Tokenizer/ Lexer
//!
//! Lexes JSON-like text into a flat token stream. Brackets and braces are
//! emitted as they appear; nesting is not checked.
pub mod error;
pub mod lexer;
pub mod scan;
pub mod token;

// Re-exports
pub use error::LexError;
pub use lexer::{Spanned, tokenize, tokenize_spanned};
pub use token::{Punct, Token};
