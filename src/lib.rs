/*!
# `jsonlex` Library

Splits JSON-like text into structural, string, number, boolean and null
tokens, reporting the first malformed construct as a [`tokenizer::LexError`].
*/

pub mod commands;
pub mod output;
pub mod tokenizer;
