//! Rendering of token streams for the command line.

use anyhow::Context as _;
use clap::ValueEnum;
use colored::{ColoredString, Colorize};
use std::io::Write;
use std::io::{self, ErrorKind};

use crate::tokenizer::{Spanned, Token};

/// How a token stream is written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// `Tokens: [...]`, each token in its flat textual form
    #[default]
    Text,
    /// JSON array of tagged tokens
    Json,
    /// One line per token with its span and kind
    Debug,
}

/// Write a token stream to `writer` in the given format.
/// Silently returns `Ok(())` on broken pipe so that piping to tools like
/// `head` exits cleanly.
///
/// # Errors
///
/// Returns an error if writing to `writer` fails.
pub fn write_tokens<W: Write>(
    writer: &mut W,
    tokens: &[Spanned],
    format: OutputFormat,
) -> anyhow::Result<()> {
    let result = match format {
        OutputFormat::Text => write_text(writer, tokens),
        OutputFormat::Json => write_json(writer, tokens),
        OutputFormat::Debug => write_debug(writer, tokens),
    };

    match result {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == ErrorKind::BrokenPipe => Ok(()),
        Err(err) => Err(err).context("write tokens to stdout"),
    }
}

fn write_text<W: Write>(writer: &mut W, tokens: &[Spanned]) -> io::Result<()> {
    let flat = tokens
        .iter()
        .map(|(token, _)| token.text())
        .collect::<Vec<_>>()
        .join(" ");
    writeln!(writer, "Tokens: [{flat}]")
}

fn write_json<W: Write>(writer: &mut W, tokens: &[Spanned]) -> io::Result<()> {
    let tokens: Vec<&Token> = tokens.iter().map(|(token, _)| token).collect();
    serde_json::to_writer(&mut *writer, &tokens)?;
    writeln!(writer)
}

fn write_debug<W: Write>(writer: &mut W, tokens: &[Spanned]) -> io::Result<()> {
    for (token, span) in tokens {
        writeln!(
            writer,
            "{:>4}..{:<4} {:<10} {}",
            span.start,
            span.end,
            token.kind(),
            colorize(token)
        )?;
    }
    Ok(())
}

fn colorize(token: &Token) -> ColoredString {
    let text = token.text();
    match token {
        Token::Punct(_) => text.bold(),
        Token::StringLit(_) => text.green(),
        Token::NumberLit(_) => text.yellow(),
        Token::BoolLit(_) => text.yellow().bold(),
        Token::NullLit => text.red().dimmed(),
    }
}
