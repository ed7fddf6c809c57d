//! Subcommand implementations for the `jsonlex` binary.
pub mod generate;
