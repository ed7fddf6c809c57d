/*!
Main binary for jsonlex.
*/

use anyhow::{Result, anyhow};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::generate;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use log::debug;
use std::io::stdout;
use std::path::PathBuf;

use jsonlex::output::{OutputFormat, write_tokens};
use jsonlex::{commands, tokenizer};

/// Split JSON-like text into lexical tokens.
#[derive(Parser)]
#[command(name = "jsonlex", version, about, arg_required_else_help = true, long_about = None, disable_help_subcommand = true)]
struct Args {
    #[command(subcommand)]
    command: Commands,
    #[command(flatten)]
    verbosity: Verbosity<WarnLevel>,
}

/// Available subcommands for `jsonlex`
#[derive(Subcommand)]
enum Commands {
    /// Lex a JSON string given on the command line and print its tokens.
    #[command(alias = "fromString", long_about = "Lex a JSON string given on the command line and print its tokens.\n\nExample: jsonlex from-string '{\"name\": \"Tony Stark\", \"age\": 22}'")]
    FromString {
        /// Raw JSON text to tokenize
        #[arg(allow_hyphen_values = true)]
        json: String,
        /// Output format for the token stream
        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },
    #[command(subcommand)]
    /// Generate additional documentation and/or completions
    Generate(GenerateCommand),
}

/// Generate shell completions and man page
#[derive(Subcommand)]
enum GenerateCommand {
    /// Generate shell completions for the given shell to stdout.
    Shell { shell: clap_complete::Shell },
    /// Generate a man page for jsonlex to output directory if specified,
    /// else the current directory.
    Man {
        /// The output directory to write the man pages.
        #[clap(short, long)]
        output_dir: Option<PathBuf>,
    },
}

/// Entry point for main binary.
///
/// Lexes the given string and prints the token stream to STDOUT. A lexing
/// failure is reported on STDERR with a non-zero exit status.
fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.verbosity.log_level_filter())
        .init();

    match args.command {
        Commands::FromString { json, format } => {
            debug!("lexing {} bytes of input", json.len());
            let tokens = tokenizer::tokenize_spanned(&json).map_err(|err| {
                debug!("lexing stopped: {err:?}");
                // one line, in the `failed to parse json: <reason>` shape
                // the `fromString` command has always printed
                anyhow!("failed to parse json: {err}")
            })?;
            debug!("lexed {} tokens", tokens.len());

            write_tokens(&mut stdout().lock(), &tokens, format)?;
        }
        Commands::Generate(cmd) => match cmd {
            GenerateCommand::Shell { shell } => {
                let mut cmd = Args::command();
                generate(shell, &mut cmd, "jsonlex", &mut stdout().lock());
            }
            GenerateCommand::Man { output_dir } => {
                for path in commands::generate::generate_man_pages(
                    &Args::command(),
                    output_dir,
                )? {
                    println!("Generated: {}", path.display());
                }
            }
        },
    }

    Ok(())
}
