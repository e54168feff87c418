use std::{
    fs::read_to_string,
    path::{Path, PathBuf},
    process::ExitCode,
    time::Instant,
};

use anyhow::Context;
use clap::{Parser, Subcommand};
use rlangc::{
    config::{Config, Strictness},
    lexer::lexer::tokenize_with,
    parser::parser::parse_with,
    render_error,
};
use tracing::{debug, Level};

#[derive(Parser)]
#[command(name = "rlangc")]
#[command(about = "Front end for the rlang scripting language")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Tokenize and parse a source file
    Check {
        path: PathBuf,

        /// Reject unterminated strings, ragged dedents and unclosed blocks
        #[arg(long)]
        strict: bool,

        /// Print the token stream
        #[arg(long)]
        tokens: bool,

        /// Print the syntax tree
        #[arg(long)]
        ast: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Check {
            path,
            strict,
            tokens,
            ast,
        } => {
            let config = Config {
                strictness: if strict {
                    Strictness::Strict
                } else {
                    Strictness::Lenient
                },
            };

            match check(&path, &config, tokens, ast) {
                Ok(code) => code,
                Err(e) => {
                    eprintln!("Error: {:#}", e);
                    ExitCode::FAILURE
                }
            }
        }
    }
}

fn check(
    path: &Path,
    config: &Config,
    dump_tokens: bool,
    dump_ast: bool,
) -> anyhow::Result<ExitCode> {
    let source =
        read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let file_name = path.display().to_string();

    let start = Instant::now();

    let tokens = match tokenize_with(&source, config) {
        Ok(tokens) => tokens,
        Err(error) => {
            eprint!("{}", render_error(&error, &source, &file_name));
            return Ok(ExitCode::FAILURE);
        }
    };

    debug!(elapsed = ?start.elapsed(), "tokenized");

    if dump_tokens {
        for token in tokens.iter() {
            println!("{}", token.debug());
        }
    }

    let parse_start = Instant::now();
    let program = match parse_with(tokens, config) {
        Ok(program) => program,
        Err(error) => {
            eprint!("{}", render_error(&error, &source, &file_name));
            return Ok(ExitCode::FAILURE);
        }
    };

    debug!(elapsed = ?parse_start.elapsed(), "parsed");

    if dump_ast {
        println!("{:#?}", program);
    }

    println!("{}: OK", file_name);
    Ok(ExitCode::SUCCESS)
}
