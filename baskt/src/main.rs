//! Baskt CLI - Token tools for line-numbered BASIC.
//!
//! This is the main entry point for the baskt CLI application.
//! It uses clap for argument parsing and dispatches to the command
//! handlers in [`commands`].

mod commands;
mod config;
mod error;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{
    check::{run_check, CheckArgs},
    common::OutputFormat,
    tokens::{run_tokens, TokensArgs},
};
use config::Config;
use error::{BasktError, Result};

/// Baskt - token tools for line-numbered BASIC
///
/// Baskt dumps the token stream of BASIC programs and checks them for
/// lexical problems.
#[derive(Parser, Debug)]
#[command(name = "baskt")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Token tools for line-numbered BASIC", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "BASKT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "BASKT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "BASKT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the baskt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the token stream of each file
    ///
    /// Prints one `line:col KIND text` line per token, or a JSON array of
    /// tokens per file with `--format json`.
    Tokens(TokensCommand),

    /// Report lexical warnings and errors
    ///
    /// Exits with a failure status if any file has an error.
    Check(CheckCommand),
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCommand {
    /// Source files (`-` for standard input)
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommand {
    /// Source files (`-` for standard input)
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

/// Main entry point for the baskt CLI.
fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        },
    }
}

/// Initialize logging, load configuration, and run the selected command.
fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose, cli.no_color)?;

    let config = load_config(cli.config.as_deref())?;

    execute_command(cli.command, config)
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over `--verbose`. Logs go to standard error
/// so they never mix with token output.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| BasktError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, config: Config) -> Result<()> {
    let table = config.build_table()?;

    match command {
        Commands::Tokens(args) => {
            let tokens_args = TokensArgs {
                files: args.files,
                format: args.format.unwrap_or(config.output.format),
            };
            run_tokens(tokens_args, &table)
        },
        Commands::Check(args) => {
            run_check(CheckArgs { files: args.files }, &table)?;
            Ok(())
        },
    }
}
