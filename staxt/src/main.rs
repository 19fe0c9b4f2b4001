//! Staxt CLI - Inspect how stax source text is tokenized.
//!
//! This is the main entry point for the staxt CLI application.
//! It uses clap for argument parsing, merges flags over `staxt.toml`,
//! and dispatches to the command handlers.

mod commands;
mod config;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use stax_util::DiagnosticCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{
    common::{OutputFormat, RenderOptions},
    run_config, run_repl, run_tokens, ConfigArgs, ReplArgs, TokensArgs,
};
use config::Config;
use error::{Result, StaxtError};

/// Staxt - A tokenizer front end for the stax language
///
/// Staxt prints the tokens of stax programs, either from files or
/// interactively, and can report characters the scanner skipped.
#[derive(Parser, Debug)]
#[command(name = "staxt")]
#[command(author = "Stax Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A tokenizer front end for the stax language", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "STAXT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "STAXT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "STAXT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the staxt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the tokens of a program
    ///
    /// Reads a file, an inline expression, or stdin and prints one token
    /// per line.
    Tokens(TokensCommand),

    /// Tokenize lines interactively
    ///
    /// Each line read is scanned on its own. Type `:quit` or send EOF to
    /// leave.
    Repl(ReplCommand),

    /// Show or write the effective configuration
    Config(ConfigCommand),
}

/// Output flags shared by `tokens` and `repl`.
#[derive(clap::Args, Debug)]
struct OutputFlags {
    /// Output format (text, json)
    #[arg(short = 'F', long)]
    format: Option<String>,

    /// Append line:column to each token
    #[arg(long)]
    spans: bool,

    /// Report skipped characters on stderr
    #[arg(short, long)]
    diagnostics: bool,

    /// Suppress a diagnostic code (repeatable)
    #[arg(long = "allow", value_name = "CODE")]
    allow: Vec<String>,
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCommand {
    /// Source file (default: stdin)
    file: Option<PathBuf>,

    /// Scan this text instead of a file
    #[arg(short, long, conflicts_with = "file")]
    expr: Option<String>,

    #[command(flatten)]
    output: OutputFlags,
}

/// Arguments for the repl subcommand.
#[derive(Parser, Debug)]
struct ReplCommand {
    /// Prompt string (default: from config)
    #[arg(short, long)]
    prompt: Option<String>,

    #[command(flatten)]
    output: OutputFlags,
}

/// Arguments for the config subcommand.
#[derive(Parser, Debug)]
struct ConfigCommand {
    /// Write the configuration to this file instead of printing it
    #[arg(short, long, value_name = "PATH")]
    write: Option<PathBuf>,

    /// Overwrite an existing file
    #[arg(short, long)]
    force: bool,
}

/// Main entry point for the staxt CLI.
///
/// Parses command-line arguments, loads configuration, initializes logging,
/// and dispatches to the appropriate command handler.
fn main() -> Result<()> {
    let cli = Cli::parse();

    // Configuration can turn on verbose logging, so it is read first
    let config = load_config(cli.config.as_deref())?;
    let verbose = cli.verbose || config.verbose;

    init_logging(verbose, cli.no_color)?;

    execute_command(cli.command, verbose, config)
}

/// Initialize the logging system.
///
/// Logs go to stderr so token output on stdout stays clean.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

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
        .map_err(|e| StaxtError::Config(format!("Failed to initialize logging: {}", e)))?;

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
fn execute_command(command: Commands, verbose: bool, config: Config) -> Result<()> {
    match command {
        Commands::Tokens(args) => execute_tokens(args, verbose, &config),
        Commands::Repl(args) => execute_repl(args, verbose, &config),
        Commands::Config(args) => execute_config(args, verbose, config),
    }
}

/// Merge output flags over the configuration. A flag can only turn a
/// setting on; allow-lists from both sources are combined.
fn render_options(flags: OutputFlags, config: &Config) -> Result<RenderOptions> {
    let format: OutputFormat = flags
        .format
        .as_deref()
        .unwrap_or(&config.output.format)
        .parse()?;

    let mut allowed = config.diagnostics.allowed_codes()?;
    for code in &flags.allow {
        allowed.push(code.parse::<DiagnosticCode>()?);
    }

    Ok(RenderOptions {
        format,
        spans: flags.spans || config.output.spans,
        diagnostics: flags.diagnostics || config.diagnostics.enabled,
        allowed,
    })
}

/// Execute the tokens command.
fn execute_tokens(args: TokensCommand, verbose: bool, config: &Config) -> Result<()> {
    let tokens_args = TokensArgs {
        file: args.file,
        expr: args.expr,
        verbose,
        render: render_options(args.output, config)?,
    };
    run_tokens(tokens_args)
}

/// Execute the repl command.
fn execute_repl(args: ReplCommand, verbose: bool, config: &Config) -> Result<()> {
    let repl_args = ReplArgs {
        prompt: args.prompt.unwrap_or_else(|| config.repl.prompt.clone()),
        verbose,
        render: render_options(args.output, config)?,
    };
    run_repl(repl_args)
}

/// Execute the config command.
fn execute_config(args: ConfigCommand, verbose: bool, config: Config) -> Result<()> {
    let config_args = ConfigArgs {
        write: args.write,
        force: args.force,
        verbose,
    };
    run_config(config_args, config)
}
