//! Tokens command implementation.
//!
//! Scans a file, an inline expression, or stdin and prints one token per
//! line (or a JSON array).

use std::io;
use std::path::PathBuf;
use std::time::Instant;

use crate::commands::common::{read_input, scan_and_render, RenderOptions};
use crate::error::Result;

/// Arguments for the tokens command.
#[derive(Debug, Clone, Default)]
pub struct TokensArgs {
    /// File to scan; `None` or `-` reads stdin.
    pub file: Option<PathBuf>,
    /// Inline source text, takes precedence over `file`.
    pub expr: Option<String>,
    /// Enable verbose output.
    pub verbose: bool,
    /// Rendering options after merging flags over configuration.
    pub render: RenderOptions,
}

/// Tokens command handler.
pub struct TokensCommand {
    args: TokensArgs,
}

impl TokensCommand {
    /// Create a new TokensCommand.
    pub fn new(args: TokensArgs) -> Self {
        Self { args }
    }

    /// Execute the command.
    pub fn run(&self) -> Result<()> {
        let start_time = Instant::now();

        let source = read_input(
            self.args.file.as_deref(),
            self.args.expr.as_deref(),
            &mut io::stdin().lock(),
        )?;

        let count = scan_and_render(
            &source,
            &self.args.render,
            &mut io::stdout().lock(),
            &mut io::stderr().lock(),
        )?;

        if self.args.verbose {
            eprintln!(
                "ℹ️ {} tokens from {} bytes in {:.2}ms",
                count,
                source.len(),
                start_time.elapsed().as_secs_f64() * 1000.0
            );
        }

        Ok(())
    }
}

/// Run the tokens command with the given arguments.
pub fn run_tokens(args: TokensArgs) -> Result<()> {
    TokensCommand::new(args).run()
}
