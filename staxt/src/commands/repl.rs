//! REPL command implementation.
//!
//! Reads one line at a time and prints its tokens. Each line is scanned on
//! its own, so spans are relative to the line.

use std::io::{self, BufRead, Write};

use crate::commands::common::{scan_and_render, RenderOptions};
use crate::error::Result;

/// Lines that end the session.
const QUIT_COMMANDS: [&str; 2] = [":quit", ":q"];

/// Arguments for the repl command.
#[derive(Debug, Clone)]
pub struct ReplArgs {
    /// Prompt printed before each line.
    pub prompt: String,
    /// Enable verbose output.
    pub verbose: bool,
    /// Rendering options after merging flags over configuration.
    pub render: RenderOptions,
}

/// Repl command handler.
pub struct ReplCommand {
    args: ReplArgs,
}

impl ReplCommand {
    /// Create a new ReplCommand.
    pub fn new(args: ReplArgs) -> Self {
        Self { args }
    }

    /// Execute the command.
    pub fn run(&self) -> Result<()> {
        let lines = repl_loop(
            &self.args.prompt,
            &self.args.render,
            io::stdin().lock(),
            &mut io::stdout().lock(),
            &mut io::stderr().lock(),
        )?;

        if self.args.verbose {
            eprintln!("ℹ️ Scanned {} lines", lines);
        }

        Ok(())
    }
}

/// Run the repl command with the given arguments.
pub fn run_repl(args: ReplArgs) -> Result<()> {
    ReplCommand::new(args).run()
}

/// Prompts, reads and scans lines until end of input or a quit command.
///
/// Blank lines are skipped. Returns the number of lines scanned.
pub fn repl_loop<R: BufRead>(
    prompt: &str,
    options: &RenderOptions,
    mut input: R,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<usize> {
    let mut scanned = 0;
    let mut line = String::new();

    loop {
        write!(out, "{}", prompt)?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }

        let trimmed = line.trim();
        if QUIT_COMMANDS.contains(&trimmed) {
            break;
        }
        if trimmed.is_empty() {
            continue;
        }

        scan_and_render(line.trim_end_matches(['\n', '\r']), options, out, err)?;
        scanned += 1;
    }

    tracing::debug!(lines = scanned, "repl session ended");
    Ok(scanned)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(input: &str, options: &RenderOptions) -> (usize, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let lines = repl_loop("> ", options, input.as_bytes(), &mut out, &mut err).unwrap();
        (
            lines,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_repl_scans_each_line() {
        let (lines, out, _) = session("1 2\nx\n", &RenderOptions::default());
        assert_eq!(lines, 2);
        assert_eq!(
            out,
            "> Number \"1\"\nNumber \"2\"\n> Identifier \"x\"\n> \n"
        );
    }

    #[test]
    fn test_repl_skips_blank_lines() {
        let (lines, out, _) = session("\n   \n[\n", &RenderOptions::default());
        assert_eq!(lines, 1);
        assert!(out.contains("LeftBracket \"[\""));
    }

    #[test]
    fn test_repl_quit_stops_reading() {
        let (lines, out, _) = session("a\n:quit\nb\n", &RenderOptions::default());
        assert_eq!(lines, 1);
        assert!(!out.contains("\"b\""));

        let (lines, _, _) = session(":q\n", &RenderOptions::default());
        assert_eq!(lines, 0);
    }

    #[test]
    fn test_repl_line_without_newline() {
        let (lines, out, _) = session("<-", &RenderOptions::default());
        assert_eq!(lines, 1);
        assert!(out.contains("LeftArrow \"<-\""));
    }

    #[test]
    fn test_repl_spans_are_per_line() {
        let options = RenderOptions {
            spans: true,
            ..RenderOptions::default()
        };
        let (_, out, _) = session("a\nb\n", &options);
        assert!(out.contains("Identifier \"b\" @1:1"));
    }

    #[test]
    fn test_repl_diagnostics() {
        let options = RenderOptions {
            diagnostics: true,
            ..RenderOptions::default()
        };
        let (_, _, err) = session("1 ; 2\n", &options);
        assert!(err.contains("warning[W1001]"));
    }
}
