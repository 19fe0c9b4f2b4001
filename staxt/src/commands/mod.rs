//! Command modules for the staxt CLI.
//!
//! Each subcommand lives in its own file with an `*Args` struct, a handler
//! and a `run_*` entry point. Shared scanning and rendering is in `common`.

pub mod common;

pub mod config;
pub mod repl;
pub mod tokens;

// Re-export command types and functions
pub use config::{run_config, ConfigArgs};
pub use repl::{run_repl, ReplArgs};
pub use tokens::{run_tokens, TokensArgs};
