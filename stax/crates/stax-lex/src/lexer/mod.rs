//! Lexer module.
//!
//! The lexer is a small state machine split across these files:
//! - `core` - the Lexer struct, the state loop and single-character dispatch
//! - `identifier` - the identifier sub-scanner
//! - `number` - the number sub-scanner
//! - `operator` - two-character operator lookahead (`<-`)

mod core;
mod identifier;
mod number;
mod operator;

pub use core::Lexer;
