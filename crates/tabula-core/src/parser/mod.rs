//! Statement parser.
//!
//! A hand-written recursive descent parser over the lexer's tokens.

mod context;
mod parser;

pub use context::{ParseContext, ParseOutcome};
pub use parser::{Parser, parse_statement};
