//! Statement lexer.
//!
//! Splits statement text into [`Token`]s, stamping each with the
//! [`LexemeLocator`] it was read from.

mod locator;
mod token;
mod tokenizer;

pub use locator::{LexemeLocator, LocatorError};
pub use token::{Token, TokenKind};
pub use tokenizer::{Lexer, analyze};
