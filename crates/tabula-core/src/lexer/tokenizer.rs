//! Statement tokenizer implementation.

use super::{LexemeLocator, Token, TokenKind};
use crate::error::{CompileError, Result};

/// Characters ending a lexeme outside a quoted identifier.
const SEPARATORS: [char; 3] = ['\n', ' ', '\t'];

/// Encloses identifiers; separators between an odd count of these are kept.
const QUOTE: char = '"';

/// Ends the current lexeme and is a lexeme of its own.
const DOT: char = '.';

/// A lexer that tokenizes statement text.
pub struct Lexer<'a> {
    /// The input source text.
    input: &'a str,
    /// The current byte position.
    pos: usize,
    /// The current line, 1-based.
    line: usize,
    /// The current column, 1-based.
    column: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the current character without advancing.
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Advances to the next character and returns it.
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    const fn cursor(&self) -> (usize, usize) {
        (self.line, self.column)
    }

    /// Skips every separator directly ahead.
    fn skip_separators(&mut self) {
        while self.peek().is_some_and(|c| SEPARATORS.contains(&c)) {
            self.advance();
        }
    }

    /// Scans the next token, or `None` once the input is exhausted.
    ///
    /// # Errors
    ///
    /// Returns [`CompileError::Lexical`] when the next lexeme is not a valid
    /// token or a quoted identifier is left open at the end of input.
    pub fn next_token(&mut self) -> Result<Option<Token>> {
        self.skip_separators();
        let start = self.pos;
        let start_cursor = self.cursor();

        match self.peek() {
            None => return Ok(None),
            Some(DOT) => {
                self.advance();
                let locator = LexemeLocator::from_positions(start_cursor, self.cursor());
                return Ok(Token::new(TokenKind::Dot, ".", locator));
            }
            Some(_) => {}
        }

        let mut quoted = false;
        while let Some(c) = self.peek() {
            if !quoted && (SEPARATORS.contains(&c) || c == DOT) {
                break;
            }
            if c == QUOTE {
                quoted = !quoted;
            }
            self.advance();
        }

        let lexeme = &self.input[start..self.pos];
        let locator = LexemeLocator::from_positions(start_cursor, self.cursor());
        if quoted {
            return Err(CompileError::Lexical {
                message: format!("Unterminated quoted identifier '{lexeme}'"),
                locator,
            });
        }
        Token::classify(lexeme, locator)
            .map(Some)
            .ok_or_else(|| CompileError::no_matching_token(lexeme, locator))
    }

    /// Tokenizes the entire input and returns all tokens.
    ///
    /// # Errors
    ///
    /// Stops at the first lexeme that matches no token kind.
    pub fn tokenize(&mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }
}

/// Tokenizes `input` in one call.
///
/// # Errors
///
/// See [`Lexer::tokenize`].
pub fn analyze(input: &str) -> Result<Vec<Token>> {
    Lexer::new(input).tokenize()
}
