//! Compilation error taxonomy.

use thiserror::Error;

use crate::lexer::{LexemeLocator, Token, TokenKind};

/// Stage at which a statement was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Lexical,
    Syntactic,
    Semantic,
    Logical,
}

/// An error raised while lexing, parsing or resolving a statement.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    /// No token kind matches a lexeme.
    #[error("lexical error {locator}: {message}")]
    Lexical {
        message: String,
        locator: LexemeLocator,
    },

    /// The token stream does not follow the grammar.
    #[error("syntactic error {locator}: {message}")]
    Syntactic {
        message: String,
        locator: LexemeLocator,
    },

    /// A name could not be resolved against the catalog.
    #[error("semantic error{}: {message}", locator_suffix(.locator))]
    Semantic {
        message: String,
        locator: Option<LexemeLocator>,
    },

    /// An internal invariant was broken.
    #[error("logical error: {message}")]
    Logical { message: String },
}

fn locator_suffix(locator: &Option<LexemeLocator>) -> String {
    locator.map(|l| format!(" {l}")).unwrap_or_default()
}

impl CompileError {
    /// Creates a lexical error for a lexeme no token kind accepts.
    #[must_use]
    pub fn no_matching_token(lexeme: &str, locator: LexemeLocator) -> Self {
        Self::Lexical {
            message: format!("No matching token for lexeme '{lexeme}'"),
            locator,
        }
    }

    /// Creates an "unexpected token" error.
    #[must_use]
    pub fn unexpected(expected: impl AsRef<str>, found: &Token) -> Self {
        Self::Syntactic {
            message: format!(
                "Unexpected token: {} (expected: {})",
                found.lexeme(),
                expected.as_ref()
            ),
            locator: found.locator(),
        }
    }

    /// Creates an "unexpected end of tokens" error.
    #[must_use]
    pub fn unexpected_eof(expected: TokenKind) -> Self {
        Self::Syntactic {
            message: format!("Unexpected end of tokens (expected: {expected})"),
            locator: LexemeLocator::END_OF_INPUT,
        }
    }

    /// Creates a semantic error, optionally pointing at the offending name.
    #[must_use]
    pub fn semantic(message: impl Into<String>, locator: Option<LexemeLocator>) -> Self {
        Self::Semantic {
            message: message.into(),
            locator,
        }
    }

    #[must_use]
    pub fn logical(message: impl Into<String>) -> Self {
        Self::Logical {
            message: message.into(),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Lexical { .. } => ErrorKind::Lexical,
            Self::Syntactic { .. } => ErrorKind::Syntactic,
            Self::Semantic { .. } => ErrorKind::Semantic,
            Self::Logical { .. } => ErrorKind::Logical,
        }
    }

    /// The message without location.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Lexical { message, .. }
            | Self::Syntactic { message, .. }
            | Self::Semantic { message, .. }
            | Self::Logical { message } => message,
        }
    }

    #[must_use]
    pub const fn locator(&self) -> Option<LexemeLocator> {
        match self {
            Self::Lexical { locator, .. } | Self::Syntactic { locator, .. } => Some(*locator),
            Self::Semantic { locator, .. } => *locator,
            Self::Logical { .. } => None,
        }
    }

    /// Returns true for a syntactic error raised because tokens ran out.
    #[must_use]
    pub fn is_unexpected_eof(&self) -> bool {
        matches!(self, Self::Syntactic { locator, .. } if locator.is_end_of_input())
    }
}

/// Result type for statement compilation.
pub type Result<T> = std::result::Result<T, CompileError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unexpected_token_message() {
        let locator = LexemeLocator::new(1, 1, 1, 7).unwrap();
        let token = Token::classify("SELECT", locator).unwrap();
        let err = CompileError::unexpected(TokenKind::From.as_str(), &token);
        assert_eq!(err.kind(), ErrorKind::Syntactic);
        assert_eq!(err.message(), "Unexpected token: SELECT (expected: FROM)");
        assert_eq!(err.locator(), Some(locator));
        assert!(!err.is_unexpected_eof());
    }

    #[test]
    fn test_unexpected_eof() {
        let err = CompileError::unexpected_eof(TokenKind::Identifier);
        assert!(err.is_unexpected_eof());
        assert_eq!(
            err.to_string(),
            "syntactic error at end of input: Unexpected end of tokens (expected: identifier)"
        );
    }

    #[test]
    fn test_semantic_display_with_and_without_locator() {
        let bare = CompileError::semantic("Unknown table 'users'", None);
        assert_eq!(bare.to_string(), "semantic error: Unknown table 'users'");

        let located = CompileError::semantic(
            "Unknown column 'x'",
            Some(LexemeLocator::new(1, 20, 1, 23).unwrap()),
        );
        assert_eq!(
            located.to_string(),
            "semantic error at line 1 from column 20 to column 23: Unknown column 'x'"
        );
        assert_eq!(CompileError::logical("broken").locator(), None);
    }
}
