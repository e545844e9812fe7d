//! Token types for the statement lexer.

use core::fmt;

use super::LexemeLocator;

/// The closed set of token kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `SELECT`, any case.
    Select,
    /// `FROM`, any case.
    From,
    /// A double-quoted name.
    Identifier,
    /// `.`
    Dot,
}

impl TokenKind {
    /// Kinds in the order a lexeme is tried against them.
    ///
    /// Keywords come before identifiers.
    pub const PRIORITY: [Self; 4] = [Self::Select, Self::From, Self::Identifier, Self::Dot];

    /// Returns true if `lexeme` is a valid spelling of this kind.
    #[must_use]
    pub fn recognizes(self, lexeme: &str) -> bool {
        match self {
            Self::Select => lexeme.eq_ignore_ascii_case("SELECT"),
            Self::From => lexeme.eq_ignore_ascii_case("FROM"),
            Self::Identifier => lexeme
                .strip_prefix('"')
                .and_then(|rest| rest.strip_suffix('"'))
                .is_some_and(|inner| !inner.contains('"')),
            Self::Dot => lexeme == ".",
        }
    }

    /// Returns the name used in diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Select => "SELECT",
            Self::From => "FROM",
            Self::Identifier => "identifier",
            Self::Dot => "'.'",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified lexeme with its location in the statement text.
///
/// A `Token` can only be built through [`Token::new`] or
/// [`Token::classify`], so its lexeme always satisfies its kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    lexeme: String,
    locator: LexemeLocator,
}

impl Token {
    /// Creates a token of the given kind, or `None` if the lexeme does not
    /// match it.
    #[must_use]
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, locator: LexemeLocator) -> Option<Self> {
        let lexeme = lexeme.into();
        kind.recognizes(&lexeme).then_some(Self {
            kind,
            lexeme,
            locator,
        })
    }

    /// Classifies a lexeme as the first kind in [`TokenKind::PRIORITY`] that
    /// recognizes it.
    #[must_use]
    pub fn classify(lexeme: &str, locator: LexemeLocator) -> Option<Self> {
        TokenKind::PRIORITY
            .into_iter()
            .find(|kind| kind.recognizes(lexeme))
            .map(|kind| Self {
                kind,
                lexeme: String::from(lexeme),
                locator,
            })
    }

    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The raw lexeme, quotes included.
    #[must_use]
    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    #[must_use]
    pub const fn locator(&self) -> LexemeLocator {
        self.locator
    }

    /// Returns true if this token is of the given kind.
    #[must_use]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// The name inside the quotes of an identifier token.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        match self.kind {
            TokenKind::Identifier => Some(&self.lexeme[1..self.lexeme.len() - 1]),
            TokenKind::Select | TokenKind::From | TokenKind::Dot => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Select => write!(f, "<SELECT>"),
            TokenKind::From => write!(f, "<FROM>"),
            TokenKind::Dot => write!(f, "<DOT>"),
            TokenKind::Identifier => write!(f, "<ID, {}>", self.lexeme),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(column: i64, len: i64) -> LexemeLocator {
        LexemeLocator::new(1, column, 1, column + len).unwrap()
    }

    #[test]
    fn test_keywords_case_insensitive() {
        assert!(TokenKind::Select.recognizes("SELECT"));
        assert!(TokenKind::Select.recognizes("select"));
        assert!(TokenKind::Select.recognizes("SeLeCt"));
        assert!(TokenKind::From.recognizes("from"));
        assert!(!TokenKind::From.recognizes("FROMM"));
        assert!(!TokenKind::Select.recognizes("\"SELECT\""));
    }

    #[test]
    fn test_identifier_rule() {
        assert!(TokenKind::Identifier.recognizes("\"users\""));
        assert!(TokenKind::Identifier.recognizes("\"with space\""));
        assert!(TokenKind::Identifier.recognizes("\"\""));
        assert!(!TokenKind::Identifier.recognizes("\""));
        assert!(!TokenKind::Identifier.recognizes("users"));
        assert!(!TokenKind::Identifier.recognizes("\"a\"b\""));
        assert!(!TokenKind::Identifier.recognizes("\"open"));
    }

    #[test]
    fn test_classify_priority() {
        let select = Token::classify("select", at(1, 6)).unwrap();
        assert_eq!(select.kind(), TokenKind::Select);

        let quoted = Token::classify("\"select\"", at(1, 8)).unwrap();
        assert_eq!(quoted.kind(), TokenKind::Identifier);
        assert_eq!(quoted.value(), Some("select"));

        assert!(Token::classify("SELECTED", at(1, 8)).is_none());
    }

    #[test]
    fn test_new_validates_kind() {
        assert!(Token::new(TokenKind::Dot, ".", at(1, 1)).is_some());
        assert!(Token::new(TokenKind::Dot, "..", at(1, 2)).is_none());
        assert!(Token::new(TokenKind::Identifier, "FROM", at(1, 4)).is_none());
    }

    #[test]
    fn test_token_display() {
        let id = Token::classify("\"id\"", at(1, 4)).unwrap();
        let from = Token::classify("From", at(1, 4)).unwrap();
        assert_eq!(id.to_string(), "<ID, \"id\">");
        assert_eq!(from.to_string(), "<FROM>");
        assert_eq!(from.value(), None);
    }
}
