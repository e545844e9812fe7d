//! Source location tracking for tokens and AST nodes.

use core::fmt;

use thiserror::Error;

/// Rejected locator construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LocatorError {
    /// An index below the end-of-input sentinel.
    #[error("invalid index '{0}'")]
    InvalidIndex(i64),
}

/// A `(line, column)` span in the statement text.
///
/// Lines and columns are 1-based. The start is inclusive and the end column
/// points just past the last character of the lexeme. `-1` is reserved for
/// positions that do not exist, see [`LexemeLocator::END_OF_INPUT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LexemeLocator {
    line_start: i64,
    column_start: i64,
    line_end: i64,
    column_end: i64,
}

impl LexemeLocator {
    /// Locator reported when the token stream ended prematurely.
    pub const END_OF_INPUT: Self = Self {
        line_start: -1,
        column_start: -1,
        line_end: -1,
        column_end: -1,
    };

    /// Creates a locator, rejecting any index below `-1`.
    ///
    /// # Errors
    ///
    /// Returns [`LocatorError::InvalidIndex`] naming the first bad index.
    pub const fn new(
        line_start: i64,
        column_start: i64,
        line_end: i64,
        column_end: i64,
    ) -> Result<Self, LocatorError> {
        let indices = [line_start, column_start, line_end, column_end];
        let mut i = 0;
        while i < indices.len() {
            if indices[i] < -1 {
                return Err(LocatorError::InvalidIndex(indices[i]));
            }
            i += 1;
        }
        Ok(Self {
            line_start,
            column_start,
            line_end,
            column_end,
        })
    }

    /// Builds a locator from cursor positions tracked by the lexer.
    pub(crate) fn from_positions(start: (usize, usize), end: (usize, usize)) -> Self {
        let index = |v: usize| i64::try_from(v).unwrap_or(i64::MAX);
        Self {
            line_start: index(start.0),
            column_start: index(start.1),
            line_end: index(end.0),
            column_end: index(end.1),
        }
    }

    #[must_use]
    pub const fn line_start(&self) -> i64 {
        self.line_start
    }

    #[must_use]
    pub const fn column_start(&self) -> i64 {
        self.column_start
    }

    #[must_use]
    pub const fn line_end(&self) -> i64 {
        self.line_end
    }

    #[must_use]
    pub const fn column_end(&self) -> i64 {
        self.column_end
    }

    /// Returns the `(line, column)` pair where the span starts.
    #[must_use]
    pub const fn start(&self) -> (i64, i64) {
        (self.line_start, self.column_start)
    }

    /// Returns the `(line, column)` pair where the span ends.
    #[must_use]
    pub const fn end(&self) -> (i64, i64) {
        (self.line_end, self.column_end)
    }

    /// Returns true for the end-of-input sentinel.
    #[must_use]
    pub fn is_end_of_input(&self) -> bool {
        *self == Self::END_OF_INPUT
    }

    /// Merges two locators into one that covers both.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        let (line_start, column_start) = self.start().min(other.start());
        let (line_end, column_end) = self.end().max(other.end());
        Self {
            line_start,
            column_start,
            line_end,
            column_end,
        }
    }

    /// Smallest locator covering every given locator.
    ///
    /// End-of-input sentinels carry no position and are skipped. Returns
    /// `None` when nothing is left to cover.
    pub fn covering<I>(locators: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        locators
            .into_iter()
            .filter(|locator| !locator.is_end_of_input())
            .reduce(Self::merge)
    }
}

impl fmt::Display for LexemeLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_end_of_input() {
            write!(f, "at end of input")
        } else if self.line_start == self.line_end {
            write!(
                f,
                "at line {} from column {} to column {}",
                self.line_start, self.column_start, self.column_end
            )
        } else {
            write!(
                f,
                "from line {}, column {} to line {}, column {}",
                self.line_start, self.column_start, self.line_end, self.column_end
            )
        }
    }
}
