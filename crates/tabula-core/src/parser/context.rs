//! Parse progress, kept for callers that inspect incomplete statements.

use crate::ast::{NodeKind, Statement, TableRef};
use crate::error::Result;

/// How far a parse got before it finished or failed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseContext {
    current: Option<NodeKind>,
    previous: Option<NodeKind>,
    /// The table reference as parsed so far.
    pub(crate) table: Option<TableRef>,
}

impl ParseContext {
    /// Records entry into a grammar rule.
    pub(crate) fn enter(&mut self, kind: NodeKind) {
        self.previous = self.current.replace(kind);
    }

    /// The last grammar rule entered.
    #[must_use]
    pub const fn current(&self) -> Option<NodeKind> {
        self.current
    }

    /// The rule entered before [`ParseContext::current`].
    #[must_use]
    pub const fn previous(&self) -> Option<NodeKind> {
        self.previous
    }

    /// The table reference, complete or not, if one was started.
    #[must_use]
    pub const fn table(&self) -> Option<&TableRef> {
        self.table.as_ref()
    }

    /// The enclosing list the parse stopped in, if it stopped in one.
    ///
    /// Returns [`NodeKind::ColumnList`] while inside the column list and
    /// [`NodeKind::Table`] while inside the table reference.
    #[must_use]
    pub const fn stopped_in(&self) -> Option<NodeKind> {
        match (self.current, self.previous) {
            (Some(NodeKind::ColumnList), _)
            | (Some(NodeKind::Column), Some(NodeKind::ColumnList | NodeKind::Column)) => {
                Some(NodeKind::ColumnList)
            }
            (Some(NodeKind::Table), _) => Some(NodeKind::Table),
            _ => None,
        }
    }
}

/// The result of a parse together with its progress.
#[derive(Debug)]
pub struct ParseOutcome {
    pub result: Result<Statement>,
    pub context: ParseContext,
}
