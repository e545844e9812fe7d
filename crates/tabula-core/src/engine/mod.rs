//! Statement execution against a catalog.
//!
//! The [`Engine`] runs the whole pipeline: lexer, parser, table resolution
//! and column projection. Each call is self-contained; the only state shared
//! between calls is the read-only catalog.

mod project;
mod resolve;
mod suggest;

use tracing::debug;

use crate::ast::Statement;
use crate::catalog::Catalog;
use crate::error::{CompileError, Result};
use crate::lexer::{Token, analyze};
use crate::parser::parse_statement;

pub use project::{ResultSet, Row};
pub use resolve::resolve_table;

/// Every pipeline stage reached while executing a statement.
#[derive(Debug)]
pub struct Trace {
    /// Tokens, if lexing succeeded.
    pub tokens: Option<Vec<Token>>,
    /// Syntax tree, if parsing succeeded.
    pub statement: Option<Statement>,
    /// The final outcome.
    pub result: Result<ResultSet>,
}

/// Executes statements against a catalog.
#[derive(Debug, Clone)]
pub struct Engine<C> {
    catalog: C,
}

impl<C: Catalog> Engine<C> {
    /// Creates an engine over the given catalog.
    #[must_use]
    pub const fn new(catalog: C) -> Self {
        Self { catalog }
    }

    #[must_use]
    pub const fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Lexes, parses and executes a statement.
    ///
    /// # Errors
    ///
    /// Returns the first lexical, syntactic or semantic error encountered.
    pub fn execute(&self, text: &str) -> Result<ResultSet> {
        let tokens = analyze(text)?;
        debug!(tokens = tokens.len(), "lexed statement");
        let statement = parse_statement(tokens)?;
        self.execute_statement(&statement)
    }

    /// Executes an already parsed statement.
    ///
    /// # Errors
    ///
    /// Returns [`CompileError::Semantic`] if the table cannot be resolved or
    /// a requested column is missing from any row.
    pub fn execute_statement(&self, statement: &Statement) -> Result<ResultSet> {
        let path = resolve_table(&self.catalog, &statement.from.table)?;
        let records = self.catalog.rows(&path).ok_or_else(|| {
            CompileError::logical(format!("resolved table '{path}' has no rows"))
        })?;
        let result = project::project(records, &statement.select.columns)?;
        debug!(table = %path, rows = result.len(), "executed statement");
        Ok(result)
    }

    /// Executes a statement, keeping the output of every stage.
    pub fn trace(&self, text: &str) -> Trace {
        let tokens = match analyze(text) {
            Ok(tokens) => tokens,
            Err(err) => {
                return Trace {
                    tokens: None,
                    statement: None,
                    result: Err(err),
                };
            }
        };
        let statement = match parse_statement(tokens.clone()) {
            Ok(statement) => statement,
            Err(err) => {
                return Trace {
                    tokens: Some(tokens),
                    statement: None,
                    result: Err(err),
                };
            }
        };
        let result = self.execute_statement(&statement);
        Trace {
            tokens: Some(tokens),
            statement: Some(statement),
            result,
        }
    }

    /// Completion candidates for a statement typed up to the cursor.
    ///
    /// A syntactic error caused by the statement ending early is expected and
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns lexical errors, syntactic errors before the end of input, and
    /// semantic errors resolving the table whose columns are suggested.
    pub fn suggest(&self, partial: &str) -> Result<Vec<String>> {
        suggest::suggest(&self.catalog, partial)
    }
}
