//! Statement parser implementation.

use core::iter::Peekable;
use std::vec::IntoIter;

use super::context::{ParseContext, ParseOutcome};
use crate::ast::{
    Column, ColumnList, FromClause, Identifier, NodeKind, SelectClause, Statement, TableRef,
};
use crate::error::{CompileError, Result};
use crate::lexer::{Token, TokenKind};

/// Most parts a table reference may have.
const MAX_TABLE_PARTS: usize = 3;

/// Recursive descent parser for `FROM <table> SELECT <columns>`.
///
/// ```text
/// Statement   := From Select
/// From        := 'FROM' Table
/// Table       := Id ('.' Id ('.' Id)?)?
/// Select      := 'SELECT' ColumnList
/// ColumnList  := Id+
/// ```
pub struct Parser {
    tokens: Peekable<IntoIter<Token>>,
    context: ParseContext,
}

impl Parser {
    /// Creates a new parser over the given tokens.
    #[must_use]
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens: tokens.into_iter().peekable(),
            context: ParseContext::default(),
        }
    }

    /// Parses a single statement, keeping track of how far it got.
    ///
    /// The returned context is populated even when parsing fails.
    #[must_use]
    pub fn parse(mut self) -> ParseOutcome {
        let result = self.parse_statement();
        ParseOutcome {
            result,
            context: self.context,
        }
    }

    /// Parses a single statement that must span every token.
    fn parse_statement(&mut self) -> Result<Statement> {
        let statement = self.parse_clauses()?;
        match self.tokens.next() {
            None => Ok(statement),
            Some(extra) => Err(CompileError::unexpected("end of input", &extra)),
        }
    }

    fn parse_clauses(&mut self) -> Result<Statement> {
        self.context.enter(NodeKind::Statement);
        let from = self.parse_from_clause()?;
        let select = self.parse_select_clause()?;
        Ok(Statement { from, select })
    }

    fn parse_from_clause(&mut self) -> Result<FromClause> {
        self.context.enter(NodeKind::From);
        let keyword = self.expect(TokenKind::From)?;
        let table = self.parse_table()?;
        Ok(FromClause { keyword, table })
    }

    fn parse_table(&mut self) -> Result<TableRef> {
        self.context.enter(NodeKind::Table);
        let mut table = TableRef::new(self.expect_identifier()?);
        self.context.table = Some(table.clone());

        while table.parts().len() < MAX_TABLE_PARTS && self.check(TokenKind::Dot) {
            let dot = self.expect(TokenKind::Dot)?;
            let part = self.expect_identifier()?;
            table.push(dot, part);
            self.context.table = Some(table.clone());
        }
        Ok(table)
    }

    fn parse_select_clause(&mut self) -> Result<SelectClause> {
        self.context.enter(NodeKind::Select);
        let keyword = self.expect(TokenKind::Select)?;
        let columns = self.parse_column_list()?;
        Ok(SelectClause { keyword, columns })
    }

    fn parse_column_list(&mut self) -> Result<ColumnList> {
        self.context.enter(NodeKind::ColumnList);
        let mut columns = vec![self.parse_column()?];
        while self.check(TokenKind::Identifier) {
            columns.push(self.parse_column()?);
        }
        Ok(ColumnList { columns })
    }

    fn parse_column(&mut self) -> Result<Column> {
        self.context.enter(NodeKind::Column);
        Ok(Column {
            identifier: self.expect_identifier()?,
        })
    }

    // --- Helper methods ---

    /// Checks if the next token is of the given kind.
    fn check(&mut self, kind: TokenKind) -> bool {
        self.tokens.peek().is_some_and(|t| t.is(kind))
    }

    /// Consumes the next token, which must be of the given kind.
    fn expect(&mut self, kind: TokenKind) -> Result<Token> {
        if let Some(token) = self.tokens.next_if(|t| t.is(kind)) {
            return Ok(token);
        }
        match self.tokens.peek() {
            None => Err(CompileError::unexpected_eof(kind)),
            Some(token) => Err(CompileError::unexpected(kind.as_str(), token)),
        }
    }

    /// Consumes an identifier token.
    fn expect_identifier(&mut self) -> Result<Identifier> {
        let token = self.expect(TokenKind::Identifier)?;
        Identifier::new(token)
            .ok_or_else(|| CompileError::logical("identifier token without a value"))
    }
}

/// Parses `tokens` into a statement, discarding the parse context.
///
/// # Errors
///
/// Returns [`CompileError::Syntactic`] at the first token that does not fit
/// the grammar, or with an end-of-input locator if tokens run out.
pub fn parse_statement(tokens: Vec<Token>) -> Result<Statement> {
    Parser::new(tokens).parse().result
}
