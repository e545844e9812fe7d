//! Abstract Syntax Tree (AST) types for statements.

mod statement;

pub use statement::{
    Column, ColumnList, FromClause, Identifier, NodeKind, SelectClause, Statement, TableRef,
};
