//! Completion candidates for a statement typed up to the cursor.

use tracing::debug;

use super::resolve::resolve_table;
use crate::ast::NodeKind;
use crate::catalog::{Catalog, TablePath};
use crate::error::{CompileError, Result};
use crate::lexer::analyze;
use crate::parser::Parser;

/// Splits off a trailing quoted identifier the user has not closed yet.
///
/// Returns the text before its opening quote and the typed part after it.
fn split_open_identifier(partial: &str) -> (&str, Option<&str>) {
    if partial.matches('"').count().is_multiple_of(2) {
        return (partial, None);
    }
    match partial.rfind('"') {
        Some(quote) => (&partial[..quote], Some(&partial[quote + 1..])),
        None => (partial, None),
    }
}

/// Whether `path` continues the table reference typed so far.
///
/// The typed parts must match consecutive segments of the path, and the
/// open prefix must start the segment right after them.
fn continues(path: &TablePath, typed: &[&str], prefix: &str) -> bool {
    let segments = path.segments();
    if typed.len() >= segments.len() {
        return false;
    }
    (0..segments.len() - typed.len()).any(|offset| {
        segments[offset..offset + typed.len()] == *typed
            && segments[offset + typed.len()].starts_with(prefix)
    })
}

/// Computes completion candidates for `partial`.
///
/// Inside the column list, every column of the already parsed table is
/// offered as `name"`. Inside the table reference, every matching
/// `database.schema.table` is offered. Anywhere else there are none.
pub(crate) fn suggest<C: Catalog + ?Sized>(catalog: &C, partial: &str) -> Result<Vec<String>> {
    let (complete, open) = split_open_identifier(partial);
    let prefix = open.unwrap_or_default();

    let outcome = Parser::new(analyze(complete)?).parse();
    if let Err(err) = outcome.result {
        if !err.is_unexpected_eof() {
            return Err(err);
        }
    }
    let context = outcome.context;
    debug!(
        current = ?context.current(),
        previous = ?context.previous(),
        prefix,
        "computing suggestions"
    );

    match context.stopped_in() {
        Some(NodeKind::ColumnList) => {
            let table = context
                .table()
                .ok_or_else(|| CompileError::logical("column list parsed without a table"))?;
            let path = resolve_table(catalog, table)?;
            Ok(catalog
                .columns(&path)
                .into_iter()
                .filter(|column| column.starts_with(prefix))
                .map(|column| format!("{column}\""))
                .collect())
        }
        Some(NodeKind::Table) => {
            let typed = context.table().map(|t| t.names()).unwrap_or_default();
            Ok(catalog
                .table_paths()
                .into_iter()
                .filter(|path| continues(path, &typed, prefix))
                .map(|path| path.to_string())
                .collect())
        }
        _ => Ok(Vec::new()),
    }
}
