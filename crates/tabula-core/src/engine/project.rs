//! Column projection and result rows.

use core::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

use crate::ast::ColumnList;
use crate::catalog::Record;
use crate::error::{CompileError, Result};

/// One output row: requested columns in requested order.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    values: Vec<(String, Value)>,
}

impl Row {
    /// Value of a column, if it was requested.
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.values
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    /// Column names in order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Serialize for Row {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (name, value) in &self.values {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Rows produced by a statement.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl ResultSet {
    /// The requested column names.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl Serialize for ResultSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.rows)
    }
}

impl fmt::Display for ResultSet {
    /// One line per row, `column: value` pairs in requested order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            let fields: Vec<String> = row.iter().map(|(k, v)| format!("{k}: {v}")).collect();
            writeln!(f, "{{{}}}", fields.join(", "))?;
        }
        Ok(())
    }
}

/// Keeps only the requested columns of every record.
///
/// Fails on the first record missing a requested column; no partial result
/// is returned.
pub(crate) fn project(records: &[Record], columns: &ColumnList) -> Result<ResultSet> {
    let mut rows = Vec::with_capacity(records.len());
    for record in records {
        let mut values = Vec::with_capacity(columns.columns.len());
        for column in &columns.columns {
            let Some(value) = record.get(column.name()) else {
                return Err(CompileError::semantic(
                    format!("Unknown column '{}'", column.name()),
                    Some(column.locator()),
                ));
            };
            values.push((column.name().to_string(), value.clone()));
        }
        rows.push(Row { values });
    }
    Ok(ResultSet {
        columns: columns.names().into_iter().map(String::from).collect(),
        rows,
    })
}
