//! Catalog access.
//!
//! A catalog is a `database -> schema -> table -> rows` hierarchy. The
//! resolver only needs the structural lookups of [`Catalog`]; how tables are
//! stored is up to the implementation.

mod document;

use core::fmt;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

pub use document::{CatalogError, DocumentCatalog};

/// A stored row: column name to value.
pub type Record = serde_json::Map<String, Value>;

/// Fully qualified location of a table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TablePath {
    pub database: String,
    pub schema: String,
    pub table: String,
}

impl TablePath {
    #[must_use]
    pub fn new(
        database: impl Into<String>,
        schema: impl Into<String>,
        table: impl Into<String>,
    ) -> Self {
        Self {
            database: database.into(),
            schema: schema.into(),
            table: table.into(),
        }
    }

    /// The three segments, outermost first.
    #[must_use]
    pub fn segments(&self) -> [&str; 3] {
        [&self.database, &self.schema, &self.table]
    }
}

impl fmt::Display for TablePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.database, self.schema, self.table)
    }
}

/// Read-only view of a table store.
///
/// Implementations are never written to by the resolver; sharing one
/// between threads only requires the implementation to be `Sync`.
pub trait Catalog {
    /// Every database name.
    fn databases(&self) -> Vec<&str>;

    /// Schema names of a database, or `None` if it does not exist.
    fn schemas(&self, database: &str) -> Option<Vec<&str>>;

    /// Table names of a schema, or `None` if the schema does not exist.
    fn tables(&self, database: &str, schema: &str) -> Option<Vec<&str>>;

    /// Rows of a table, in storage order.
    fn rows(&self, path: &TablePath) -> Option<&[Record]>;

    /// Every table in the catalog.
    fn table_paths(&self) -> Vec<TablePath> {
        let mut paths = Vec::new();
        for database in self.databases() {
            for schema in self.schemas(database).unwrap_or_default() {
                for table in self.tables(database, schema).unwrap_or_default() {
                    paths.push(TablePath::new(database, schema, table));
                }
            }
        }
        paths
    }

    /// Column names seen across a table's rows, in first-seen order.
    fn columns(&self, path: &TablePath) -> Vec<&str> {
        let mut columns: Vec<&str> = Vec::new();
        for record in self.rows(path).unwrap_or_default() {
            for key in record.keys() {
                if !columns.contains(&key.as_str()) {
                    columns.push(key);
                }
            }
        }
        columns
    }
}

impl<C: Catalog + ?Sized> Catalog for &C {
    fn databases(&self) -> Vec<&str> {
        (**self).databases()
    }

    fn schemas(&self, database: &str) -> Option<Vec<&str>> {
        (**self).schemas(database)
    }

    fn tables(&self, database: &str, schema: &str) -> Option<Vec<&str>> {
        (**self).tables(database, schema)
    }

    fn rows(&self, path: &TablePath) -> Option<&[Record]> {
        (**self).rows(path)
    }
}

impl<C: Catalog + ?Sized> Catalog for Arc<C> {
    fn databases(&self) -> Vec<&str> {
        (**self).databases()
    }

    fn schemas(&self, database: &str) -> Option<Vec<&str>> {
        (**self).schemas(database)
    }

    fn tables(&self, database: &str, schema: &str) -> Option<Vec<&str>> {
        (**self).tables(database, schema)
    }

    fn rows(&self, path: &TablePath) -> Option<&[Record]> {
        (**self).rows(path)
    }
}
