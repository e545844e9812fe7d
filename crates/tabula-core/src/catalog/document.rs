//! Catalog backed by a nested JSON document.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use super::{Catalog, Record, TablePath};

/// Errors that can occur while loading a document catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("failed to read catalog '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not a `database -> schema -> table -> rows` object.
    #[error("malformed catalog document: {0}")]
    Malformed(#[from] serde_json::Error),
}

type Tables = BTreeMap<String, Vec<Record>>;
type Schemas = BTreeMap<String, Tables>;

/// An in-memory catalog shaped like
/// `{"db": {"schema": {"table": [{"col": value}]}}}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentCatalog {
    databases: BTreeMap<String, Schemas>,
}

impl DocumentCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a catalog from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Malformed`] if the text is not a catalog document.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Builds a catalog from an already parsed JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Malformed`] if the value is not a catalog document.
    pub fn from_value(value: Value) -> Result<Self, CatalogError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Reads a catalog from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] if the file cannot be read and
    /// [`CatalogError::Malformed`] if it is not a catalog document.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Adds or replaces a table.
    pub fn insert_table(&mut self, path: TablePath, rows: Vec<Record>) {
        self.databases
            .entry(path.database)
            .or_default()
            .entry(path.schema)
            .or_default()
            .insert(path.table, rows);
    }
}

impl Catalog for DocumentCatalog {
    fn databases(&self) -> Vec<&str> {
        self.databases.keys().map(String::as_str).collect()
    }

    fn schemas(&self, database: &str) -> Option<Vec<&str>> {
        self.databases
            .get(database)
            .map(|schemas| schemas.keys().map(String::as_str).collect())
    }

    fn tables(&self, database: &str, schema: &str) -> Option<Vec<&str>> {
        self.databases
            .get(database)?
            .get(schema)
            .map(|tables| tables.keys().map(String::as_str).collect())
    }

    fn rows(&self, path: &TablePath) -> Option<&[Record]> {
        self.databases
            .get(&path.database)?
            .get(&path.schema)?
            .get(&path.table)
            .map(Vec::as_slice)
    }
}
