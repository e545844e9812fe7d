//! Table reference resolution.
//!
//! The shortest unambiguous reference wins: a bare table name must be unique
//! across the whole catalog, a `schema.table` pair needs a unique schema, and
//! a full path is looked up directly. Ambiguity is always an error.

use tracing::trace;

use crate::ast::{Identifier, TableRef};
use crate::catalog::{Catalog, TablePath};
use crate::error::{CompileError, Result};

/// Resolves a parsed table reference to a fully qualified path.
///
/// # Errors
///
/// Returns [`CompileError::Semantic`] when no table or more than one table
/// matches the reference.
pub fn resolve_table<C: Catalog + ?Sized>(catalog: &C, table: &TableRef) -> Result<TablePath> {
    let path = match table.parts() {
        [name] => by_name(catalog, name, table)?,
        [schema, name] => by_schema_and_name(catalog, schema, name, table)?,
        [database, schema, name] => by_full_path(catalog, database, schema, name)?,
        _ => return Err(CompileError::logical("Unrecognized table identifier")),
    };
    trace!(reference = %table, table = %path, "resolved table");
    Ok(path)
}

fn by_name<C: Catalog + ?Sized>(
    catalog: &C,
    name: &Identifier,
    table: &TableRef,
) -> Result<TablePath> {
    let mut matches = Vec::new();
    for database in catalog.databases() {
        for schema in catalog.schemas(database).unwrap_or_default() {
            let tables = catalog.tables(database, schema).unwrap_or_default();
            if tables.contains(&name.name()) {
                matches.push(TablePath::new(database, schema, name.name()));
            }
        }
    }
    match matches.len() {
        0 => Err(CompileError::semantic(
            format!("Unknown table '{}'", name.name()),
            Some(name.locator()),
        )),
        1 => Ok(matches.swap_remove(0)),
        _ => Err(CompileError::semantic(
            format!(
                "Multiple tables with name '{}'. Schema name must be provided",
                name.name()
            ),
            Some(table.locator()),
        )),
    }
}

fn by_schema_and_name<C: Catalog + ?Sized>(
    catalog: &C,
    schema: &Identifier,
    name: &Identifier,
    table: &TableRef,
) -> Result<TablePath> {
    let databases: Vec<&str> = catalog
        .databases()
        .into_iter()
        .filter(|database| {
            catalog
                .schemas(database)
                .is_some_and(|schemas| schemas.contains(&schema.name()))
        })
        .collect();

    let database = match databases.as_slice() {
        [] => {
            return Err(CompileError::semantic(
                format!("Unknown schema '{}'", schema.name()),
                Some(schema.locator()),
            ));
        }
        [database] => *database,
        _ => {
            return Err(CompileError::semantic(
                format!(
                    "Multiple schemas with name '{}'. Catalog name must be provided",
                    schema.name()
                ),
                Some(table.locator()),
            ));
        }
    };

    let exists = catalog
        .tables(database, schema.name())
        .is_some_and(|tables| tables.contains(&name.name()));
    if !exists {
        return Err(CompileError::semantic(
            format!(
                "Unknown table '{}' in schema '{}'",
                name.name(),
                schema.name()
            ),
            Some(name.locator()),
        ));
    }
    Ok(TablePath::new(database, schema.name(), name.name()))
}

fn by_full_path<C: Catalog + ?Sized>(
    catalog: &C,
    database: &Identifier,
    schema: &Identifier,
    name: &Identifier,
) -> Result<TablePath> {
    let Some(schemas) = catalog.schemas(database.name()) else {
        return Err(CompileError::semantic(
            format!("Unknown database '{}'", database.name()),
            Some(database.locator()),
        ));
    };
    if !schemas.contains(&schema.name()) {
        return Err(CompileError::semantic(
            format!(
                "Unknown schema '{}' in database '{}'",
                schema.name(),
                database.name()
            ),
            Some(schema.locator()),
        ));
    }
    let exists = catalog
        .tables(database.name(), schema.name())
        .is_some_and(|tables| tables.contains(&name.name()));
    if !exists {
        return Err(CompileError::semantic(
            format!(
                "Unknown table '{}' in schema '{}' of database '{}'",
                name.name(),
                schema.name(),
                database.name()
            ),
            Some(name.locator()),
        ));
    }
    Ok(TablePath::new(database.name(), schema.name(), name.name()))
}
