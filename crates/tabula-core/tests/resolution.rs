//! Tests for table resolution against the shared fixture catalog.

mod common;
use common::*;

use tabula_core::{ErrorKind, TablePath, resolve_table};

fn resolve(reference: &str) -> Result<TablePath, tabula_core::CompileError> {
    let statement = parse(&format!("FROM {reference} SELECT \"id\""));
    resolve_table(&catalog(), &statement.from.table)
}

#[test]
fn resolve_unique_name() {
    assert_eq!(
        resolve(r#""contacts""#).unwrap(),
        TablePath::new("crm", "public", "contacts")
    );
}

#[test]
fn resolve_ambiguous_names_fail_closed() {
    for name in ["users", "orders"] {
        let err = resolve(&format!("\"{name}\"")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Semantic);
        assert_eq!(
            err.message(),
            format!("Multiple tables with name '{name}'. Schema name must be provided")
        );
    }
}

#[test]
fn resolve_every_unique_name() {
    use tabula_core::Catalog;

    let catalog = catalog();
    let paths = catalog.table_paths();
    for path in &paths {
        let same_name = paths.iter().filter(|p| p.table == path.table).count();
        let resolved = resolve(&format!("\"{}\"", path.table));
        if same_name == 1 {
            assert_eq!(resolved.as_ref(), Ok(path));
        } else {
            assert!(resolved.is_err());
        }
    }
}

#[test]
fn resolve_schema_and_name() {
    assert_eq!(
        resolve(r#""archive"."orders""#).unwrap(),
        TablePath::new("shop", "archive", "orders")
    );
    assert_eq!(
        resolve(r#""accounts"."users""#).unwrap(),
        TablePath::new("crm", "accounts", "users")
    );
}

#[test]
fn resolve_ambiguous_schema() {
    let err = resolve(r#""public"."users""#).unwrap_err();
    assert_eq!(
        err.message(),
        "Multiple schemas with name 'public'. Catalog name must be provided"
    );
}

#[test]
fn resolve_full_path() {
    assert_eq!(
        resolve(r#""shop"."public"."users""#).unwrap(),
        TablePath::new("shop", "public", "users")
    );
    assert_eq!(
        resolve(r#""crm"."public"."users""#).unwrap_err().message(),
        "Unknown table 'users' in schema 'public' of database 'crm'"
    );
}

#[test]
fn resolve_names_are_case_sensitive() {
    assert_eq!(
        resolve(r#""Contacts""#).unwrap_err().message(),
        "Unknown table 'Contacts'"
    );
}
