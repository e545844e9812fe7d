//! Tests for statement execution: projection and result shape.

mod common;
use common::*;

use serde_json::json;

#[test]
fn execute_single_column() {
    let result = execute(r#"FROM "contacts" SELECT "phone""#);
    assert_eq!(result.len(), 1);
    assert_eq!(result.rows()[0].get("phone"), Some(&json!("555")));
}

#[test]
fn execute_keeps_row_count_and_order() {
    let result = execute(r#"FROM "shop"."public"."users" SELECT "email" "id""#);
    assert_eq!(result.len(), 3);
    assert_eq!(result.columns(), ["email", "id"]);
    let ids: Vec<_> = result.rows().iter().map(|r| r.get("id").cloned()).collect();
    assert_eq!(ids, [Some(json!(1)), Some(json!(2)), Some(json!(3))]);
}

#[test]
fn execute_repeated_column() {
    let result = execute(r#"FROM "contacts" SELECT "id" "id""#);
    assert_eq!(result.rows()[0].len(), 2);
}

#[test]
fn execute_keywords_any_case() {
    let result = execute("from \"archive\".\"orders\"\n\tsElEcT \"total\"");
    assert_eq!(result.rows()[0].get("total"), Some(&json!(1.0)));
}

#[test]
fn execute_multiline_statement() {
    let result = execute("FROM\n  \"crm\".\"accounts\".\"users\"\nSELECT\n  \"name\"\n");
    assert_eq!(result.rows()[0].get("name"), Some(&json!("root")));
}

#[test]
fn execute_spaced_dots() {
    let result = execute(r#"FROM "archive" . "orders" SELECT "id""#);
    assert_eq!(result.len(), 1);
}

#[test]
fn execute_statement_twice_is_stable() {
    let statement = parse(r#"FROM "shop"."public"."orders" SELECT "total""#);
    let engine = engine();
    let first = engine.execute_statement(&statement).unwrap();
    let second = engine.execute_statement(&statement).unwrap();
    assert_eq!(first, second);
}

#[test]
fn execute_serializes_as_ordered_objects() {
    let result = execute(r#"FROM "shop"."public"."orders" SELECT "total" "id""#);
    assert_eq!(
        serde_json::to_string(&result).unwrap(),
        r#"[{"total":12.5,"id":10},{"total":99.0,"id":11}]"#
    );
}
