//! End-to-end scenarios over small purpose-built catalogs.

use serde_json::json;
use tabula_core::{DocumentCatalog, Engine, ErrorKind};

fn engine(document: serde_json::Value) -> Engine<DocumentCatalog> {
    Engine::new(DocumentCatalog::from_value(document).unwrap())
}

#[test]
fn schema_qualified_projection() {
    let engine = engine(json!({
        "main": {
            "public": {"users": [
                {"id": 1, "name": "ada", "role": "admin"},
                {"id": 2, "name": "grace", "role": "dev"}
            ]},
            "staging": {"users_tmp": []}
        }
    }));
    let result = engine
        .execute(r#"FROM "public"."users" SELECT "id" "name""#)
        .unwrap();
    assert_eq!(result.len(), 2);
    for row in result.rows() {
        assert_eq!(row.columns().collect::<Vec<_>>(), ["id", "name"]);
    }
    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        json!([{"id": 1, "name": "ada"}, {"id": 2, "name": "grace"}])
    );
}

#[test]
fn ambiguous_table_name() {
    let engine = engine(json!({
        "east": {"public": {"users": []}},
        "west": {"main": {"users": []}}
    }));
    let err = engine.execute(r#"FROM "users" SELECT "id""#).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Semantic);
    assert_eq!(
        err.message(),
        "Multiple tables with name 'users'. Schema name must be provided"
    );
}

#[test]
fn select_before_from_is_rejected() {
    let engine = engine(json!({"db": {"s": {"t": []}}}));
    let err = engine.execute(r#"SELECT "id" FROM "t""#).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Syntactic);
    assert_eq!(err.message(), "Unexpected token: SELECT (expected: FROM)");
    assert_eq!(err.locator().unwrap().start(), (1, 1));
}

#[test]
fn unterminated_quote_fails_at_end_of_input() {
    let engine = engine(json!({"db": {"s": {"users": []}}}));
    let text = r#"FROM "users SELECT "id""#;
    let err = engine.execute(text).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Lexical);
    let end = i64::try_from(text.chars().count()).unwrap() + 1;
    assert_eq!(err.locator().unwrap().start(), (1, 6));
    assert_eq!(err.locator().unwrap().end(), (1, end));
}

#[test]
fn suggestions_after_select() {
    let engine = engine(json!({
        "main": {"public": {"users": [{"id": 1, "name": "ada", "role": "admin"}]}}
    }));
    let suggestions = engine.suggest(r#"FROM "public"."users" SELECT "#).unwrap();
    assert_eq!(suggestions, ["id\"", "name\"", "role\""]);
}
