#![allow(dead_code)]

use serde_json::json;
use tabula_core::{CompileError, DocumentCatalog, Engine, ResultSet, Statement, analyze, parse_statement};

/// Two databases sharing a `users` table name and a `public` schema name.
pub fn catalog() -> DocumentCatalog {
    DocumentCatalog::from_value(json!({
        "shop": {
            "public": {
                "users": [
                    {"id": 1, "name": "ada", "email": "ada@shop.test"},
                    {"id": 2, "name": "grace", "email": "grace@shop.test"},
                    {"id": 3, "name": "linus", "email": "linus@shop.test"}
                ],
                "orders": [
                    {"id": 10, "user_id": 1, "total": 12.5},
                    {"id": 11, "user_id": 3, "total": 99.0}
                ]
            },
            "archive": {
                "orders": [{"id": 1, "user_id": 2, "total": 1.0}]
            }
        },
        "crm": {
            "public": {
                "contacts": [{"id": 1, "phone": "555"}]
            },
            "accounts": {
                "users": [{"id": 7, "name": "root"}]
            }
        }
    }))
    .unwrap_or_else(|e| panic!("fixture catalog is invalid: {e}"))
}

pub fn engine() -> Engine<DocumentCatalog> {
    Engine::new(catalog())
}

pub fn execute(text: &str) -> ResultSet {
    engine()
        .execute(text)
        .unwrap_or_else(|e| panic!("Failed to execute: {text}\nError: {e}"))
}

pub fn execute_err(text: &str) -> CompileError {
    engine()
        .execute(text)
        .expect_err(&format!("Expected error for: {text}"))
}

pub fn parse(text: &str) -> Statement {
    analyze(text)
        .and_then(parse_statement)
        .unwrap_or_else(|e| panic!("Failed to parse: {text}\nError: {e}"))
}

pub fn suggest(partial: &str) -> Vec<String> {
    engine()
        .suggest(partial)
        .unwrap_or_else(|e| panic!("Failed to suggest for: {partial}\nError: {e}"))
}
