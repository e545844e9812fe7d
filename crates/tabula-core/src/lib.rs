//! # tabula-core
//!
//! Front-end pipeline for a minimal `FROM <table> SELECT <columns>` query
//! language over a hierarchical `database -> schema -> table` catalog.
//!
//! This crate provides:
//! - A lexer that stamps every token with its line/column span
//! - A recursive descent parser producing a typed AST, with a parse context
//!   that survives failures
//! - A resolver that accepts the shortest unambiguous table reference and
//!   rejects ambiguous ones
//! - Partial-parse completion candidates for editor tooling
//!
//! ## Executing statements
//!
//! ```rust
//! use serde_json::json;
//! use tabula_core::{DocumentCatalog, Engine};
//!
//! let catalog = DocumentCatalog::from_value(json!({
//!     "app": {"public": {"users": [{"id": 1, "name": "ada"}]}}
//! }))
//! .unwrap();
//! let engine = Engine::new(catalog);
//!
//! let result = engine
//!     .execute(r#"FROM "public"."users" SELECT "name" "id""#)
//!     .unwrap();
//! assert_eq!(result.columns(), ["name", "id"]);
//! assert_eq!(result.rows()[0].get("name"), Some(&json!("ada")));
//! ```
//!
//! ## Diagnostics
//!
//! Every failure is a [`CompileError`] carrying a message and, where one
//! exists, the [`LexemeLocator`] of the offending text:
//!
//! ```rust
//! use tabula_core::{DocumentCatalog, Engine, ErrorKind};
//!
//! let engine = Engine::new(DocumentCatalog::new());
//! let err = engine.execute(r#"SELECT "id" FROM "t""#).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::Syntactic);
//! assert_eq!(err.locator().unwrap().start(), (1, 1));
//! ```

pub mod ast;
pub mod catalog;
pub mod engine;
pub mod error;
pub mod lexer;
pub mod parser;

pub use ast::{NodeKind, Statement, TableRef};
pub use catalog::{Catalog, CatalogError, DocumentCatalog, Record, TablePath};
pub use engine::{Engine, ResultSet, Row, Trace, resolve_table};
pub use error::{CompileError, ErrorKind};
pub use lexer::{LexemeLocator, Lexer, Token, TokenKind, analyze};
pub use parser::{ParseContext, ParseOutcome, Parser, parse_statement};
