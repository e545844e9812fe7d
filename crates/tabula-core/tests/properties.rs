//! Structural properties of the lexer and parser over generated statements.

mod common;
use common::*;

use tabula_core::{Token, TokenKind, analyze};

/// Statements built from valid lexemes joined by single spaces.
fn generated_statements() -> Vec<Vec<&'static str>> {
    let tables: [&[&str]; 3] = [
        &["\"t\""],
        &["\"s\"", ".", "\"t\""],
        &["\"d\"", ".", "\"s\"", ".", "\"t\""],
    ];
    let columns: [&[&str]; 3] = [&["\"a\""], &["\"a\"", "\"b b\""], &["\"x\"", "\"\"", "\"z\""]];
    let mut statements = Vec::new();
    for (from, select) in [("FROM", "SELECT"), ("from", "select"), ("From", "SeLeCt")] {
        for table in tables {
            for cols in columns {
                let mut lexemes = vec![from];
                lexemes.extend_from_slice(table);
                lexemes.push(select);
                lexemes.extend_from_slice(cols);
                statements.push(lexemes);
            }
        }
    }
    statements
}

#[test]
fn tokenization_reproduces_lexemes() {
    for lexemes in generated_statements() {
        let text = lexemes.join(" ");
        let tokens = analyze(&text).unwrap();
        let got: Vec<&str> = tokens.iter().map(Token::lexeme).collect();
        assert_eq!(got, lexemes, "lexemes differ for: {text}");
    }
}

#[test]
fn locators_are_monotonic() {
    for lexemes in generated_statements() {
        let text = lexemes.join("\n ");
        let tokens = analyze(&text).unwrap();
        for pair in tokens.windows(2) {
            assert!(
                pair[0].locator().end() <= pair[1].locator().start(),
                "{} overlaps {} in: {text}",
                pair[0],
                pair[1]
            );
        }
    }
}

#[test]
fn parse_is_idempotent() {
    for lexemes in generated_statements() {
        let text = lexemes.join(" ");
        let first = parse(&text);
        let second = parse(&text);
        assert_eq!(first, second);
        assert_eq!(first.to_string(), second.to_string());
    }
}

#[test]
fn dots_only_join_table_parts() {
    for lexemes in generated_statements() {
        let tokens = analyze(&lexemes.join(" ")).unwrap();
        let select = tokens.iter().position(|t| t.is(TokenKind::Select)).unwrap();
        assert!(tokens[select..].iter().all(|t| !t.is(TokenKind::Dot)));
    }
}
