//! Statement AST types.

use core::fmt;

use crate::lexer::{LexemeLocator, Token};

/// Nonterminal categories of the grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Statement,
    Select,
    From,
    ColumnList,
    Column,
    Table,
}

impl NodeKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Statement => "STATEMENT",
            Self::Select => "SELECT",
            Self::From => "FROM",
            Self::ColumnList => "COLUMN LIST",
            Self::Column => "COLUMN",
            Self::Table => "TABLE",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An identifier token in name position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    token: Token,
}

impl Identifier {
    /// Wraps an identifier token; returns `None` for any other kind.
    #[must_use]
    pub fn new(token: Token) -> Option<Self> {
        token.value().is_some().then_some(Self { token })
    }

    /// The unquoted name.
    #[must_use]
    pub fn name(&self) -> &str {
        // Construction guarantees an identifier token.
        self.token.value().unwrap_or_default()
    }

    #[must_use]
    pub const fn token(&self) -> &Token {
        &self.token
    }

    #[must_use]
    pub const fn locator(&self) -> LexemeLocator {
        self.token.locator()
    }
}

/// `FROM <table> SELECT <columns>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub from: FromClause,
    pub select: SelectClause,
}

impl Statement {
    #[must_use]
    pub fn locator(&self) -> LexemeLocator {
        self.from.locator().merge(self.select.locator())
    }
}

/// `FROM <table>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FromClause {
    pub keyword: Token,
    pub table: TableRef,
}

impl FromClause {
    #[must_use]
    pub fn locator(&self) -> LexemeLocator {
        self.keyword.locator().merge(self.table.locator())
    }
}

/// A table reference of one to three dot-separated parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRef {
    parts: Vec<Identifier>,
    dots: Vec<Token>,
}

impl TableRef {
    /// Starts a reference from its first part.
    #[must_use]
    pub fn new(first: Identifier) -> Self {
        Self {
            parts: vec![first],
            dots: Vec::new(),
        }
    }

    /// Appends `.part`.
    pub fn push(&mut self, dot: Token, part: Identifier) {
        self.dots.push(dot);
        self.parts.push(part);
    }

    #[must_use]
    pub fn parts(&self) -> &[Identifier] {
        &self.parts
    }

    /// The unquoted names of every part, in source order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.parts.iter().map(Identifier::name).collect()
    }

    #[must_use]
    pub fn locator(&self) -> LexemeLocator {
        let first = self.parts[0].locator();
        self.parts
            .iter()
            .map(Identifier::locator)
            .fold(first, LexemeLocator::merge)
    }

    /// Parts and dots interleaved in source order.
    fn tokens(&self) -> Vec<&Token> {
        let mut tokens = Vec::with_capacity(self.parts.len() + self.dots.len());
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                tokens.push(&self.dots[i - 1]);
            }
            tokens.push(part.token());
        }
        tokens
    }
}

impl fmt::Display for TableRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            f.write_str(part.token().lexeme())?;
        }
        Ok(())
    }
}

/// `SELECT <columns>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectClause {
    pub keyword: Token,
    pub columns: ColumnList,
}

impl SelectClause {
    #[must_use]
    pub fn locator(&self) -> LexemeLocator {
        self.keyword.locator().merge(self.columns.locator())
    }
}

/// One or more columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnList {
    pub columns: Vec<Column>,
}

impl ColumnList {
    /// The unquoted column names, in requested order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.identifier.name()).collect()
    }

    #[must_use]
    pub fn locator(&self) -> LexemeLocator {
        LexemeLocator::covering(self.columns.iter().map(Column::locator))
            .unwrap_or(LexemeLocator::END_OF_INPUT)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub identifier: Identifier,
}

impl Column {
    #[must_use]
    pub fn name(&self) -> &str {
        self.identifier.name()
    }

    #[must_use]
    pub const fn locator(&self) -> LexemeLocator {
        self.identifier.locator()
    }
}

/// Untyped view of the tree, used for rendering.
enum TreeNode<'a> {
    Branch(NodeKind, Vec<TreeNode<'a>>),
    Leaf(&'a Token),
}

impl<'a> TreeNode<'a> {
    fn of(statement: &'a Statement) -> Self {
        let table = Self::Branch(
            NodeKind::Table,
            statement
                .from
                .table
                .tokens()
                .into_iter()
                .map(Self::Leaf)
                .collect(),
        );
        let columns = Self::Branch(
            NodeKind::ColumnList,
            statement
                .select
                .columns
                .columns
                .iter()
                .map(|c| Self::Branch(NodeKind::Column, vec![Self::Leaf(c.identifier.token())]))
                .collect(),
        );
        Self::Branch(
            NodeKind::Statement,
            vec![
                Self::Branch(
                    NodeKind::From,
                    vec![Self::Leaf(&statement.from.keyword), table],
                ),
                Self::Branch(
                    NodeKind::Select,
                    vec![Self::Leaf(&statement.select.keyword), columns],
                ),
            ],
        )
    }

    fn render(&self, f: &mut fmt::Formatter<'_>, prefix: &str, connector: &str) -> fmt::Result {
        match self {
            Self::Leaf(token) => writeln!(f, "{prefix}{connector}{token}"),
            Self::Branch(kind, children) => {
                writeln!(f, "{prefix}{connector}{kind}")?;
                let child_prefix = match connector {
                    "" => String::from(prefix),
                    "└── " => format!("{prefix}    "),
                    _ => format!("{prefix}│   "),
                };
                for (i, child) in children.iter().enumerate() {
                    let last = i + 1 == children.len();
                    child.render(f, &child_prefix, if last { "└── " } else { "├── " })?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for Statement {
    /// Renders the syntax tree, one node per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        TreeNode::of(self).render(f, "", "")
    }
}
