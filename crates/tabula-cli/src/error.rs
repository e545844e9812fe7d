//! Error types for the command-line front end.

use tabula_core::{CatalogError, CompileError};

/// Errors that end a CLI invocation.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The catalog could not be loaded.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// The statement was rejected by the pipeline.
    #[error(transparent)]
    Compile(#[from] CompileError),

    /// Neither an argument nor standard input supplied a statement.
    #[error("no statement given (pass one as an argument or on stdin)")]
    EmptyStatement,

    /// IO error reading standard input.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Result serialization failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
