//! tabula CLI
//!
//! Runs `FROM ... SELECT ...` statements against a JSON document catalog.

mod error;

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{Level, debug, info};
use tracing_subscriber::FmtSubscriber;

use tabula_core::{Catalog, DocumentCatalog, Engine, Token, analyze};

use crate::error::{CliError, Result};

/// Query a hierarchical table catalog.
#[derive(Parser)]
#[command(name = "tabula")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Catalog document (JSON: database -> schema -> table -> rows).
    #[arg(short, long, env = "TABULA_CATALOG", default_value = "catalog.json")]
    catalog: PathBuf,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Execute a statement and print the rows as JSON.
    Run {
        /// Statement text (read from stdin if omitted).
        statement: Option<String>,

        /// Print the tokens and syntax tree before the results.
        #[arg(long)]
        trace: bool,
    },

    /// Print completion candidates for a statement typed up to the cursor.
    Suggest {
        /// Partial statement text (read from stdin if omitted).
        partial: Option<String>,
    },

    /// Print the tokens of a statement with their locations.
    Tokens {
        /// Statement text (read from stdin if omitted).
        statement: Option<String>,
    },

    /// List every table in the catalog.
    Tables,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match run(cli) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(CliError::Compile(err)) => {
            eprintln!("error: {err}");
            Ok(ExitCode::FAILURE)
        }
        Err(other) => Err(other.into()),
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Run { statement, trace } => {
            let text = statement_text(statement)?;
            let engine = load_engine(&cli.catalog)?;
            if trace {
                run_traced(&engine, &text)?;
            } else {
                let result = engine.execute(&text)?;
                println!("{}", serde_json::to_string_pretty(&result)?);
                info!("{} row(s)", result.len());
            }
        }

        Commands::Suggest { partial } => {
            let text = input_text(partial)?;
            for suggestion in load_engine(&cli.catalog)?.suggest(&text)? {
                println!("{suggestion}");
            }
        }

        Commands::Tokens { statement } => {
            let text = statement_text(statement)?;
            print_tokens(&analyze(&text)?);
        }

        Commands::Tables => {
            for path in load_engine(&cli.catalog)?.catalog().table_paths() {
                println!("{path}");
            }
        }
    }

    Ok(())
}

fn load_engine(path: &Path) -> Result<Engine<DocumentCatalog>> {
    debug!(path = %path.display(), "loading catalog");
    Ok(Engine::new(DocumentCatalog::from_path(path)?))
}

/// Prints every pipeline stage, stopping at the one that failed.
fn run_traced(engine: &Engine<DocumentCatalog>, text: &str) -> Result<()> {
    println!("STATEMENT\n\n{text}\n");
    let trace = engine.trace(text);
    if let Some(tokens) = &trace.tokens {
        let rendered: Vec<String> = tokens.iter().map(ToString::to_string).collect();
        println!("TOKENS\n\n{}\n", rendered.join(" "));
    }
    if let Some(statement) = &trace.statement {
        println!("SYNTAX TREE\n\n{statement}");
    }
    let result = trace.result?;
    println!("RESULTS\n\n{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

fn print_tokens(tokens: &[Token]) {
    for token in tokens {
        println!("{token}\t{}", token.locator());
    }
}

/// Takes the text from the argument, or from stdin without its final line
/// ending.
fn input_text(argument: Option<String>) -> Result<String> {
    match argument {
        Some(text) => Ok(text),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(strip_line_ending(buffer))
        }
    }
}

fn strip_line_ending(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}

/// Like [`input_text`], rejecting blank statements.
fn statement_text(argument: Option<String>) -> Result<String> {
    let text = input_text(argument)?;
    if text.trim().is_empty() {
        return Err(CliError::EmptyStatement);
    }
    Ok(text)
}
