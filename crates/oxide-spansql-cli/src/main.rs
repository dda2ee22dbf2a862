//! spansql CLI
//!
//! Parses Cloud Spanner DDL or a query and prints the resulting tree.

use std::fmt::Debug;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use oxide_spansql::{parse_ddl, parse_ddl_stmt, parse_query};

/// Parse Cloud Spanner DDL and queries.
#[derive(Parser)]
#[command(name = "spansql")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output format.
    #[arg(short, long, value_enum, env = "SPANSQL_FORMAT", default_value_t = Format::Json)]
    format: Format,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Pretty-printed JSON.
    Json,
    /// Rust debug representation.
    Debug,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Parse a DDL file: statements separated by `;`.
    Ddl {
        /// Input file; `-` or absent reads stdin.
        input: Option<PathBuf>,
    },

    /// Parse exactly one DDL statement.
    Stmt {
        /// Input file; `-` or absent reads stdin.
        input: Option<PathBuf>,
    },

    /// Parse one query.
    Query {
        /// Input file; `-` or absent reads stdin.
        input: Option<PathBuf>,
    },
}

impl Commands {
    fn input(&self) -> Option<&Path> {
        match self {
            Self::Ddl { input } | Self::Stmt { input } | Self::Query { input } => input.as_deref(),
        }
    }
}

fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}

fn render<T: Serialize + Debug>(tree: &T, format: Format) -> anyhow::Result<String> {
    match format {
        Format::Json => Ok(serde_json::to_string_pretty(tree)?),
        Format::Debug => Ok(format!("{tree:#?}")),
    }
}

/// Runs the entry point selected by `command` over `text`.
fn run(command: &Commands, text: &str, format: Format) -> anyhow::Result<String> {
    match command {
        Commands::Ddl { .. } => {
            let ddl = parse_ddl(text)?;
            debug!(statements = ddl.statements.len(), "parsed DDL");
            render(&ddl, format)
        }
        Commands::Stmt { .. } => render(&parse_ddl_stmt(text)?, format),
        Commands::Query { .. } => render(&parse_query(text)?, format),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::TRACE
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let input = cli.command.input();
    let source = input.map_or_else(|| String::from("stdin"), |p| p.display().to_string());
    let text = read_input(input)?;
    debug!(source = %source, bytes = text.len(), "read input");

    let output = run(&cli.command, &text, cli.format)
        .with_context(|| format!("failed to parse {source}"))?;
    println!("{output}");
    Ok(())
}
