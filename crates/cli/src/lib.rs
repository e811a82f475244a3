//! # Sqlpad CLI
//!
//! Command-line interface for Sqlpad.
//!
//! The same schema model and diagram engine the desktop app uses, without
//! the window:
//!
//! ## Commands
//!
//! - `inspect` - Print the schema of a SQLite database as JSON
//! - `validate` - Check a schema JSON file for errors and warnings
//! - `render` - Render a schema diagram as SVG
//! - `query` - Run SQL against a database and print the result
//!

use anyhow::{Context, Result};
use clap::{ArgGroup, Args, Parser, Subcommand};
use colored::Colorize;
use sqlpad_core::{DiagramConfig, NoopSelectHandler};
use sqlpad_diagram::{SchemaDiagram, render_svg};
use sqlpad_schema::serialization::schema_to_compact_json;
use sqlpad_schema::{
    Schema, SchemaSource, execute_query, load_schema, open_database, schema_to_json,
    validate_schema,
};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// CLI version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// CLI name
pub const NAME: &str = "sqlpad-cli";

// ============================================================================
// Arguments
// ============================================================================

/// Sqlpad - inspect SQLite schemas and render schema diagrams
#[derive(Parser, Debug)]
#[command(name = "sqlpad-cli")]
#[command(about = "Inspect SQLite schemas and render schema diagrams")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the schema of a database as JSON
    Inspect {
        /// SQLite database file
        database: PathBuf,

        /// Single-line JSON
        #[arg(long)]
        compact: bool,
    },

    /// Check a schema JSON file for errors and warnings
    Validate {
        /// Schema JSON file
        schema: PathBuf,
    },

    /// Render a schema diagram as SVG
    Render(RenderArgs),

    /// Run SQL against a database and print the result
    Query {
        /// SQLite database file
        database: PathBuf,

        /// SQL to execute
        sql: String,
    },
}

/// Arguments for `render`
#[derive(Args, Debug)]
#[command(group(ArgGroup::new("source").required(true).args(["db", "schema"])))]
pub struct RenderArgs {
    /// Read the schema from a SQLite database
    #[arg(long)]
    pub db: Option<PathBuf>,

    /// Read the schema from a JSON file
    #[arg(long)]
    pub schema: Option<PathBuf>,

    /// Output file (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Table to highlight
    #[arg(long)]
    pub selected: Option<String>,

    /// Layout configuration (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Zoom level, clamped to the configured range
    #[arg(long)]
    pub zoom: Option<f32>,

    /// Place tables that have no position on the default grid
    #[arg(long)]
    pub auto_place: bool,
}

// ============================================================================
// Outcome
// ============================================================================

/// How a command finished when it did not fail outright
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// The command ran but found problems (e.g. validation errors)
    Failure,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Success => ExitCode::SUCCESS,
            Outcome::Failure => ExitCode::FAILURE,
        }
    }
}

// ============================================================================
// Commands
// ============================================================================

/// Run a parsed command, writing its output to `out`
pub fn run(cli: &Cli, out: &mut impl Write) -> Result<Outcome> {
    tracing::debug!(command = ?cli.command, "Running command");
    match &cli.command {
        Commands::Inspect { database, compact } => inspect_command(database, *compact, out),
        Commands::Validate { schema } => validate_command(schema, out),
        Commands::Render(args) => render_command(args, out),
        Commands::Query { database, sql } => query_command(database, sql, out),
    }
}

/// Handle the inspect command
pub fn inspect_command(database: &Path, compact: bool, out: &mut impl Write) -> Result<Outcome> {
    let schema = load_database_schema(database, &DiagramConfig::default())?;
    let json = if compact {
        schema_to_compact_json(&schema)?
    } else {
        schema_to_json(&schema)?
    };
    writeln!(out, "{}", json)?;
    Ok(Outcome::Success)
}

/// Handle the validate command
pub fn validate_command(path: &Path, out: &mut impl Write) -> Result<Outcome> {
    let schema = load_schema(path)
        .with_context(|| format!("Failed to load schema from {}", path.display()))?;
    let result = validate_schema(&schema);

    for error in &result.errors {
        writeln!(out, "{} {}", "error:".red().bold(), error)?;
    }
    for warning in &result.warnings {
        writeln!(out, "{} {}", "warning:".yellow().bold(), warning.message)?;
    }

    if result.has_errors() {
        writeln!(
            out,
            "{} {} error(s), {} warning(s)",
            "✗".red(),
            result.errors.len(),
            result.warnings.len()
        )?;
        Ok(Outcome::Failure)
    } else {
        writeln!(
            out,
            "{} Valid schema: {} table(s), {} relationship(s), {} warning(s)",
            "✓".green(),
            schema.table_count(),
            schema.relationships.len(),
            result.warnings.len()
        )?;
        Ok(Outcome::Success)
    }
}

/// Handle the render command
pub fn render_command(args: &RenderArgs, out: &mut impl Write) -> Result<Outcome> {
    let config = match &args.config {
        Some(path) => DiagramConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => DiagramConfig::default(),
    };

    let mut schema = match (&args.db, &args.schema) {
        (Some(db), _) => load_database_schema(db, &config)?,
        (None, Some(path)) => load_schema(path)
            .with_context(|| format!("Failed to load schema from {}", path.display()))?,
        (None, None) => anyhow::bail!("either --db or --schema is required"),
    };
    if args.auto_place {
        schema.auto_place(&config);
    }
    for table in schema.unplaced_tables() {
        tracing::warn!(table = %table.name, "Table has no position and will not be drawn");
    }

    let mut diagram =
        SchemaDiagram::with_handler(schema, config, args.selected.clone(), NoopSelectHandler);
    if let Some(zoom) = args.zoom {
        diagram.set_zoom(zoom);
    }
    let svg = render_svg(&diagram.scene(), diagram.config()).context("Failed to render SVG")?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &svg)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            writeln!(out, "{} Wrote {}", "✓".green(), path.display())?;
        }
        None => out.write_all(svg.as_bytes())?,
    }
    Ok(Outcome::Success)
}

/// Handle the query command
pub fn query_command(database: &Path, sql: &str, out: &mut impl Write) -> Result<Outcome> {
    let conn = open_database(database)?;
    let result = execute_query(&conn, sql)?;
    if !result.is_empty() {
        writeln!(out, "{}", result.to_text_table())?;
        writeln!(out, "({} row(s))", result.row_count())?;
    }
    Ok(Outcome::Success)
}

fn load_database_schema(path: &Path, config: &DiagramConfig) -> Result<Schema> {
    let conn = open_database(path)?;
    let schema = conn
        .load_schema_with(config)
        .with_context(|| format!("Failed to read schema from {}", path.display()))?;
    Ok(schema)
}

// ============================================================================
// Tests
// ============================================================================
