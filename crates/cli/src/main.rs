//! Table inspection tool.
//!
//! Reads percentile tables from a resource root and prints, rolls on, or
//! decodes them. Run with: `table-cli --root data/tables <command>`

mod commands;

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{Decode, Results, RollOn, Show};
use console::style;
use table_content::{TableContent, TableFormat, TablesConfig};
use table_core::{CodecError, ErrorSeverity, SelectionError, TableError, TableLibError};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Inspect delimited data tables
#[derive(Parser)]
#[command(name = "table-cli")]
#[command(about = "Inspect, roll on and decode data tables", long_about = None)]
#[command(version)]
struct Cli {
    /// Resource root holding table files (overrides TABLES_DIR)
    #[arg(long, global = true)]
    root: Option<std::path::PathBuf>,

    /// Table file format: toml or ron (overrides TABLES_FORMAT)
    #[arg(long, global = true)]
    format: Option<TableFormat>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print every row of a table
    Show(Show),

    /// Roll on a table and print the selected row
    Roll(RollOn),

    /// Decode a row as a type-and-amount record
    Decode(Decode),

    /// Print the distinct results of a table
    Results(Results),
}

fn main() -> ExitCode {
    // Load .env file if it exists (for TABLES_DIR and TABLES_FORMAT)
    let _ = dotenvy::dotenv();

    setup_logging();

    let cli = Cli::parse();

    let mut config = TablesConfig::from_env();
    if let Some(root) = cli.root {
        config.resource_root = root;
    }
    if let Some(format) = cli.format {
        config.format = format;
    }
    tracing::debug!(
        root = %config.resource_root.display(),
        format = %config.format,
        "table configuration"
    );

    let content = TableContent::from_config(config);

    match run(cli.command, &content) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let classified = classify(&err);
            let label = match classified {
                Some((_, code)) => format!("error[{code}]:"),
                None => "error:".to_owned(),
            };
            eprintln!("{} {err:#}", style(label).red().bold());
            ExitCode::from(exit_status(classified.map(|(severity, _)| severity)))
        }
    }
}

fn run(command: Command, content: &TableContent) -> Result<()> {
    match command {
        Command::Show(cmd) => cmd.execute(content),
        Command::Roll(cmd) => cmd.execute(content),
        Command::Decode(cmd) => cmd.execute(content),
        Command::Results(cmd) => cmd.execute(content),
    }
}

/// Severity and error code of the library error behind `err`, if any.
fn classify(err: &anyhow::Error) -> Option<(ErrorSeverity, &'static str)> {
    if let Some(e) = err.downcast_ref::<SelectionError>() {
        return Some((e.severity(), e.error_code()));
    }
    if let Some(e) = err.downcast_ref::<TableError>() {
        return Some((e.severity(), e.error_code()));
    }
    err.downcast_ref::<CodecError>()
        .map(|e| (e.severity(), e.error_code()))
}

/// Exit status per severity, using the sysexits.h values.
fn exit_status(severity: Option<ErrorSeverity>) -> u8 {
    match severity {
        Some(s) if s.is_recoverable() => 75, // EX_TEMPFAIL
        Some(s) if s.is_internal() => 70,    // EX_SOFTWARE
        Some(_) => 65,                       // EX_DATAERR
        None => 1,
    }
}

/// Setup logging to stderr, filtered by `RUST_LOG` (default: info).
fn setup_logging() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .init();
}
