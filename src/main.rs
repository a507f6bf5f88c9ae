//! Journal Export Handler - Convert journaling app exports to plain text.
//!
//! This tool reads a journaling app's export (a `.zip` archive or a bare
//! `.json` document), normalizes its entries, and renders one
//! chronologically ordered Markdown document. Everything runs locally.
//!
//! QUICK START:
//!   journal-export-handler convert export.zip          # Write journal-export-handler-<date>.md
//!   journal-export-handler convert export.zip -o j.md  # Choose the output path
//!   journal-export-handler preview export.json         # Print the document
//!   journal-export-handler list export.zip -n 10       # Table of the first 10 entries
//!   journal-export-handler stats export.zip            # Entry count and date range

mod application;
mod cli;
mod domain;
mod infrastructure;

use std::fs;
use std::path::Path;

use chrono::Utc;
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use application::{
    convert_file, format_records_table, format_status, format_summary, run_conversion,
    suggested_filename, BLOCK_SEPARATOR,
};
use cli::{Cli, Commands};
use domain::ConversionSession;

fn main() {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

/// Main application logic.
fn run(cli: Cli) -> domain::Result<()> {
    match cli.command {
        Commands::Convert {
            input,
            output,
            stdout,
        } => {
            cmd_convert(&input, output.as_deref(), stdout)?;
        }
        Commands::Preview { input, last } => {
            cmd_preview(&input, last)?;
        }
        Commands::List { input, limit } => {
            cmd_list(&input, limit)?;
        }
        Commands::Stats { input } => {
            cmd_stats(&input)?;
        }
    }

    Ok(())
}

/// Convert command: run the pipeline and write or print the document.
fn cmd_convert(input: &str, output: Option<&str>, to_stdout: bool) -> domain::Result<()> {
    let mut session = ConversionSession::new();
    let conversion = run_conversion(&mut session, Path::new(input))?;

    if to_stdout {
        println!("{}", conversion.output);
        return Ok(());
    }

    let path = output.map_or_else(|| suggested_filename(Utc::now()), str::to_string);
    fs::write(&path, &conversion.output)
        .map_err(|e| domain::AppError::io(format!("Failed to write {path}"), e))?;

    println!("{} → {}", format_status(session.status()), path.cyan());
    println!();
    println!("{}", format_summary(&conversion.summary));

    Ok(())
}

/// Preview command: print the rendered document to stdout.
fn cmd_preview(input: &str, last: Option<usize>) -> domain::Result<()> {
    let conversion = convert_file(Path::new(input))?;

    let output = match last {
        Some(n) => {
            let blocks: Vec<&str> = conversion.output.split(BLOCK_SEPARATOR).collect();
            let skip = blocks.len().saturating_sub(n);
            blocks[skip..].join(BLOCK_SEPARATOR)
        }
        None => conversion.output,
    };

    println!("{output}");
    Ok(())
}

/// List command: table of converted entries.
fn cmd_list(input: &str, limit: usize) -> domain::Result<()> {
    let conversion = convert_file(Path::new(input))?;

    let mut records = conversion.records;
    records.truncate(limit);

    println!("{}", format_records_table(&records));
    println!();
    println!("{}", format_summary(&conversion.summary));

    Ok(())
}

/// Stats command: summary only.
fn cmd_stats(input: &str) -> domain::Result<()> {
    let conversion = convert_file(Path::new(input))?;
    println!("{}", format_summary(&conversion.summary));

    Ok(())
}

/// Setup tracing/logging based on verbosity level.
fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time())
        .with(filter)
        .init();
}
