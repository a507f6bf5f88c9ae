//! CLI interface using clap.
//!
//! Provides command-line arguments and subcommands for the tool.

use clap::{Parser, Subcommand};

/// Journal Export Handler - Convert journaling app exports into a single
/// chronological text document.
#[derive(Parser, Debug)]
#[command(name = "journal-export-handler")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging (use multiple times for more verbosity).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert an export and write the output document.
    Convert {
        /// Path to the export file (.json or .zip).
        input: String,

        /// Output file path (a generated name in the current directory if
        /// not specified).
        #[arg(short, long)]
        output: Option<String>,

        /// Print the document to stdout instead of writing a file.
        #[arg(long)]
        stdout: bool,
    },

    /// Convert and print the rendered document without writing anything.
    Preview {
        /// Path to the export file (.json or .zip).
        input: String,

        /// Show only the last N blocks.
        #[arg(short, long)]
        last: Option<usize>,
    },

    /// List the converted entries as a table.
    List {
        /// Path to the export file (.json or .zip).
        input: String,

        /// Maximum number of entries to show.
        #[arg(short = 'n', long, default_value = "20")]
        limit: usize,
    },

    /// Show the conversion summary only.
    Stats {
        /// Path to the export file (.json or .zip).
        input: String,
    },
}
