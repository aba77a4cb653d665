//! geodata-cli binary
//!
//! Thin command layer over the SDK: lists registered formats and exports a
//! dataset document to a chosen format. Errors from the SDK surface as
//! one-line diagnostics.

mod commands;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use geodata_sdk::Capability;

#[derive(Parser)]
#[command(
    name = "geodata-cli",
    version,
    about = "Export territorial datasets to interchange and database formats"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered formats and their capabilities
    Formats {
        /// Only show formats with this capability
        /// (binary, exportable, minifiable, parseable)
        #[arg(long)]
        capability: Option<Capability>,
    },
    /// Export a dataset document to the given format
    Export {
        /// Path to a dataset JSON document
        dataset: PathBuf,
        /// Target format name (see `formats`)
        #[arg(long)]
        format: String,
        /// Emit compact output for minifiable formats
        #[arg(long)]
        minify: bool,
        /// SQL dialect (sql format only)
        #[arg(long)]
        dialect: Option<String>,
        /// Directory the output file is written into
        #[arg(long, default_value = ".")]
        output_dir: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Formats { capability } => commands::list_formats(capability),
        Commands::Export {
            dataset,
            format,
            minify,
            dialect,
            output_dir,
        } => commands::export(&dataset, &format, minify, dialect, &output_dir),
    }
}
