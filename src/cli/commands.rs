//! Command implementations for geodata-cli

use std::fs;
use std::path::Path;

use anyhow::Context;
use geodata_sdk::{export_to, formats, Capability, Dataset, ExportOptions};
use tracing::info;

use crate::output;

/// Print the format table, optionally filtered by capability.
pub fn list_formats(capability: Option<Capability>) -> anyhow::Result<()> {
    let descriptors: Vec<_> = match capability {
        Some(capability) => formats::descriptors_where(capability).collect(),
        None => formats::all().iter().collect(),
    };
    print!("{}", output::format_table(&descriptors));
    Ok(())
}

/// Load a dataset document, export it, and write
/// `<dataset-name><extension>` into the output directory.
pub fn export(
    dataset_path: &Path,
    format: &str,
    minify: bool,
    dialect: Option<String>,
    output_dir: &Path,
) -> anyhow::Result<()> {
    let document = fs::read_to_string(dataset_path)
        .with_context(|| format!("failed to read {}", dataset_path.display()))?;
    let dataset: Dataset = serde_json::from_str(&document)
        .with_context(|| format!("failed to parse {}", dataset_path.display()))?;

    let descriptor = formats::lookup(format)?;
    let options = ExportOptions { minify, dialect };
    let stream = export_to(format, &dataset, &options)?;

    let output_path = output_dir.join(format!("{}{}", dataset.name, descriptor.extension));
    fs::write(&output_path, stream.as_bytes())
        .with_context(|| format!("failed to write {}", output_path.display()))?;

    info!(
        format = descriptor.name,
        bytes = stream.len(),
        "export written"
    );
    println!(
        "✅ Exported {} to {} ({} bytes)",
        dataset.name,
        output_path.display(),
        stream.len()
    );
    Ok(())
}
