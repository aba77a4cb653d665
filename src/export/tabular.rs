//! Tabular text encoders: CSV, TSV, generic DAT
//!
//! Every table's records are flattened and concatenated into one row set,
//! then written through the `csv` crate with the layout's delimiter. DAT is
//! tab-delimited with no header row.
//!
//! Header policy: the column set is derived from the LAST flattened row.
//! Columns present only in earlier rows are dropped silently, and rows
//! missing a header column emit an empty cell. This matches the behavior
//! existing consumers were built against; it is pinned by tests and must not
//! be changed without a data-compatibility review.

use serde_json::Value;

use crate::dataset::{flatten_records, Dataset, Record};
use crate::export::{EncodedStream, ExportError};

/// Row layout for one of the three tabular formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Csv,
    Tsv,
    Dat,
}

impl Layout {
    fn delimiter(self) -> u8 {
        match self {
            Layout::Csv => b',',
            Layout::Tsv | Layout::Dat => b'\t',
        }
    }

    fn has_header(self) -> bool {
        !matches!(self, Layout::Dat)
    }

    fn format_name(self) -> &'static str {
        match self {
            Layout::Csv => "csv",
            Layout::Tsv => "tsv",
            Layout::Dat => "dat",
        }
    }
}

pub fn encode(dataset: &Dataset, layout: Layout) -> Result<EncodedStream, ExportError> {
    let format = layout.format_name();

    let mut rows: Vec<Record> = Vec::new();
    for table in &dataset.tables {
        let flattened =
            flatten_records(&table.records).map_err(|e| ExportError::encode(format, e))?;
        rows.extend(flattened);
    }

    // Header from the last row; see the module docs for the column policy.
    let columns: Vec<String> = rows
        .last()
        .map(|row| row.keys().cloned().collect())
        .unwrap_or_default();

    let mut writer = csv::WriterBuilder::new()
        .delimiter(layout.delimiter())
        .from_writer(Vec::new());

    if layout.has_header() && !columns.is_empty() {
        writer
            .write_record(&columns)
            .map_err(|e| ExportError::encode(format, e))?;
    }

    for row in &rows {
        let cells: Vec<String> = columns
            .iter()
            .map(|column| row.get(column).map(cell_text).unwrap_or_default())
            .collect();
        writer
            .write_record(&cells)
            .map_err(|e| ExportError::encode(format, e))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::encode(format, e.into_error()))?;
    let text = String::from_utf8(bytes).map_err(|e| ExportError::encode(format, e))?;
    Ok(EncodedStream::Text(text))
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_and_string_cells_render_bare() {
        assert_eq!(cell_text(&Value::Null), "");
        assert_eq!(cell_text(&json!("Acre")), "Acre");
        assert_eq!(cell_text(&json!(12)), "12");
        assert_eq!(cell_text(&json!(true)), "true");
    }
}
