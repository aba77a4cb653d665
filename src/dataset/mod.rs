//! Dataset model for the SDK
//!
//! A dataset is an ordered, keyed collection of named record tables. Records
//! are JSON-style maps with preserved key order; values may be scalars or
//! nested maps. The exporters consume one of two projections:
//! - `flat_rows`: nested maps flattened into `parent_child` columns, for the
//!   tabular and SQL formats
//! - `to_nested_value`: an ordered map of table name to record list, for the
//!   hierarchical formats

pub mod schema;

pub use schema::{ColumnSpec, ForeignKeySpec, TableSchema};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single record: field name to value, insertion order preserved.
pub type Record = Map<String, Value>;

/// Error raised when a record cannot be flattened into a flat row.
#[derive(Debug, thiserror::Error)]
pub enum FlattenError {
    #[error("column '{column}' holds an array and cannot be flattened into a row")]
    ArrayValue { column: String },
}

/// One named table: an ordered sequence of records plus an optional declared
/// schema consumed by the SQL-family exporters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TableData {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<TableSchema>,
    #[serde(default)]
    pub records: Vec<Record>,
}

impl TableData {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            schema: None,
            records: Vec::new(),
        }
    }

    pub fn with_schema(name: impl Into<String>, schema: TableSchema) -> Self {
        Self {
            name: name.into(),
            schema: Some(schema),
            records: Vec::new(),
        }
    }

    pub fn push_record(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Flatten every record into a flat row.
    ///
    /// Nested maps contribute `parent_child` columns; arrays are not
    /// flattenable and fail the projection.
    pub fn flat_rows(&self) -> Result<Vec<Record>, FlattenError> {
        flatten_records(&self.records)
    }
}

/// An ordered, keyed collection of named record tables.
///
/// The dataset name is used by callers to derive output file names
/// (`<name><extension>`); table order and record order are preserved through
/// every projection.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Dataset {
    pub name: String,
    #[serde(default)]
    pub tables: Vec<TableData>,
}

impl Dataset {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tables: Vec::new(),
        }
    }

    pub fn push_table(&mut self, table: TableData) {
        self.tables.push(table);
    }

    /// Look up a table by name.
    pub fn table(&self, name: &str) -> Option<&TableData> {
        self.tables.iter().find(|t| t.name == name)
    }

    /// Normalize to a nested structure: an ordered map of table name to
    /// record list, suitable for the hierarchical formats.
    pub fn to_nested_value(&self) -> Value {
        let mut root = Map::new();
        for table in &self.tables {
            let records = table
                .records
                .iter()
                .cloned()
                .map(Value::Object)
                .collect();
            root.insert(table.name.clone(), Value::Array(records));
        }
        Value::Object(root)
    }
}

/// Flatten a sequence of records into flat rows.
pub fn flatten_records(records: &[Record]) -> Result<Vec<Record>, FlattenError> {
    records.iter().map(flatten_record).collect()
}

/// Flatten one record: nested maps become `parent_child` columns.
pub fn flatten_record(record: &Record) -> Result<Record, FlattenError> {
    let mut flat = Record::new();
    flatten_into(&mut flat, None, record)?;
    Ok(flat)
}

fn flatten_into(flat: &mut Record, prefix: Option<&str>, map: &Record) -> Result<(), FlattenError> {
    for (key, value) in map {
        let column = match prefix {
            Some(prefix) => format!("{}_{}", prefix, key),
            None => key.clone(),
        };
        match value {
            Value::Object(nested) => flatten_into(flat, Some(&column), nested)?,
            Value::Array(_) => return Err(FlattenError::ArrayValue { column }),
            other => {
                flat.insert(column, other.clone());
            }
        }
    }
    Ok(())
}
