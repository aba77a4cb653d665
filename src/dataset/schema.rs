//! Declared table schema consumed by the SQL-family exporters

use serde::{Deserialize, Serialize};

/// A single column definition: name, SQL type, and constraints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ColumnSpec {
    /// Column name
    pub name: String,
    /// SQL type (e.g., "INTEGER", "VARCHAR(64)")
    pub sql_type: String,
    /// Whether the column allows NULL values (default: true)
    #[serde(default = "default_true")]
    pub nullable: bool,
    /// Whether this column is the primary key (default: false)
    #[serde(default)]
    pub primary_key: bool,
}

fn default_true() -> bool {
    true
}

impl ColumnSpec {
    /// Create a nullable, non-key column with the given name and SQL type.
    pub fn new(name: impl Into<String>, sql_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sql_type: sql_type.into(),
            nullable: true,
            primary_key: false,
        }
    }

    /// Mark the column as the primary key (implies NOT NULL).
    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self.nullable = false;
        self
    }

    /// Mark the column NOT NULL.
    pub fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }
}

/// Foreign key reference to another table's column.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForeignKeySpec {
    /// Column name in this table
    pub column: String,
    /// Target table name
    pub references_table: String,
    /// Column name in the target table
    pub references_column: String,
}

impl ForeignKeySpec {
    pub fn new(
        column: impl Into<String>,
        references_table: impl Into<String>,
        references_column: impl Into<String>,
    ) -> Self {
        Self {
            column: column.into(),
            references_table: references_table.into(),
            references_column: references_column.into(),
        }
    }
}

/// Declared schema for one table: ordered columns plus foreign keys.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TableSchema {
    pub columns: Vec<ColumnSpec>,
    #[serde(default)]
    pub foreign_keys: Vec<ForeignKeySpec>,
}

impl TableSchema {
    pub fn new(columns: Vec<ColumnSpec>) -> Self {
        Self {
            columns,
            foreign_keys: Vec::new(),
        }
    }

    pub fn with_foreign_keys(mut self, foreign_keys: Vec<ForeignKeySpec>) -> Self {
        self.foreign_keys = foreign_keys;
        self
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Option<&ColumnSpec> {
        self.columns.iter().find(|c| c.name == name)
    }
}
