//! SQL encoder and schema generator
//!
//! Renders each table as a `CREATE TABLE` statement followed by one `INSERT`
//! per record. A declared [`TableSchema`] is used when present; otherwise the
//! schema is inferred from the flattened rows (INTEGER/REAL/TEXT, nullability
//! from observed nulls and missing columns, column order by first
//! appearance).
//!
//! # Security
//!
//! All identifiers are quoted and escaped per dialect; internal quote
//! characters are escaped by doubling them. String literals escape single
//! quotes the same way.

use serde_json::Value;

use crate::dataset::{ColumnSpec, Dataset, FlattenError, Record, TableData, TableSchema};
use crate::export::{EncodedStream, ExportError};

pub fn encode(dataset: &Dataset, dialect: Option<&str>) -> Result<EncodedStream, ExportError> {
    let generator = SchemaGenerator::new(dataset, dialect);
    let sql = generator.render().map_err(|e| ExportError::encode("sql", e))?;
    Ok(EncodedStream::Text(sql))
}

/// Renders a dataset as SQL DDL and DML in a given dialect.
pub struct SchemaGenerator<'a> {
    dataset: &'a Dataset,
    dialect: &'a str,
}

impl<'a> SchemaGenerator<'a> {
    /// Create a generator for the given dialect ("standard" when `None`).
    pub fn new(dataset: &'a Dataset, dialect: Option<&'a str>) -> Self {
        Self {
            dataset,
            dialect: dialect.unwrap_or("standard"),
        }
    }

    /// Render `CREATE TABLE` plus `INSERT` statements for every table.
    ///
    /// Tables with no declared schema and no records are skipped: there is
    /// nothing to create.
    pub fn render(&self) -> Result<String, FlattenError> {
        let mut sql = String::new();
        for table in &self.dataset.tables {
            let rows = table.flat_rows()?;
            let schema = match &table.schema {
                Some(schema) => schema.clone(),
                None => infer_schema(&rows),
            };
            if schema.columns.is_empty() {
                continue;
            }
            sql.push_str(&self.create_table(table, &schema));
            sql.push_str(&self.insert_rows(table, &schema, &rows));
            sql.push('\n');
        }
        Ok(sql)
    }

    /// Render the full script wrapped for transactional execution against a
    /// fresh SQLite database.
    pub fn render_script(&self) -> Result<String, FlattenError> {
        Ok(format!(
            "PRAGMA page_size=1024;\nPRAGMA foreign_keys=ON;\nBEGIN;\n{}COMMIT;\n",
            self.render()?
        ))
    }

    fn create_table(&self, table: &TableData, schema: &TableSchema) -> String {
        let mut lines: Vec<String> = schema
            .columns
            .iter()
            .map(|column| {
                let mut line = format!(
                    "  {} {}",
                    self.quote_identifier(&column.name),
                    column.sql_type
                );
                if !column.nullable {
                    line.push_str(" NOT NULL");
                }
                if column.primary_key {
                    line.push_str(" PRIMARY KEY");
                }
                line
            })
            .collect();

        for fk in &schema.foreign_keys {
            lines.push(format!(
                "  FOREIGN KEY ({}) REFERENCES {} ({})",
                self.quote_identifier(&fk.column),
                self.quote_identifier(&fk.references_table),
                self.quote_identifier(&fk.references_column)
            ));
        }

        format!(
            "CREATE TABLE {} (\n{}\n);\n",
            self.quote_identifier(&table.name),
            lines.join(",\n")
        )
    }

    fn insert_rows(&self, table: &TableData, schema: &TableSchema, rows: &[Record]) -> String {
        let column_list: Vec<String> = schema
            .columns
            .iter()
            .map(|column| self.quote_identifier(&column.name))
            .collect();

        let mut sql = String::new();
        for row in rows {
            let values: Vec<String> = schema
                .columns
                .iter()
                .map(|column| {
                    row.get(&column.name)
                        .map(|value| self.literal(value))
                        .unwrap_or_else(|| "NULL".to_string())
                })
                .collect();
            sql.push_str(&format!(
                "INSERT INTO {} ({}) VALUES ({});\n",
                self.quote_identifier(&table.name),
                column_list.join(", "),
                values.join(", ")
            ));
        }
        sql
    }

    /// Quote and escape an identifier based on the SQL dialect.
    fn quote_identifier(&self, identifier: &str) -> String {
        match self.dialect {
            "mysql" => {
                // MySQL uses backticks; escape internal backticks by doubling
                format!("`{}`", identifier.replace('`', "``"))
            }
            "sqlserver" | "mssql" => {
                // SQL Server uses brackets; escape ] by doubling
                format!("[{}]", identifier.replace(']', "]]"))
            }
            _ => {
                // Standard SQL, PostgreSQL, SQLite: double quotes
                format!("\"{}\"", identifier.replace('"', "\"\""))
            }
        }
    }

    fn literal(&self, value: &Value) -> String {
        match value {
            Value::Null => "NULL".to_string(),
            Value::Bool(flag) => if *flag { "1" } else { "0" }.to_string(),
            Value::Number(number) => number.to_string(),
            Value::String(text) => format!("'{}'", text.replace('\'', "''")),
            // Rows are flattened before rendering, so composite values
            // cannot reach this point.
            Value::Array(_) | Value::Object(_) => "NULL".to_string(),
        }
    }
}

/// Infer a schema from flattened rows: column order by first appearance,
/// INTEGER/REAL/TEXT types widened across rows, nullability from observed
/// nulls and missing columns. No keys are inferred.
fn infer_schema(rows: &[Record]) -> TableSchema {
    // Column name and observed type, in first-appearance order. The type
    // stays undecided until a non-null value fixes it; nulls only affect
    // nullability.
    let mut observed: Vec<(String, Option<&'static str>)> = Vec::new();

    for row in rows {
        for (name, value) in row {
            let index = match observed.iter().position(|(column, _)| column == name) {
                Some(index) => index,
                None => {
                    observed.push((name.clone(), None));
                    observed.len() - 1
                }
            };
            if !value.is_null() {
                let sql_type = sql_type_of(value);
                observed[index].1 = Some(match observed[index].1 {
                    Some(current) => widen(current, sql_type),
                    None => sql_type,
                });
            }
        }
    }

    let columns = observed
        .into_iter()
        .map(|(name, sql_type)| {
            let nullable = rows
                .iter()
                .any(|row| row.get(&name).map(Value::is_null).unwrap_or(true));
            ColumnSpec {
                sql_type: sql_type.unwrap_or("TEXT").to_string(),
                name,
                nullable,
                primary_key: false,
            }
        })
        .collect();

    TableSchema::new(columns)
}

fn sql_type_of(value: &Value) -> &'static str {
    match value {
        Value::Number(number) if number.as_i64().is_some() || number.as_u64().is_some() => "INTEGER",
        Value::Number(_) => "REAL",
        Value::Bool(_) => "INTEGER",
        _ => "TEXT",
    }
}

fn widen(current: &'static str, observed: &'static str) -> &'static str {
    match (current, observed) {
        ("INTEGER", "INTEGER") => "INTEGER",
        ("INTEGER", "REAL") | ("REAL", "INTEGER") | ("REAL", "REAL") => "REAL",
        _ => "TEXT",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {:?}", other),
        }
    }

    fn states() -> Dataset {
        let mut dataset = Dataset::new("dtb");
        let mut table = TableData::new("states");
        table.push_record(record(json!({"id": 11, "name": "Rondônia"})));
        table.push_record(record(json!({"id": 12, "name": "Acre"})));
        dataset.push_table(table);
        dataset
    }

    #[test]
    fn quoting_follows_dialect() {
        let dataset = states();
        let mysql = SchemaGenerator::new(&dataset, Some("mysql"));
        assert_eq!(mysql.quote_identifier("states"), "`states`");
        let mssql = SchemaGenerator::new(&dataset, Some("sqlserver"));
        assert_eq!(mssql.quote_identifier("odd]name"), "[odd]]name]");
        let standard = SchemaGenerator::new(&dataset, None);
        assert_eq!(standard.quote_identifier("sta\"tes"), "\"sta\"\"tes\"");
    }

    #[test]
    fn string_literals_escape_single_quotes() {
        let dataset = states();
        let generator = SchemaGenerator::new(&dataset, None);
        assert_eq!(
            generator.literal(&json!("Alta Floresta D'Oeste")),
            "'Alta Floresta D''Oeste'"
        );
        assert_eq!(generator.literal(&Value::Null), "NULL");
        assert_eq!(generator.literal(&json!(true)), "1");
    }

    #[test]
    fn inferred_schema_widens_types_and_tracks_nulls() {
        let rows = vec![
            record(json!({"id": 1, "area": 2, "name": "a"})),
            record(json!({"id": 2, "area": 3.5, "name": null})),
        ];
        let schema = infer_schema(&rows);
        assert_eq!(schema.column("id").unwrap().sql_type, "INTEGER");
        assert!(!schema.column("id").unwrap().nullable);
        assert_eq!(schema.column("area").unwrap().sql_type, "REAL");
        assert_eq!(schema.column("name").unwrap().sql_type, "TEXT");
        assert!(schema.column("name").unwrap().nullable);
    }

    #[test]
    fn missing_columns_are_nullable() {
        let rows = vec![record(json!({"id": 1, "note": "x"})), record(json!({"id": 2}))];
        let schema = infer_schema(&rows);
        assert!(schema.column("note").unwrap().nullable);
    }

    #[test]
    fn nulls_do_not_widen_the_inferred_type() {
        let rows = vec![
            record(json!({"code": null})),
            record(json!({"code": 7})),
            record(json!({"code": null})),
        ];
        let schema = infer_schema(&rows);
        let code = schema.column("code").unwrap();
        assert_eq!(code.sql_type, "INTEGER");
        assert!(code.nullable);
    }

    #[test]
    fn render_emits_ddl_then_inserts() {
        let dataset = states();
        let sql = SchemaGenerator::new(&dataset, None).render().unwrap();
        let create = sql.find("CREATE TABLE \"states\"").unwrap();
        let insert = sql.find("INSERT INTO \"states\"").unwrap();
        assert!(create < insert);
        assert!(sql.contains("VALUES (11, 'Rondônia');"));
    }

    #[test]
    fn script_wraps_in_transaction_with_pragmas() {
        let dataset = states();
        let script = SchemaGenerator::new(&dataset, Some("sqlite"))
            .render_script()
            .unwrap();
        assert!(script.starts_with("PRAGMA page_size=1024;\nPRAGMA foreign_keys=ON;\nBEGIN;\n"));
        assert!(script.ends_with("COMMIT;\n"));
    }

    #[test]
    fn empty_tables_without_schema_are_skipped() {
        let mut dataset = Dataset::new("dtb");
        dataset.push_table(TableData::new("empty"));
        let sql = SchemaGenerator::new(&dataset, None).render().unwrap();
        assert!(sql.is_empty());
    }
}
