//! SQLite 3 encoder
//!
//! The only encoder that touches the filesystem: the sqlite-dialect script is
//! executed in one batch against a fresh temporary database file, the
//! connection is closed, and the file bytes become the payload. The
//! temporary file lives exactly as long as the call, on every exit path.

use rusqlite::Connection;

use crate::dataset::Dataset;
use crate::export::{EncodedStream, ExportError, SchemaGenerator};

pub fn encode(dataset: &Dataset) -> Result<EncodedStream, ExportError> {
    let script = SchemaGenerator::new(dataset, Some("sqlite"))
        .render_script()
        .map_err(|e| ExportError::encode("sqlite3", e))?;

    let file = tempfile::Builder::new()
        .prefix("geodata-export-")
        .suffix(".sqlite3")
        .tempfile()
        .map_err(|e| ExportError::encode("sqlite3", e))?;

    let connection =
        Connection::open(file.path()).map_err(|e| ExportError::encode("sqlite3", e))?;
    connection
        .execute_batch(&script)
        .map_err(|e| ExportError::encode("sqlite3", e))?;
    connection
        .close()
        .map_err(|(_, e)| ExportError::encode("sqlite3", e))?;

    let bytes = std::fs::read(file.path()).map_err(|e| ExportError::encode("sqlite3", e))?;
    Ok(EncodedStream::Binary(bytes))
}
