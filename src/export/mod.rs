//! Export functionality
//!
//! Provides encoders for the exportable formats:
//! - Tabular text: CSV, TSV, generic DAT
//! - Data interchange: JSON, YAML, XML, Property List, PHP serialization,
//!   MessagePack
//! - Database: SQL script, SQLite 3 database image
//!
//! One dispatch function resolves a format name through the registry and
//! hands the dataset to the matching encoder. Every encoder returns a fully
//! materialized stream; nothing is written to the caller's disk.

pub mod json;
pub mod msgpack;
pub mod phpd;
pub mod plist;
pub mod sql;
pub mod sqlite;
pub mod tabular;
pub mod xml;
pub mod yaml;

use tracing::debug;

use crate::dataset::Dataset;
use crate::formats;

// Re-export for convenience
pub use sql::SchemaGenerator;

/// Error during export.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// The format name is not in the registry.
    #[error("unknown format: {0}")]
    UnknownFormat(String),
    /// The format is registered but is not an export target.
    #[error("format '{0}' does not support export")]
    UnsupportedFormat(String),
    /// An encoder or projection failed; wraps the cause.
    #[error("failed to encode '{format}' output: {source}")]
    Encode {
        format: &'static str,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl ExportError {
    pub(crate) fn encode<E>(format: &'static str, source: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        ExportError::Encode {
            format,
            source: source.into(),
        }
    }
}

/// Options honored by the encoders.
///
/// `minify` only affects minifiable formats; everywhere else it is accepted
/// and ignored so callers need not branch on format capability. `dialect` is
/// meaningful only to the SQL family (`None` means standard SQL).
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    pub minify: bool,
    pub dialect: Option<String>,
}

/// A fully materialized export payload: text or bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodedStream {
    Text(String),
    Binary(Vec<u8>),
}

impl EncodedStream {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            EncodedStream::Text(text) => text.as_bytes(),
            EncodedStream::Binary(bytes) => bytes,
        }
    }

    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            EncodedStream::Text(text) => text.into_bytes(),
            EncodedStream::Binary(bytes) => bytes,
        }
    }

    /// The text payload, when the stream is textual.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            EncodedStream::Text(text) => Some(text),
            EncodedStream::Binary(_) => None,
        }
    }

    pub fn is_binary(&self) -> bool {
        matches!(self, EncodedStream::Binary(_))
    }

    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }
}

/// Export the dataset to the named format.
///
/// The name must resolve through the registry to a descriptor with
/// `is_exportable` set. Errors from the underlying encoders surface as
/// [`ExportError::Encode`] carrying the format name and the cause; the call
/// has no side effects beyond the returned stream (the SQLite encoder's
/// temporary database is scoped to the call).
pub fn export_to(
    format_name: &str,
    dataset: &Dataset,
    options: &ExportOptions,
) -> Result<EncodedStream, ExportError> {
    let descriptor = formats::lookup(format_name)?;
    if !descriptor.is_exportable {
        return Err(ExportError::UnsupportedFormat(descriptor.name.to_string()));
    }

    debug!(
        format = descriptor.name,
        minify = options.minify,
        "encoding dataset"
    );

    let stream = match descriptor.name {
        "csv" => tabular::encode(dataset, tabular::Layout::Csv)?,
        "tsv" => tabular::encode(dataset, tabular::Layout::Tsv)?,
        "dat" => tabular::encode(dataset, tabular::Layout::Dat)?,
        "json" => json::encode(dataset, options.minify)?,
        "yaml" => yaml::encode(dataset)?,
        "xml" => xml::encode(dataset, options.minify)?,
        "plist" => plist::encode(dataset),
        "phpd" => phpd::encode(dataset),
        "msgpack" => msgpack::encode(dataset)?,
        "sql" => sql::encode(dataset, options.dialect.as_deref())?,
        "sqlite3" => sqlite::encode(dataset)?,
        // Registry and dispatch must stay in sync; a descriptor marked
        // exportable without an encoder arm is a registration bug.
        name => return Err(ExportError::UnsupportedFormat(name.to_string())),
    };

    debug!(
        format = descriptor.name,
        bytes = stream.len(),
        "dataset encoded"
    );

    Ok(stream)
}
