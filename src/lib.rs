//! Geodata SDK - Shared library for exporting Brazilian territorial datasets
//!
//! Provides unified interfaces for:
//! - Format capability metadata (registry lookup and capability queries)
//! - Dataset projections (flat row view, nested structure view)
//! - Export encoders for tabular, interchange, and database formats
//!
//! A caller selects a format by name, and [`export::export_to`] resolves it
//! through the registry and returns the encoded payload as an in-memory
//! stream. File naming is left to the caller: the convention is
//! `<dataset-name><descriptor.extension>`.

pub mod dataset;
pub mod export;
pub mod formats;

// Re-export commonly used types
pub use dataset::{
    ColumnSpec, Dataset, FlattenError, ForeignKeySpec, Record, TableData, TableSchema,
};
pub use export::{export_to, EncodedStream, ExportError, ExportOptions, SchemaGenerator};
pub use formats::{all, descriptors_where, lookup, Capability, FormatDescriptor};
