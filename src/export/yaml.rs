//! YAML encoder
//!
//! Encodes the nested projection with `serde_yaml` in block style; record
//! key order is preserved.

use crate::dataset::Dataset;
use crate::export::{EncodedStream, ExportError};

pub fn encode(dataset: &Dataset) -> Result<EncodedStream, ExportError> {
    let value = dataset.to_nested_value();
    let text = serde_yaml::to_string(&value).map_err(|e| ExportError::encode("yaml", e))?;
    Ok(EncodedStream::Text(text))
}
