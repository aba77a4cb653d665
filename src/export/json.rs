//! JSON encoder
//!
//! Encodes the nested projection with `serde_json`: pretty-printed with
//! 2-space indentation by default, compact separators when minified.

use crate::dataset::Dataset;
use crate::export::{EncodedStream, ExportError};

pub fn encode(dataset: &Dataset, minify: bool) -> Result<EncodedStream, ExportError> {
    let value = dataset.to_nested_value();
    let text = if minify {
        serde_json::to_string(&value)
    } else {
        serde_json::to_string_pretty(&value)
    }
    .map_err(|e| ExportError::encode("json", e))?;
    Ok(EncodedStream::Text(text))
}
