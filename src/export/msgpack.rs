//! MessagePack encoder
//!
//! Encodes the nested projection with `rmp-serde` using map-keyed encoding,
//! so the payload decodes back into named records.

use crate::dataset::Dataset;
use crate::export::{EncodedStream, ExportError};

pub fn encode(dataset: &Dataset) -> Result<EncodedStream, ExportError> {
    let value = dataset.to_nested_value();
    let bytes = rmp_serde::to_vec_named(&value).map_err(|e| ExportError::encode("msgpack", e))?;
    Ok(EncodedStream::Binary(bytes))
}
