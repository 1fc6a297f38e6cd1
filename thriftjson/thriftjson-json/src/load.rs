//! Helpers that read JSON documents from disk.

use std::{fs, path::Path, sync::Arc};

use serde_json::Value as JsonValue;
use thriftjson_core::{Record, StructSpec, ThriftStruct};

use crate::{decode::JsonDecoder, error::LoadError};

/// Read and parse a JSON document.
pub fn load_json(path: impl AsRef<Path>) -> Result<JsonValue, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "loaded JSON document");
    serde_json::from_str(&text).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Read a JSON document and decode it as a record of the given type.
pub fn load_json_to_record(
    path: impl AsRef<Path>,
    spec: &Arc<StructSpec>,
) -> Result<Record, LoadError> {
    load_json_to_record_with(path, spec, &JsonDecoder::new())
}

pub fn load_json_to_record_with(
    path: impl AsRef<Path>,
    spec: &Arc<StructSpec>,
    decoder: &JsonDecoder,
) -> Result<Record, LoadError> {
    let json = load_json(path)?;
    Ok(decoder.decode_value(&json, spec)?)
}

pub fn load_json_to<T: ThriftStruct>(path: impl AsRef<Path>) -> Result<T, LoadError> {
    let record = load_json_to_record(path, &T::struct_spec())?;
    T::from_record(&record).map_err(|e| LoadError::Decode(e.into()))
}
