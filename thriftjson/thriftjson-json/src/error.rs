//! Error types for JSON conversion.

use std::path::PathBuf;

use thriftjson_core::RecordError;

/// Errors produced while encoding a record into JSON.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    /// A value has no JSON representation (non-finite double, composite map key).
    #[error("value at {path} is not JSON serializable: {reason}")]
    NotSerializable { path: String, reason: String },

    /// The JSON writer failed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// A typed struct could not be converted into a record.
    #[error(transparent)]
    Record(#[from] RecordError),
}

/// Errors produced while decoding JSON into a record.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// Input text is not valid JSON.
    #[error("failed to parse JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The field specification uses a type code the decoder does not handle.
    #[error("unrecognized thrift field type: {tag} (at {path})")]
    UnrecognizedFieldType { tag: u8, path: String },

    /// The JSON value has the wrong shape for the field type.
    #[error("type mismatch at {path}: expected {expected}, found {found}")]
    TypeMismatch {
        path: String,
        expected: &'static str,
        found: &'static str,
    },

    /// A value could not be read as a number.
    #[error("cannot convert {value} to {target} at {path}")]
    NumericConversion {
        path: String,
        target: &'static str,
        value: String,
    },

    /// An integer does not fit the width of its field type.
    #[error("integer {value} out of range for {target} at {path}")]
    IntegerOutOfRange {
        path: String,
        target: &'static str,
        value: String,
    },

    /// Decoded record could not be addressed or converted to its typed form.
    #[error(transparent)]
    Record(#[from] RecordError),
}

/// Errors produced by the file-loading helpers.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be opened or read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file content is not valid JSON.
    #[error("failed to parse JSON in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The parsed document does not decode against the record type.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}
