//! Error type for wire-protocol writers.

use thriftjson_core::TType;

/// Errors produced while writing a record through an
/// [`OutputProtocol`](crate::OutputProtocol).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WireError {
    /// A value does not match the type declared by its field specification.
    #[error("value at {path} does not match field type: expected {expected}, found {found}")]
    TypeMismatch {
        path: String,
        expected: &'static str,
        found: &'static str,
    },

    /// The field specification uses a type code that has no wire encoding.
    #[error("field type code {code} at {path} cannot be written")]
    UnsupportedType { code: u8, path: String },

    /// The protocol has no encoding for the given type tag.
    #[error("{ttype} has no representation in the {protocol} protocol")]
    UnsupportedTType {
        ttype: TType,
        protocol: &'static str,
    },

    /// A container or string is longer than an `i32` length prefix allows.
    #[error("length {len} exceeds the protocol size limit")]
    SizeOverflow { len: usize },

    /// A string could not be written as a JSON literal.
    #[error("failed to write JSON string: {detail}")]
    Json { detail: String },
}

pub(crate) fn checked_len(len: usize) -> Result<i32, WireError> {
    i32::try_from(len).map_err(|_| WireError::SizeOverflow { len })
}
