//! Error types shared by the schema and value layers.

/// A raw type code that does not name any Thrift type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown thrift type code: {0}")]
pub struct UnknownTypeCode(pub u8);

/// A [`Value`](crate::Value) accessor was called on the wrong variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected {expected} value, found {actual}")]
pub struct ValueTypeError {
    pub expected: String,
    pub actual: &'static str,
}

impl ValueTypeError {
    pub fn new(expected: impl Into<String>, actual: &'static str) -> Self {
        Self {
            expected: expected.into(),
            actual,
        }
    }
}

/// Errors raised when addressing fields of a [`Record`](crate::Record).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    /// The field name does not appear in the record's field specification.
    #[error("struct '{struct_name}' has no field named '{field}'")]
    UnknownField { struct_name: String, field: String },

    /// A typed struct could not be built from a record.
    #[error("field '{field}' of struct '{struct_name}': {source}")]
    FieldType {
        struct_name: String,
        field: String,
        #[source]
        source: ValueTypeError,
    },
}
