//! Schema and value types shared by the thriftjson converters.
//!
//! A record type is described by a [`StructSpec`]: an ordered list of
//! [`FieldSpec`] entries carrying the field id, [`FieldType`], name, and
//! default. [`Record`] instances hold one [`Value`] per entry.

mod error;
mod record;
mod schema;
mod ttype;
mod value;

pub use error::{RecordError, UnknownTypeCode, ValueTypeError};
pub use record::{Record, ThriftStruct};
pub use schema::{FieldSpec, FieldType, StructSpec, format_struct_spec};
pub use ttype::TType;
pub use value::Value;
