//! Field specifications describing the shape of Thrift records.

mod format;
mod types;

pub use format::format_struct_spec;
pub use types::{FieldSpec, FieldType, StructSpec};
