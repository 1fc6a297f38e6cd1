//! Schema-driven conversion between thriftjson records and plain JSON.
//!
//! [`record_to_json`] walks a [`Record`](thriftjson_core::Record) and keeps
//! only fields that differ from their defaults. [`json_to_record`] walks the
//! target [`StructSpec`](thriftjson_core::StructSpec) and converts each JSON
//! value present to the field's declared type; unknown keys are ignored.

mod decode;
mod encode;
mod error;
mod load;
mod policy;

pub use decode::{JsonDecoder, from_json, from_json_value, json_to_record, json_value_to_record};
pub use encode::{
    record_to_json, record_to_json_pretty, record_to_json_value, to_json, to_json_value,
};
pub use error::{DecodeError, EncodeError, LoadError};
pub use load::{load_json, load_json_to, load_json_to_record, load_json_to_record_with};
pub use policy::BoolPolicy;
