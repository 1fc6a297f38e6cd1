//! Convert Thrift records to and from JSON.
//!
//! The JSON converters live in [`json`], the schema and value model in
//! [`core`], and the wire-protocol writers in [`wire`]. This crate adds the
//! round trip from plain JSON to a wire encoding.

mod error;
mod roundtrip;

pub use error::ThriftJsonError;
pub use roundtrip::{json_to_wire, json_to_wire_as, pretty_json_to_tjson};
pub use thriftjson_core as core;
pub use thriftjson_json as json;
pub use thriftjson_wire as wire;
