//! Bridges JSON-authored fixtures into Thrift wire formats.

use std::sync::Arc;

use bytes::Bytes;
use thriftjson_core::{StructSpec, ThriftStruct};
use thriftjson_json::json_to_record;
use thriftjson_wire::{ProtocolFactory, TJsonProtocolFactory, write_record_to};

use crate::error::ThriftJsonError;

/// Decode `json` as a record of the given type and serialize it with a
/// protocol from `factory`.
pub fn json_to_wire(
    json: &str,
    spec: &Arc<StructSpec>,
    factory: &dyn ProtocolFactory,
) -> Result<Bytes, ThriftJsonError> {
    tracing::debug!(
        struct_name = %spec.name,
        protocol = factory.name(),
        "converting JSON to wire format"
    );
    let record = json_to_record(json, spec)?;
    Ok(write_record_to(&record, factory)?)
}

pub fn json_to_wire_as<T: ThriftStruct>(
    json: &str,
    factory: &dyn ProtocolFactory,
) -> Result<Bytes, ThriftJsonError> {
    json_to_wire(json, &T::struct_spec(), factory)
}

/// Convert human-written JSON into the Thrift TJSON protocol encoding.
pub fn pretty_json_to_tjson(
    json: &str,
    spec: &Arc<StructSpec>,
) -> Result<Bytes, ThriftJsonError> {
    json_to_wire(json, spec, &TJsonProtocolFactory)
}
