//! Error type for the JSON to wire round trip.

use thriftjson_json::DecodeError;
use thriftjson_wire::WireError;

/// Errors produced by [`json_to_wire`](crate::json_to_wire) and its variants.
#[derive(Debug, thiserror::Error)]
pub enum ThriftJsonError {
    /// The JSON input did not decode against the record type.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The decoded record could not be written by the wire protocol.
    #[error(transparent)]
    Wire(#[from] WireError),
}
