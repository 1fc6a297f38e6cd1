//! Output protocol contract shared by every wire format.

use thriftjson_core::TType;

use crate::{error::WireError, transport::MemoryBuffer};

/// Streaming writer for one Thrift wire format.
///
/// Calls must be balanced the way a generated `write` method issues them:
/// every `*_begin` is followed by the matching `*_end`, and each struct's
/// fields end with [`write_field_stop`](OutputProtocol::write_field_stop).
pub trait OutputProtocol {
    fn write_struct_begin(&mut self, name: &str) -> Result<(), WireError>;
    fn write_struct_end(&mut self) -> Result<(), WireError>;

    fn write_field_begin(&mut self, name: &str, ttype: TType, id: i16) -> Result<(), WireError>;
    fn write_field_end(&mut self) -> Result<(), WireError>;
    fn write_field_stop(&mut self) -> Result<(), WireError>;

    fn write_map_begin(&mut self, key: TType, value: TType, size: usize) -> Result<(), WireError>;
    fn write_map_end(&mut self) -> Result<(), WireError>;

    fn write_list_begin(&mut self, elem: TType, size: usize) -> Result<(), WireError>;
    fn write_list_end(&mut self) -> Result<(), WireError>;

    fn write_set_begin(&mut self, elem: TType, size: usize) -> Result<(), WireError>;
    fn write_set_end(&mut self) -> Result<(), WireError>;

    fn write_bool(&mut self, v: bool) -> Result<(), WireError>;
    fn write_byte(&mut self, v: i8) -> Result<(), WireError>;
    fn write_i16(&mut self, v: i16) -> Result<(), WireError>;
    fn write_i32(&mut self, v: i32) -> Result<(), WireError>;
    fn write_i64(&mut self, v: i64) -> Result<(), WireError>;
    fn write_double(&mut self, v: f64) -> Result<(), WireError>;
    fn write_string(&mut self, v: &str) -> Result<(), WireError>;
}

/// Builds protocols over an in-memory buffer.
pub trait ProtocolFactory {
    /// Short protocol name used in logs and errors.
    fn name(&self) -> &'static str;

    fn output_protocol<'a>(&self, buffer: &'a mut MemoryBuffer) -> Box<dyn OutputProtocol + 'a>;
}
