//! Thrift binary protocol writer (big-endian, unframed, no message header).

use bytes::{BufMut, BytesMut};
use thriftjson_core::TType;

use crate::{
    error::{WireError, checked_len},
    protocol::{OutputProtocol, ProtocolFactory},
    transport::MemoryBuffer,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct TBinaryProtocolFactory;

impl ProtocolFactory for TBinaryProtocolFactory {
    fn name(&self) -> &'static str {
        "binary"
    }

    fn output_protocol<'a>(&self, buffer: &'a mut MemoryBuffer) -> Box<dyn OutputProtocol + 'a> {
        Box::new(TBinaryOutputProtocol::new(buffer))
    }
}

pub struct TBinaryOutputProtocol<'a> {
    buf: &'a mut BytesMut,
}

impl<'a> TBinaryOutputProtocol<'a> {
    pub fn new(buffer: &'a mut MemoryBuffer) -> Self {
        Self {
            buf: buffer.buf_mut(),
        }
    }

    fn container_header(&mut self, types: &[TType], size: usize) -> Result<(), WireError> {
        let size = checked_len(size)?;
        for ttype in types {
            self.buf.put_u8(ttype.code());
        }
        self.buf.put_i32(size);
        Ok(())
    }
}

impl OutputProtocol for TBinaryOutputProtocol<'_> {
    fn write_struct_begin(&mut self, _name: &str) -> Result<(), WireError> {
        Ok(())
    }

    fn write_struct_end(&mut self) -> Result<(), WireError> {
        Ok(())
    }

    fn write_field_begin(&mut self, _name: &str, ttype: TType, id: i16) -> Result<(), WireError> {
        self.buf.put_u8(ttype.code());
        self.buf.put_i16(id);
        Ok(())
    }

    fn write_field_end(&mut self) -> Result<(), WireError> {
        Ok(())
    }

    fn write_field_stop(&mut self) -> Result<(), WireError> {
        self.buf.put_u8(TType::Stop.code());
        Ok(())
    }

    fn write_map_begin(
        &mut self,
        key: TType,
        value: TType,
        size: usize,
    ) -> Result<(), WireError> {
        self.container_header(&[key, value], size)
    }

    fn write_map_end(&mut self) -> Result<(), WireError> {
        Ok(())
    }

    fn write_list_begin(&mut self, elem: TType, size: usize) -> Result<(), WireError> {
        self.container_header(&[elem], size)
    }

    fn write_list_end(&mut self) -> Result<(), WireError> {
        Ok(())
    }

    fn write_set_begin(&mut self, elem: TType, size: usize) -> Result<(), WireError> {
        self.container_header(&[elem], size)
    }

    fn write_set_end(&mut self) -> Result<(), WireError> {
        Ok(())
    }

    fn write_bool(&mut self, v: bool) -> Result<(), WireError> {
        self.buf.put_u8(u8::from(v));
        Ok(())
    }

    fn write_byte(&mut self, v: i8) -> Result<(), WireError> {
        self.buf.put_i8(v);
        Ok(())
    }

    fn write_i16(&mut self, v: i16) -> Result<(), WireError> {
        self.buf.put_i16(v);
        Ok(())
    }

    fn write_i32(&mut self, v: i32) -> Result<(), WireError> {
        self.buf.put_i32(v);
        Ok(())
    }

    fn write_i64(&mut self, v: i64) -> Result<(), WireError> {
        self.buf.put_i64(v);
        Ok(())
    }

    fn write_double(&mut self, v: f64) -> Result<(), WireError> {
        self.buf.put_f64(v);
        Ok(())
    }

    fn write_string(&mut self, v: &str) -> Result<(), WireError> {
        let len = checked_len(v.len())?;
        self.buf.put_i32(len);
        self.buf.put_slice(v.as_bytes());
        Ok(())
    }
}
