//! Thrift TJSON protocol writer.
//!
//! Structs are objects keyed by field id, each field wrapped in a one-entry
//! object naming its type: `{"1":{"str":"Ada"}}`. Containers are arrays that
//! carry element types and size ahead of the elements:
//! `["i32",2,1,2]` for lists and sets, `["str","i32",1,{"a":1}]` for maps.

use bytes::{BufMut, BytesMut};
use thriftjson_core::TType;

use crate::{
    error::{WireError, checked_len},
    protocol::{OutputProtocol, ProtocolFactory},
    transport::MemoryBuffer,
};

const PROTOCOL: &str = "tjson";

#[derive(Debug, Clone, Copy, Default)]
pub struct TJsonProtocolFactory;

impl ProtocolFactory for TJsonProtocolFactory {
    fn name(&self) -> &'static str {
        PROTOCOL
    }

    fn output_protocol<'a>(&self, buffer: &'a mut MemoryBuffer) -> Box<dyn OutputProtocol + 'a> {
        Box::new(TJsonOutputProtocol::new(buffer))
    }
}

fn type_name(ttype: TType) -> Result<&'static str, WireError> {
    Ok(match ttype {
        TType::Bool => "tf",
        TType::Byte => "i8",
        TType::I16 => "i16",
        TType::I32 => "i32",
        TType::I64 => "i64",
        TType::Double => "dbl",
        TType::String => "str",
        TType::Struct => "rec",
        TType::Map => "map",
        TType::List => "lst",
        TType::Set => "set",
        other => {
            return Err(WireError::UnsupportedTType {
                ttype: other,
                protocol: PROTOCOL,
            });
        }
    })
}

/// Separator state of the innermost JSON container being written.
#[derive(Debug, Clone, Copy)]
enum Context {
    Base,
    List { first: bool },
    Pair { first: bool, colon: bool },
}

impl Context {
    /// Separator to emit before the next item, advancing the state.
    fn advance(&mut self) -> Option<u8> {
        match self {
            Context::Base => None,
            Context::List { first } => {
                if *first {
                    *first = false;
                    None
                } else {
                    Some(b',')
                }
            }
            Context::Pair { first, colon } => {
                if *first {
                    *first = false;
                    *colon = true;
                    None
                } else {
                    let sep = if *colon { b':' } else { b',' };
                    *colon = !*colon;
                    Some(sep)
                }
            }
        }
    }

    /// Numbers in object-key position must be quoted.
    fn escape_num(&self) -> bool {
        matches!(self, Context::Pair { colon: true, .. })
    }
}

pub struct TJsonOutputProtocol<'a> {
    buf: &'a mut BytesMut,
    stack: Vec<Context>,
    context: Context,
}

impl<'a> TJsonOutputProtocol<'a> {
    pub fn new(buffer: &'a mut MemoryBuffer) -> Self {
        Self {
            buf: buffer.buf_mut(),
            stack: Vec::new(),
            context: Context::Base,
        }
    }

    fn push(&mut self, context: Context) {
        self.stack.push(self.context);
        self.context = context;
    }

    fn pop(&mut self) {
        self.context = self.stack.pop().unwrap_or(Context::Base);
    }

    fn separate(&mut self) {
        if let Some(sep) = self.context.advance() {
            self.buf.put_u8(sep);
        }
    }

    fn object_start(&mut self) {
        self.separate();
        self.buf.put_u8(b'{');
        self.push(Context::Pair {
            first: true,
            colon: false,
        });
    }

    fn object_end(&mut self) {
        self.pop();
        self.buf.put_u8(b'}');
    }

    fn array_start(&mut self) {
        self.separate();
        self.buf.put_u8(b'[');
        self.push(Context::List { first: true });
    }

    fn array_end(&mut self) {
        self.pop();
        self.buf.put_u8(b']');
    }

    fn json_string(&mut self, s: &str) -> Result<(), WireError> {
        self.separate();
        serde_json::to_writer((&mut *self.buf).writer(), s).map_err(|e| WireError::Json {
            detail: e.to_string(),
        })
    }

    fn json_number(&mut self, text: &str) {
        self.separate();
        let quote = self.context.escape_num();
        if quote {
            self.buf.put_u8(b'"');
        }
        self.buf.put_slice(text.as_bytes());
        if quote {
            self.buf.put_u8(b'"');
        }
    }

    fn container_begin(&mut self, elem: TType, size: usize) -> Result<(), WireError> {
        let name = type_name(elem)?;
        let size = checked_len(size)?;
        self.array_start();
        self.json_string(name)?;
        self.json_number(&size.to_string());
        Ok(())
    }
}

impl OutputProtocol for TJsonOutputProtocol<'_> {
    fn write_struct_begin(&mut self, _name: &str) -> Result<(), WireError> {
        self.object_start();
        Ok(())
    }

    fn write_struct_end(&mut self) -> Result<(), WireError> {
        self.object_end();
        Ok(())
    }

    fn write_field_begin(&mut self, _name: &str, ttype: TType, id: i16) -> Result<(), WireError> {
        let name = type_name(ttype)?;
        self.json_number(&id.to_string());
        self.object_start();
        self.json_string(name)
    }

    fn write_field_end(&mut self) -> Result<(), WireError> {
        self.object_end();
        Ok(())
    }

    fn write_field_stop(&mut self) -> Result<(), WireError> {
        Ok(())
    }

    fn write_map_begin(
        &mut self,
        key: TType,
        value: TType,
        size: usize,
    ) -> Result<(), WireError> {
        let key = type_name(key)?;
        let value = type_name(value)?;
        let size = checked_len(size)?;
        self.array_start();
        self.json_string(key)?;
        self.json_string(value)?;
        self.json_number(&size.to_string());
        self.object_start();
        Ok(())
    }

    fn write_map_end(&mut self) -> Result<(), WireError> {
        self.object_end();
        self.array_end();
        Ok(())
    }

    fn write_list_begin(&mut self, elem: TType, size: usize) -> Result<(), WireError> {
        self.container_begin(elem, size)
    }

    fn write_list_end(&mut self) -> Result<(), WireError> {
        self.array_end();
        Ok(())
    }

    fn write_set_begin(&mut self, elem: TType, size: usize) -> Result<(), WireError> {
        self.container_begin(elem, size)
    }

    fn write_set_end(&mut self) -> Result<(), WireError> {
        self.array_end();
        Ok(())
    }

    fn write_bool(&mut self, v: bool) -> Result<(), WireError> {
        self.json_number(if v { "1" } else { "0" });
        Ok(())
    }

    fn write_byte(&mut self, v: i8) -> Result<(), WireError> {
        self.json_number(&v.to_string());
        Ok(())
    }

    fn write_i16(&mut self, v: i16) -> Result<(), WireError> {
        self.json_number(&v.to_string());
        Ok(())
    }

    fn write_i32(&mut self, v: i32) -> Result<(), WireError> {
        self.json_number(&v.to_string());
        Ok(())
    }

    fn write_i64(&mut self, v: i64) -> Result<(), WireError> {
        self.json_number(&v.to_string());
        Ok(())
    }

    fn write_double(&mut self, v: f64) -> Result<(), WireError> {
        if v.is_nan() {
            self.json_string("NaN")
        } else if v.is_infinite() {
            self.json_string(if v > 0.0 { "Infinity" } else { "-Infinity" })
        } else {
            self.json_number(&format!("{v:?}"));
            Ok(())
        }
    }

    fn write_string(&mut self, v: &str) -> Result<(), WireError> {
        self.json_string(v)
    }
}
