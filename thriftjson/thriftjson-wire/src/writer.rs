//! Walks a record's field specification and feeds it to an output protocol.

use bytes::Bytes;
use thriftjson_core::{FieldType, Record, TType, Value};

use crate::{
    error::WireError,
    protocol::{OutputProtocol, ProtocolFactory},
    transport::MemoryBuffer,
};

/// Write a record through `protocol`, skipping fields that hold [`Value::Null`].
pub fn write_record(record: &Record, protocol: &mut dyn OutputProtocol) -> Result<(), WireError> {
    write_struct(record, protocol, record.struct_name())
}

/// Write a record into a fresh buffer using a protocol built by `factory`.
pub fn write_record_to(
    record: &Record,
    factory: &dyn ProtocolFactory,
) -> Result<Bytes, WireError> {
    let mut buffer = MemoryBuffer::new();
    {
        let mut protocol = factory.output_protocol(&mut buffer);
        write_record(record, protocol.as_mut())?;
    }
    tracing::debug!(
        struct_name = record.struct_name(),
        protocol = factory.name(),
        bytes = buffer.len(),
        "wrote record to wire buffer"
    );
    Ok(buffer.into_bytes())
}

fn write_struct(
    record: &Record,
    protocol: &mut dyn OutputProtocol,
    path: &str,
) -> Result<(), WireError> {
    protocol.write_struct_begin(record.struct_name())?;
    for (field, value) in record.fields() {
        if value.is_null() {
            continue;
        }
        let field_path = format!("{path}.{}", field.name);
        let ttype = wire_type(&field.field_type, &field_path)?;
        protocol.write_field_begin(&field.name, ttype, field.id)?;
        write_value(value, &field.field_type, protocol, &field_path)?;
        protocol.write_field_end()?;
    }
    protocol.write_field_stop()?;
    protocol.write_struct_end()
}

fn write_value(
    value: &Value,
    field_type: &FieldType,
    protocol: &mut dyn OutputProtocol,
    path: &str,
) -> Result<(), WireError> {
    match (field_type, value) {
        (FieldType::Bool, Value::Bool(v)) => protocol.write_bool(*v),
        (FieldType::Byte, Value::Byte(v)) => protocol.write_byte(*v),
        (FieldType::I16, Value::I16(v)) => protocol.write_i16(*v),
        (FieldType::I32, Value::I32(v)) => protocol.write_i32(*v),
        (FieldType::I64, Value::I64(v)) => protocol.write_i64(*v),
        (FieldType::Double, Value::Double(v)) => protocol.write_double(*v),
        (FieldType::String, Value::String(v)) => protocol.write_string(v),
        (FieldType::Struct(_), Value::Struct(record)) => write_struct(record, protocol, path),
        (FieldType::List(elem), Value::List(items)) => {
            protocol.write_list_begin(wire_type(elem, path)?, items.len())?;
            write_items(items, elem, protocol, path)?;
            protocol.write_list_end()
        }
        (FieldType::Set(elem), Value::Set(items)) => {
            protocol.write_set_begin(wire_type(elem, path)?, items.len())?;
            write_items(items, elem, protocol, path)?;
            protocol.write_set_end()
        }
        (FieldType::Map { key, value: item }, Value::Map(entries)) => {
            protocol.write_map_begin(wire_type(key, path)?, wire_type(item, path)?, entries.len())?;
            for (i, (k, v)) in entries.iter().enumerate() {
                let entry_path = format!("{path}{{{i}}}");
                write_value(k, key, protocol, &entry_path)?;
                write_value(v, item, protocol, &entry_path)?;
            }
            protocol.write_map_end()
        }
        (FieldType::Unsupported(code), _) => Err(WireError::UnsupportedType {
            code: *code,
            path: path.to_string(),
        }),
        (expected, found) => Err(WireError::TypeMismatch {
            path: path.to_string(),
            expected: expected.type_name(),
            found: found.variant_name(),
        }),
    }
}

fn write_items(
    items: &[Value],
    elem: &FieldType,
    protocol: &mut dyn OutputProtocol,
    path: &str,
) -> Result<(), WireError> {
    for (i, item) in items.iter().enumerate() {
        write_value(item, elem, protocol, &format!("{path}[{i}]"))?;
    }
    Ok(())
}

fn wire_type(field_type: &FieldType, path: &str) -> Result<TType, WireError> {
    let unsupported = || WireError::UnsupportedType {
        code: field_type.code(),
        path: path.to_string(),
    };
    match field_type {
        FieldType::Unsupported(_) => Err(unsupported()),
        other => other.ttype().ok_or_else(unsupported),
    }
}
