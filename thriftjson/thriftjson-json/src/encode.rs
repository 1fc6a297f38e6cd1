//! Record to JSON encoding.
//!
//! Each struct becomes a JSON object holding only the fields whose value
//! differs from the field's declared default.

use serde_json::{Map, Number, Value as JsonValue};
use thriftjson_core::{Record, ThriftStruct, Value};

use crate::error::EncodeError;

/// Encode a record into a JSON object value.
pub fn record_to_json_value(record: &Record) -> Result<JsonValue, EncodeError> {
    tracing::debug!(struct_name = record.struct_name(), "encoding record to JSON");
    encode_record(record, record.struct_name())
}

/// Encode a record into compact JSON text.
pub fn record_to_json(record: &Record) -> Result<String, EncodeError> {
    let value = record_to_json_value(record)?;
    Ok(serde_json::to_string(&value)?)
}

/// Encode a record into indented JSON text.
pub fn record_to_json_pretty(record: &Record) -> Result<String, EncodeError> {
    let value = record_to_json_value(record)?;
    Ok(serde_json::to_string_pretty(&value)?)
}

pub fn to_json_value<T: ThriftStruct>(value: &T) -> Result<JsonValue, EncodeError> {
    record_to_json_value(&value.to_record()?)
}

pub fn to_json<T: ThriftStruct>(value: &T) -> Result<String, EncodeError> {
    record_to_json(&value.to_record()?)
}

fn encode_record(record: &Record, path: &str) -> Result<JsonValue, EncodeError> {
    let mut out = Map::new();
    for (field, value) in record.fields() {
        if *value == field.default {
            continue;
        }
        let field_path = format!("{path}.{}", field.name);
        out.insert(field.name.clone(), encode_value(value, &field_path)?);
    }
    Ok(JsonValue::Object(out))
}

fn encode_value(value: &Value, path: &str) -> Result<JsonValue, EncodeError> {
    Ok(match value {
        Value::Null => JsonValue::Null,
        Value::Bool(v) => JsonValue::Bool(*v),
        Value::Byte(v) => JsonValue::from(*v),
        Value::I16(v) => JsonValue::from(*v),
        Value::I32(v) => JsonValue::from(*v),
        Value::I64(v) => JsonValue::from(*v),
        Value::Double(v) => JsonValue::Number(finite_number(*v, path)?),
        Value::String(s) => JsonValue::String(s.to_string()),
        Value::Struct(record) => encode_record(record, path)?,
        Value::List(items) | Value::Set(items) => JsonValue::Array(
            items
                .iter()
                .enumerate()
                .map(|(i, item)| encode_value(item, &format!("{path}[{i}]")))
                .collect::<Result<Vec<_>, _>>()?,
        ),
        Value::Map(entries) => {
            let mut out = Map::with_capacity(entries.len());
            for (key, item) in entries {
                let key = encode_map_key(key, path)?;
                let item_path = format!("{path}{{{key}}}");
                out.insert(key, encode_value(item, &item_path)?);
            }
            JsonValue::Object(out)
        }
    })
}

/// JSON object keys are strings; scalar keys are rendered as text.
fn encode_map_key(key: &Value, path: &str) -> Result<String, EncodeError> {
    match key {
        Value::String(s) => Ok(s.to_string()),
        Value::Bool(v) => Ok(v.to_string()),
        Value::Byte(v) => Ok(v.to_string()),
        Value::I16(v) => Ok(v.to_string()),
        Value::I32(v) => Ok(v.to_string()),
        Value::I64(v) => Ok(v.to_string()),
        Value::Double(v) => Ok(finite_number(*v, path)?.to_string()),
        other => Err(EncodeError::NotSerializable {
            path: path.to_string(),
            reason: format!("{} map keys have no JSON form", other.variant_name()),
        }),
    }
}

fn finite_number(v: f64, path: &str) -> Result<Number, EncodeError> {
    Number::from_f64(v).ok_or_else(|| EncodeError::NotSerializable {
        path: path.to_string(),
        reason: format!("{v} is not a finite number"),
    })
}
