//! JSON to record decoding, driven by the target type's field specification.

use std::sync::Arc;

use serde_json::Value as JsonValue;
use thriftjson_core::{FieldType, Record, StructSpec, ThriftStruct, Value};

use crate::{error::DecodeError, policy::BoolPolicy};

/// Decode JSON text into a default-configured record of the given type.
pub fn json_to_record(json: &str, spec: &Arc<StructSpec>) -> Result<Record, DecodeError> {
    JsonDecoder::new().decode_str(json, spec)
}

/// Decode an already-parsed JSON value into a record of the given type.
pub fn json_value_to_record(
    json: &JsonValue,
    spec: &Arc<StructSpec>,
) -> Result<Record, DecodeError> {
    JsonDecoder::new().decode_value(json, spec)
}

pub fn from_json<T: ThriftStruct>(json: &str) -> Result<T, DecodeError> {
    JsonDecoder::new().decode(json)
}

pub fn from_json_value<T: ThriftStruct>(json: &JsonValue) -> Result<T, DecodeError> {
    let record = json_value_to_record(json, &T::struct_spec())?;
    Ok(T::from_record(&record)?)
}

/// Stateless decoder turning JSON into [`Record`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDecoder {
    bool_policy: BoolPolicy,
}

impl JsonDecoder {
    pub fn new() -> Self {
        Self::new_with_bool_policy(BoolPolicy::Strict)
    }

    pub fn new_with_bool_policy(bool_policy: BoolPolicy) -> Self {
        Self { bool_policy }
    }

    pub fn bool_policy(&self) -> BoolPolicy {
        self.bool_policy
    }

    pub fn decode_str(&self, json: &str, spec: &Arc<StructSpec>) -> Result<Record, DecodeError> {
        let parsed: JsonValue = serde_json::from_str(json)?;
        self.decode_value(&parsed, spec)
    }

    pub fn decode_value(
        &self,
        json: &JsonValue,
        spec: &Arc<StructSpec>,
    ) -> Result<Record, DecodeError> {
        tracing::debug!(struct_name = %spec.name, "decoding JSON into record");
        self.decode_struct(json, spec, &spec.name)
    }

    pub fn decode<T: ThriftStruct>(&self, json: &str) -> Result<T, DecodeError> {
        let record = self.decode_str(json, &T::struct_spec())?;
        Ok(T::from_record(&record)?)
    }

    fn decode_struct(
        &self,
        json: &JsonValue,
        spec: &Arc<StructSpec>,
        path: &str,
    ) -> Result<Record, DecodeError> {
        let JsonValue::Object(object) = json else {
            return Err(mismatch(path, "object", json));
        };

        let mut record = Record::new(Arc::clone(spec));
        for field in spec.fields() {
            let Some(raw) = object.get(&field.name) else {
                continue;
            };
            let field_path = format!("{path}.{}", field.name);
            let value = self.convert(raw, &field.field_type, &field_path)?;
            record.set(&field.name, value)?;
        }

        if tracing::enabled!(tracing::Level::TRACE) {
            for key in object.keys().filter(|key| spec.field(key).is_none()) {
                tracing::trace!(struct_name = %spec.name, key = %key, "ignoring JSON key not in field specification");
            }
        }

        Ok(record)
    }

    fn convert(
        &self,
        json: &JsonValue,
        field_type: &FieldType,
        path: &str,
    ) -> Result<Value, DecodeError> {
        if json.is_null() && !matches!(field_type, FieldType::Unsupported(_)) {
            return Ok(Value::Null);
        }

        Ok(match field_type {
            FieldType::Struct(spec) => Value::Struct(self.decode_struct(json, spec, path)?),
            FieldType::List(elem) => Value::List(self.convert_items(json, elem, path)?),
            FieldType::Set(elem) => Value::set(self.convert_items(json, elem, path)?),
            FieldType::Map { key, value } => {
                let JsonValue::Object(object) = json else {
                    return Err(mismatch(path, "object", json));
                };
                let mut entries = Vec::with_capacity(object.len());
                for (raw_key, raw_value) in object {
                    let item_path = format!("{path}{{{raw_key}}}");
                    let k = self.convert(&JsonValue::String(raw_key.clone()), key, &item_path)?;
                    let v = self.convert(raw_value, value, &item_path)?;
                    entries.push((k, v));
                }
                Value::map(entries)
            }
            FieldType::String => match json {
                JsonValue::String(s) => Value::string(s),
                JsonValue::Number(n) => Value::string(n.to_string()),
                JsonValue::Bool(b) => Value::string(b.to_string()),
                other => return Err(mismatch(path, "string", other)),
            },
            FieldType::Double => Value::Double(to_f64(json, path)?),
            FieldType::Byte => {
                let v = to_i64(json, "byte", path)?;
                Value::Byte(narrow(v, "byte", path)?)
            }
            FieldType::I16 => {
                let v = to_i64(json, "i16", path)?;
                Value::I16(narrow(v, "i16", path)?)
            }
            FieldType::I32 => {
                let v = to_i64(json, "i32", path)?;
                Value::I32(narrow(v, "i32", path)?)
            }
            FieldType::I64 => Value::I64(to_i64(json, "i64", path)?),
            FieldType::Bool => Value::Bool(self.coerce_bool(json, path)?),
            FieldType::Unsupported(tag) => {
                return Err(DecodeError::UnrecognizedFieldType {
                    tag: *tag,
                    path: path.to_string(),
                });
            }
        })
    }

    fn convert_items(
        &self,
        json: &JsonValue,
        elem: &FieldType,
        path: &str,
    ) -> Result<Vec<Value>, DecodeError> {
        let JsonValue::Array(items) = json else {
            return Err(mismatch(path, "array", json));
        };
        items
            .iter()
            .enumerate()
            .map(|(i, item)| self.convert(item, elem, &format!("{path}[{i}]")))
            .collect()
    }

    fn coerce_bool(&self, json: &JsonValue, path: &str) -> Result<bool, DecodeError> {
        match self.bool_policy {
            BoolPolicy::Strict => match json {
                JsonValue::Bool(b) => Ok(*b),
                JsonValue::Number(n) => Ok(n.as_f64().is_some_and(|v| v != 0.0)),
                JsonValue::String(s) => match s.to_ascii_lowercase().as_str() {
                    "true" | "1" => Ok(true),
                    "false" | "0" => Ok(false),
                    _ => Err(mismatch(path, "boolean", json)),
                },
                other => Err(mismatch(path, "boolean", other)),
            },
            BoolPolicy::Truthy => Ok(match json {
                JsonValue::Null => false,
                JsonValue::Bool(b) => *b,
                JsonValue::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
                JsonValue::String(s) => !s.is_empty(),
                JsonValue::Array(items) => !items.is_empty(),
                JsonValue::Object(object) => !object.is_empty(),
            }),
        }
    }
}

fn to_f64(json: &JsonValue, path: &str) -> Result<f64, DecodeError> {
    let conversion_error = || DecodeError::NumericConversion {
        path: path.to_string(),
        target: "double",
        value: json.to_string(),
    };
    match json {
        JsonValue::Number(n) => n.as_f64().ok_or_else(conversion_error),
        JsonValue::String(s) => s.trim().parse::<f64>().map_err(|_| conversion_error()),
        JsonValue::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
        _ => Err(conversion_error()),
    }
}

/// Integer view of a JSON value. Floats truncate toward zero.
fn to_i64(json: &JsonValue, target: &'static str, path: &str) -> Result<i64, DecodeError> {
    let out_of_range = || DecodeError::IntegerOutOfRange {
        path: path.to_string(),
        target,
        value: json.to_string(),
    };
    match json {
        JsonValue::Number(n) => {
            if let Some(v) = n.as_i64() {
                Ok(v)
            } else if n.is_u64() {
                Err(out_of_range())
            } else {
                let f = n.as_f64().ok_or_else(out_of_range)?.trunc();
                if f >= i64::MIN as f64 && f < i64::MAX as f64 {
                    Ok(f as i64)
                } else {
                    Err(out_of_range())
                }
            }
        }
        JsonValue::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| DecodeError::NumericConversion {
                path: path.to_string(),
                target,
                value: json.to_string(),
            }),
        JsonValue::Bool(b) => Ok(i64::from(*b)),
        _ => Err(DecodeError::NumericConversion {
            path: path.to_string(),
            target,
            value: json.to_string(),
        }),
    }
}

fn narrow<T: TryFrom<i64>>(v: i64, target: &'static str, path: &str) -> Result<T, DecodeError> {
    T::try_from(v).map_err(|_| DecodeError::IntegerOutOfRange {
        path: path.to_string(),
        target,
        value: v.to_string(),
    })
}

fn mismatch(path: &str, expected: &'static str, found: &JsonValue) -> DecodeError {
    DecodeError::TypeMismatch {
        path: path.to_string(),
        expected,
        found: json_kind(found),
    }
}

fn json_kind(json: &JsonValue) -> &'static str {
    match json {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}
