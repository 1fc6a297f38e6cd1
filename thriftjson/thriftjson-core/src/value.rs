//! In-memory representation of Thrift field values.

use std::{
    collections::{HashMap, HashSet, hash_map::Entry},
    sync::Arc,
};

use crate::{error::ValueTypeError, record::Record};

/// Value held by a record field.
///
/// `Null` marks an optional field that is not set. `Set` and `Map` are kept as
/// vectors so that doubles and records can be members; their constructors
/// enforce uniqueness.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Byte(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Double(f64),
    String(Arc<str>),
    Struct(Record),
    List(Vec<Value>),
    Set(Vec<Value>),
    Map(Vec<(Value, Value)>),
}

impl Value {
    pub fn string(s: impl AsRef<str>) -> Self {
        Self::String(Arc::from(s.as_ref()))
    }

    /// Build a set, dropping later duplicates and keeping first-seen order.
    pub fn set(items: impl IntoIterator<Item = Value>) -> Self {
        let items = items.into_iter();
        let mut out: Vec<Value> = Vec::with_capacity(items.size_hint().0);
        let mut seen: HashSet<ScalarKey> = HashSet::new();
        for item in items {
            let fresh = match ScalarKey::of(&item) {
                Some(key) => seen.insert(key),
                None => !out.contains(&item),
            };
            if fresh {
                out.push(item);
            }
        }
        Self::Set(out)
    }

    /// Build a map; a repeated key overwrites the earlier entry's value.
    pub fn map(entries: impl IntoIterator<Item = (Value, Value)>) -> Self {
        let entries = entries.into_iter();
        let mut out: Vec<(Value, Value)> = Vec::with_capacity(entries.size_hint().0);
        let mut slots: HashMap<ScalarKey, usize> = HashMap::new();
        for (key, value) in entries {
            let slot = match ScalarKey::of(&key) {
                Some(scalar) => match slots.entry(scalar) {
                    Entry::Occupied(e) => Some(*e.get()),
                    Entry::Vacant(e) => {
                        e.insert(out.len());
                        None
                    }
                },
                None => out.iter().position(|(k, _)| *k == key),
            };
            match slot {
                Some(idx) => out[idx].1 = value,
                None => out.push((key, value)),
            }
        }
        Self::Map(out)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn try_bool(&self) -> Result<Option<bool>, ValueTypeError> {
        match self {
            Value::Bool(v) => Ok(Some(*v)),
            Value::Null => Ok(None),
            _ => Err(self.type_mismatch("Bool")),
        }
    }

    pub fn try_i8(&self) -> Result<Option<i8>, ValueTypeError> {
        match self {
            Value::Byte(v) => Ok(Some(*v)),
            Value::Null => Ok(None),
            _ => Err(self.type_mismatch("Byte")),
        }
    }

    pub fn try_i16(&self) -> Result<Option<i16>, ValueTypeError> {
        match self {
            Value::I16(v) => Ok(Some(*v)),
            Value::Null => Ok(None),
            _ => Err(self.type_mismatch("I16")),
        }
    }

    pub fn try_i32(&self) -> Result<Option<i32>, ValueTypeError> {
        match self {
            Value::I32(v) => Ok(Some(*v)),
            Value::Null => Ok(None),
            _ => Err(self.type_mismatch("I32")),
        }
    }

    pub fn try_i64(&self) -> Result<Option<i64>, ValueTypeError> {
        match self {
            Value::I64(v) => Ok(Some(*v)),
            Value::Null => Ok(None),
            _ => Err(self.type_mismatch("I64")),
        }
    }

    pub fn try_f64(&self) -> Result<Option<f64>, ValueTypeError> {
        match self {
            Value::Double(v) => Ok(Some(*v)),
            Value::Null => Ok(None),
            _ => Err(self.type_mismatch("Double")),
        }
    }

    pub fn try_str(&self) -> Result<Option<&str>, ValueTypeError> {
        match self {
            Value::String(v) => Ok(Some(v.as_ref())),
            Value::Null => Ok(None),
            _ => Err(self.type_mismatch("String")),
        }
    }

    pub fn try_struct(&self) -> Result<Option<&Record>, ValueTypeError> {
        match self {
            Value::Struct(v) => Ok(Some(v)),
            Value::Null => Ok(None),
            _ => Err(self.type_mismatch("Struct")),
        }
    }

    pub fn try_list(&self) -> Result<Option<&[Value]>, ValueTypeError> {
        match self {
            Value::List(v) => Ok(Some(v)),
            Value::Null => Ok(None),
            _ => Err(self.type_mismatch("List")),
        }
    }

    pub fn try_set(&self) -> Result<Option<&[Value]>, ValueTypeError> {
        match self {
            Value::Set(v) => Ok(Some(v)),
            Value::Null => Ok(None),
            _ => Err(self.type_mismatch("Set")),
        }
    }

    pub fn try_map(&self) -> Result<Option<&[(Value, Value)]>, ValueTypeError> {
        match self {
            Value::Map(v) => Ok(Some(v)),
            Value::Null => Ok(None),
            _ => Err(self.type_mismatch("Map")),
        }
    }

    pub fn type_mismatch(&self, expected: impl Into<String>) -> ValueTypeError {
        ValueTypeError::new(expected, self.variant_name())
    }

    pub fn variant_name(&self) -> &'static str {
        match self {
            Value::Null => "Null",
            Value::Bool(_) => "Bool",
            Value::Byte(_) => "Byte",
            Value::I16(_) => "I16",
            Value::I32(_) => "I32",
            Value::I64(_) => "I64",
            Value::Double(_) => "Double",
            Value::String(_) => "String",
            Value::Struct(_) => "Struct",
            Value::List(_) => "List",
            Value::Set(_) => "Set",
            Value::Map(_) => "Map",
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i8> for Value {
    fn from(v: i8) -> Self {
        Value::Byte(v)
    }
}

impl From<i16> for Value {
    fn from(v: i16) -> Self {
        Value::I16(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::I32(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::I64(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Double(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::string(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(Arc::from(v))
    }
}

impl From<Record> for Value {
    fn from(v: Record) -> Self {
        Value::Struct(v)
    }
}

/// Hashable projection of scalar values, agreeing with `Value`'s equality:
/// variants stay distinct, `-0.0` folds onto `0.0`, and NaN has no key since
/// it never equals anything.
#[derive(Debug, PartialEq, Eq, Hash)]
enum ScalarKey {
    Bool(bool),
    Byte(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Double(u64),
    String(Arc<str>),
}

impl ScalarKey {
    fn of(value: &Value) -> Option<Self> {
        Some(match value {
            Value::Bool(v) => Self::Bool(*v),
            Value::Byte(v) => Self::Byte(*v),
            Value::I16(v) => Self::I16(*v),
            Value::I32(v) => Self::I32(*v),
            Value::I64(v) => Self::I64(*v),
            Value::Double(v) if v.is_nan() => return None,
            Value::Double(v) => Self::Double(if *v == 0.0 { 0 } else { v.to_bits() }),
            Value::String(s) => Self::String(Arc::clone(s)),
            _ => return None,
        })
    }
}
