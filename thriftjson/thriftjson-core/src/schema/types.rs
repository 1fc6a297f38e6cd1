use std::{
    fmt::{Display, Formatter, Result},
    sync::Arc,
};

use crate::{ttype::TType, value::Value};

/// Semantic type of a field, with the auxiliary type information the
/// converters need to walk nested values.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldType {
    Bool,
    Byte,
    I16,
    I32,
    I64,
    Double,
    String,
    Struct(Arc<StructSpec>),
    List(Box<FieldType>),
    Set(Box<FieldType>),
    Map {
        key: Box<FieldType>,
        value: Box<FieldType>,
    },
    /// A type code the converters do not handle (`void`, `utf16`, or a code
    /// outside the Thrift type table).
    Unsupported(u8),
}

impl FieldType {
    pub fn list(element: FieldType) -> Self {
        Self::List(Box::new(element))
    }

    pub fn set(element: FieldType) -> Self {
        Self::Set(Box::new(element))
    }

    pub fn map(key: FieldType, value: FieldType) -> Self {
        Self::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    /// Wire type tag of this field type. Always `None` for
    /// [`FieldType::Unsupported`], even when its code names a Thrift type:
    /// such a field carries no type info to write a value with.
    pub fn ttype(&self) -> Option<TType> {
        Some(match self {
            FieldType::Bool => TType::Bool,
            FieldType::Byte => TType::Byte,
            FieldType::I16 => TType::I16,
            FieldType::I32 => TType::I32,
            FieldType::I64 => TType::I64,
            FieldType::Double => TType::Double,
            FieldType::String => TType::String,
            FieldType::Struct(_) => TType::Struct,
            FieldType::List(_) => TType::List,
            FieldType::Set(_) => TType::Set,
            FieldType::Map { .. } => TType::Map,
            FieldType::Unsupported(_) => return None,
        })
    }

    /// Numeric type code, including codes of unsupported types.
    pub fn code(&self) -> u8 {
        match self {
            FieldType::Unsupported(code) => *code,
            other => other.ttype().map_or(0, TType::code),
        }
    }

    pub fn is_primitive(&self) -> bool {
        !matches!(
            self,
            FieldType::Struct(_) | FieldType::List(_) | FieldType::Set(_) | FieldType::Map { .. }
        )
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::Unsupported(_) => "unsupported",
            other => other.ttype().map_or("unsupported", TType::name),
        }
    }

    /// The zero-value a generated struct would give a required field of this type.
    pub fn zero_value(&self) -> Value {
        match self {
            FieldType::Bool => Value::Bool(false),
            FieldType::Byte => Value::Byte(0),
            FieldType::I16 => Value::I16(0),
            FieldType::I32 => Value::I32(0),
            FieldType::I64 => Value::I64(0),
            FieldType::Double => Value::Double(0.0),
            FieldType::String => Value::string(""),
            FieldType::List(_) => Value::List(Vec::new()),
            FieldType::Set(_) => Value::Set(Vec::new()),
            FieldType::Map { .. } => Value::Map(Vec::new()),
            FieldType::Struct(_) | FieldType::Unsupported(_) => Value::Null,
        }
    }
}

/// One entry of a field specification: `(id, type, name, default)`.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub id: i16,
    pub name: String,
    pub field_type: FieldType,
    pub default: Value,
}

impl FieldSpec {
    /// Optional field whose default is [`Value::Null`].
    pub fn new(id: i16, name: impl Into<String>, field_type: FieldType) -> Self {
        Self::with_default(id, name, field_type, Value::Null)
    }

    pub fn with_default(
        id: i16,
        name: impl Into<String>,
        field_type: FieldType,
        default: Value,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            field_type,
            default,
        }
    }
}

/// Field specification of one record type.
///
/// Entries are kept in declaration order. `None` entries are gaps left by the
/// IDL compiler for unused field ids and are skipped by every traversal.
#[derive(Debug, Clone, PartialEq)]
pub struct StructSpec {
    pub name: String,
    entries: Vec<Option<FieldSpec>>,
}

impl StructSpec {
    pub fn new(name: impl Into<String>, entries: Vec<Option<FieldSpec>>) -> Self {
        Self {
            name: name.into(),
            entries,
        }
    }

    /// Spec without gaps.
    pub fn from_fields(name: impl Into<String>, fields: Vec<FieldSpec>) -> Self {
        Self::new(name, fields.into_iter().map(Some).collect())
    }

    pub fn into_arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Raw entries, gaps included.
    pub fn entries(&self) -> &[Option<FieldSpec>] {
        &self.entries
    }

    pub fn fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.entries.iter().flatten()
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| entry.as_ref().is_some_and(|f| f.name == name))
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields().find(|f| f.name == name)
    }

    pub fn field_by_id(&self, id: i16) -> Option<&FieldSpec> {
        self.fields().find(|f| f.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.fields().next().is_none()
    }
}

impl Display for StructSpec {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = super::format_struct_spec(self)?;
        f.write_str(&text)
    }
}
