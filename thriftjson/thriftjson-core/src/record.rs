//! Record instances and the contract implemented by generated struct types.

use std::{fmt, sync::Arc};

use crate::{
    error::{RecordError, ValueTypeError},
    schema::{FieldSpec, StructSpec},
    value::Value,
};

/// Instance of a record type: one value slot per field specification entry.
///
/// Slots are indexed by entry position, so field access by name is a lookup in
/// the `StructSpec` followed by an index into the slot array. Gap entries own a slot
/// that always holds [`Value::Null`].
#[derive(Clone)]
pub struct Record {
    spec: Arc<StructSpec>,
    values: Vec<Value>,
}

impl Record {
    /// Default instance: every field holds its declared default.
    pub fn new(spec: Arc<StructSpec>) -> Self {
        let values = spec
            .entries()
            .iter()
            .map(|entry| entry.as_ref().map_or(Value::Null, |f| f.default.clone()))
            .collect();
        Self { spec, values }
    }

    pub fn spec(&self) -> &Arc<StructSpec> {
        &self.spec
    }

    pub fn struct_name(&self) -> &str {
        &self.spec.name
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.spec.position(name).map(|idx| &self.values[idx])
    }

    pub fn get_by_id(&self, id: i16) -> Option<&Value> {
        self.spec
            .entries()
            .iter()
            .position(|entry| entry.as_ref().is_some_and(|f| f.id == id))
            .map(|idx| &self.values[idx])
    }

    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<(), RecordError> {
        let idx = self.spec.position(name).ok_or_else(|| self.unknown_field(name))?;
        self.values[idx] = value.into();
        Ok(())
    }

    /// Builder form of [`Record::set`].
    pub fn with(mut self, name: &str, value: impl Into<Value>) -> Result<Self, RecordError> {
        self.set(name, value)?;
        Ok(self)
    }

    /// Whether the named field still equals its declared default.
    pub fn is_default(&self, name: &str) -> Result<bool, RecordError> {
        let idx = self.spec.position(name).ok_or_else(|| self.unknown_field(name))?;
        let field = self.spec.entries()[idx]
            .as_ref()
            .ok_or_else(|| self.unknown_field(name))?;
        Ok(self.values[idx] == field.default)
    }

    /// Non-gap fields paired with their current values, in spec order.
    pub fn fields(&self) -> impl Iterator<Item = (&FieldSpec, &Value)> {
        self.spec
            .entries()
            .iter()
            .zip(&self.values)
            .filter_map(|(entry, value)| entry.as_ref().map(|f| (f, value)))
    }

    /// Read a field through one of the `Value::try_*` accessors, attaching the
    /// struct and field name to any mismatch.
    pub fn extract<'a, T>(
        &'a self,
        name: &str,
        accessor: impl FnOnce(&'a Value) -> Result<Option<T>, ValueTypeError>,
    ) -> Result<Option<T>, RecordError> {
        let value = self.get(name).ok_or_else(|| self.unknown_field(name))?;
        accessor(value).map_err(|source| RecordError::FieldType {
            struct_name: self.spec.name.clone(),
            field: name.to_string(),
            source,
        })
    }

    fn unknown_field(&self, name: &str) -> RecordError {
        RecordError::UnknownField {
            struct_name: self.spec.name.clone(),
            field: name.to_string(),
        }
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.spec.name == other.spec.name && self.values == other.values
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct(&self.spec.name);
        for (field, value) in self.fields() {
            s.field(&field.name, value);
        }
        s.finish()
    }
}

/// Contract implemented by typed structs emitted from an IDL.
///
/// `struct_spec` describes the type's fields; generic code reads and writes
/// instances through [`Record`]. `to_record` reports a field name missing
/// from `struct_spec` instead of dropping the value.
pub trait ThriftStruct: Sized {
    fn struct_spec() -> Arc<StructSpec>;

    fn to_record(&self) -> Result<Record, RecordError>;

    fn from_record(record: &Record) -> Result<Self, RecordError>;

    /// Fresh default instance as a record.
    fn default_record() -> Record {
        Record::new(Self::struct_spec())
    }
}
