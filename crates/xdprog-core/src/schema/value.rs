use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// One converted, validated field value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    UInt(u64),
    Int(i64),
    Enum { code: u64, label: &'static str },
    Text(String),
    Record(Record),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(v) => write!(f, "{v}"),
            Value::UInt(v) => write!(f, "{v}"),
            Value::Int(v) => write!(f, "{v}"),
            Value::Enum { code, label } => write!(f, "{label} ({code})"),
            Value::Text(v) => write!(f, "{v:?}"),
            Value::Record(record) => write!(f, "<{} record>", record.schema_name()),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Bool(v) => serializer.serialize_bool(*v),
            Value::UInt(v) => serializer.serialize_u64(*v),
            Value::Int(v) => serializer.serialize_i64(*v),
            Value::Enum { label, .. } => serializer.serialize_str(label),
            Value::Text(v) => serializer.serialize_str(v),
            Value::Record(record) => record.serialize(serializer),
        }
    }
}

/// An ordered, named collection of decoded field values.
///
/// Insertion order mirrors catalog declaration order, so the record
/// serializes as a JSON map whose keys follow the wire layout. The typed
/// accessors panic on a missing field or a kind mismatch: those indicate a
/// catalog/view inconsistency (a programming error), never bad input.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    schema_name: &'static str,
    fields: Vec<(&'static str, Value)>,
}

impl Record {
    pub(crate) fn with_capacity(schema_name: &'static str, capacity: usize) -> Self {
        Self {
            schema_name,
            fields: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, name: &'static str, value: Value) {
        self.fields.push((name, value));
    }

    /// Name of the schema this record was decoded with.
    pub fn schema_name(&self) -> &'static str {
        self.schema_name
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Value)> {
        self.fields.iter().map(|(name, value)| (*name, value))
    }

    /// Move a field value out of the record.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        let index = self.fields.iter().position(|(field, _)| *field == name)?;
        Some(self.fields.remove(index).1)
    }

    fn expect(&self, name: &str) -> &Value {
        match self.get(name) {
            Some(value) => value,
            None => panic!("field {name} missing from {} record", self.schema_name),
        }
    }

    /// # Panics
    /// If the field is missing or is not a boolean.
    pub fn flag(&self, name: &str) -> bool {
        match self.expect(name) {
            Value::Bool(v) => *v,
            other => panic!("field {name} of {} is not a boolean: {other}", self.schema_name),
        }
    }

    /// # Panics
    /// If the field is missing or is not an unsigned integer.
    pub fn uint(&self, name: &str) -> u64 {
        match self.expect(name) {
            Value::UInt(v) => *v,
            other => panic!("field {name} of {} is not unsigned: {other}", self.schema_name),
        }
    }

    /// # Panics
    /// If the field is missing or is not a signed integer.
    pub fn int(&self, name: &str) -> i64 {
        match self.expect(name) {
            Value::Int(v) => *v,
            other => panic!("field {name} of {} is not signed: {other}", self.schema_name),
        }
    }

    /// # Panics
    /// If the field is missing or is not an enumeration.
    pub fn enum_code(&self, name: &str) -> u64 {
        match self.expect(name) {
            Value::Enum { code, .. } => *code,
            other => panic!("field {name} of {} is not an enum: {other}", self.schema_name),
        }
    }

    /// # Panics
    /// If the field is missing or is not an enumeration.
    pub fn enum_label(&self, name: &str) -> &'static str {
        match self.expect(name) {
            Value::Enum { label, .. } => label,
            other => panic!("field {name} of {} is not an enum: {other}", self.schema_name),
        }
    }

    /// # Panics
    /// If the field is missing or is not text.
    pub fn text(&self, name: &str) -> &str {
        match self.expect(name) {
            Value::Text(v) => v,
            other => panic!("field {name} of {} is not text: {other}", self.schema_name),
        }
    }

    /// # Panics
    /// If the field is missing or is not a sub-record.
    pub fn record(&self, name: &str) -> &Record {
        match self.expect(name) {
            Value::Record(v) => v,
            other => panic!("field {name} of {} is not a record: {other}", self.schema_name),
        }
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
