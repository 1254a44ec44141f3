use crate::core::Value;
use std::collections::HashMap;

/// Minimal capability surface a host record must expose for behaviors to run
/// against it.
///
/// A record is one in-memory table row: named attributes mapped to columns,
/// addressable by name. Behaviors depend only on this trait, never on a
/// concrete record type, so any compliant row representation can host them.
pub trait Record {
    /// Name of the table this record type is mapped to.
    fn table_name(&self) -> &str;

    /// Does the record type expose an attribute with this name?
    fn has_field(&self, name: &str) -> bool;

    fn get_field(&self, name: &str) -> Option<&Value>;

    fn set_field(&mut self, name: &str, value: Value);
}

/// Map-backed `Record` implementation.
///
/// Fields must be declared up front (`with_field`), mirroring a table schema:
/// a declared field may hold `Value::Null`, an undeclared one does not exist
/// and fails `has_field`.
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryRecord {
    table: String,
    fields: HashMap<String, Value>,
}

impl MemoryRecord {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            fields: HashMap::new(),
        }
    }

    /// Declare a field with an initial value.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }
}

impl Record for MemoryRecord {
    fn table_name(&self) -> &str {
        &self.table
    }

    fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    fn get_field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    fn set_field(&mut self, name: &str, value: Value) {
        self.fields.insert(name.to_string(), value);
    }
}
