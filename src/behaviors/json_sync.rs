use super::{Behavior, LifecyclePhase};
use crate::core::{BehaviorError, Result, Value};
use crate::record::Record;

/// Keeps a structured record property and a JSON text table field in sync.
///
/// After a record is found, the JSON text in the table field is decoded and
/// assigned to the property. Before an insert or update, the property is
/// encoded back to JSON text and written into the table field.
///
/// If the table field name matches the property name, `jsonField` can be
/// omitted:
///
/// ```
/// use jsonsync::{BehaviorRegistry, JsonSyncBehavior, LifecyclePhase, MemoryRecord, Record, Value};
/// use serde_json::json;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut registry = BehaviorRegistry::new();
/// registry.register(Box::new(JsonSyncBehavior::with_json_field("meta", "meta_json")));
///
/// let mut record = MemoryRecord::new("users")
///     .with_field("meta", Value::Json(json!({"a": 1})))
///     .with_field("meta_json", Value::Null);
///
/// registry.dispatch(LifecyclePhase::BeforeInsert, &mut record)?;
/// assert_eq!(record.get_field("meta_json").unwrap().as_str(), Some(r#"{"a":1}"#));
/// # Ok(())
/// # }
/// ```
pub struct JsonSyncBehavior {
    property: String,
    json_field: Option<String>,
}

impl JsonSyncBehavior {
    /// Sync `property` with the table field of the same name.
    pub fn new(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            json_field: None,
        }
    }

    /// Sync `property` with a table field whose name differs from it.
    pub fn with_json_field(property: impl Into<String>, json_field: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            json_field: Some(json_field.into()),
        }
    }

    fn on_after_find(&self, record: &mut dyn Record) -> Result<()> {
        let json_field = self.resolve_json_field(record)?;

        let loaded = match record.get_field(&json_field) {
            // Already decoded, nothing to convert.
            Some(Value::Json(_)) => return Ok(()),
            Some(Value::Text(raw)) => Value::Json(serde_json::from_str(raw)?),
            Some(Value::Null) | None => Value::Null,
            // Scalar columns are valid JSON scalars as-is.
            Some(other) => Value::Json(other.to_json_value()?),
        };

        record.set_field(&self.property, loaded);
        Ok(())
    }

    fn on_before_save(&self, record: &mut dyn Record) -> Result<()> {
        let json_field = self.resolve_json_field(record)?;

        let property_value = record.get_field(&self.property).ok_or_else(|| {
            BehaviorError::FieldNotFound(self.property.clone(), record.table_name().to_string())
        })?;
        let encoded = property_value.to_json_text()?;

        record.set_field(&json_field, Value::Text(encoded));
        Ok(())
    }

    /// Effective table field name: the configured override or the property
    /// name. The record type must actually expose the field.
    fn resolve_json_field(&self, record: &dyn Record) -> Result<String> {
        let json_field = self.json_field.as_deref().unwrap_or(&self.property);

        if !record.has_field(json_field) {
            return Err(BehaviorError::FieldNotFound(
                json_field.to_string(),
                record.table_name().to_string(),
            ));
        }
        Ok(json_field.to_string())
    }
}

impl Behavior for JsonSyncBehavior {
    fn name(&self) -> &'static str {
        "JsonSync"
    }

    fn phases(&self) -> &'static [LifecyclePhase] {
        &[
            LifecyclePhase::AfterFind,
            LifecyclePhase::BeforeInsert,
            LifecyclePhase::BeforeUpdate,
        ]
    }

    fn apply(&self, phase: LifecyclePhase, record: &mut dyn Record) -> Result<()> {
        match phase {
            LifecyclePhase::AfterFind => self.on_after_find(record),
            LifecyclePhase::BeforeInsert | LifecyclePhase::BeforeUpdate => {
                self.on_before_save(record)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::MemoryRecord;
    use serde_json::json;

    #[test]
    fn test_default_field_name_is_property_name() {
        let behavior = JsonSyncBehavior::new("meta");
        let record = MemoryRecord::new("users").with_field("meta", Value::Null);
        assert_eq!(behavior.resolve_json_field(&record).unwrap(), "meta");
    }

    #[test]
    fn test_resolve_fails_on_missing_field() {
        let behavior = JsonSyncBehavior::with_json_field("meta", "meta_json");
        let record = MemoryRecord::new("users").with_field("id", 1i64);

        let err = behavior.resolve_json_field(&record).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("meta_json"));
        assert!(msg.contains("users"));
    }

    #[test]
    fn test_after_find_skips_structured_field() {
        let behavior = JsonSyncBehavior::new("meta");
        let structured = Value::Json(json!({"a": 1}));
        let mut record = MemoryRecord::new("users").with_field("meta", structured.clone());

        behavior.on_after_find(&mut record).unwrap();
        assert_eq!(record.get_field("meta"), Some(&structured));
    }

    #[test]
    fn test_after_find_rejects_malformed_json() {
        let behavior = JsonSyncBehavior::new("meta");
        let mut record = MemoryRecord::new("users").with_field("meta", "{not json");

        let err = behavior.on_after_find(&mut record).unwrap_err();
        assert!(matches!(err, BehaviorError::Deserialization(_)));
    }
}
