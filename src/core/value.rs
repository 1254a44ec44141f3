use crate::core::{BehaviorError, Result};
use serde::Serialize;
use serde_json::Value as JsonValue;
use std::fmt;

/// A single record field slot.
///
/// `Text` holds raw JSON text as it sits in the table column; `Json` holds the
/// already-decoded structured value. The remaining variants cover the scalar
/// column types a record may expose alongside its JSON fields.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Integer(i64),
    Float(f64),
    Text(String),
    Boolean(bool),
    Json(JsonValue),
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "NULL",
            Self::Integer(_) => "INTEGER",
            Self::Float(_) => "FLOAT",
            Self::Text(_) => "TEXT",
            Self::Boolean(_) => "BOOLEAN",
            Self::Json(_) => "JSON",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_json(&self) -> Option<&JsonValue> {
        match self {
            Self::Json(j) => Some(j),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json(_))
    }

    /// Encode the value as a JSON string.
    pub fn to_json_text(&self) -> Result<String> {
        let json = self.to_json_value()?;
        serde_json::to_string(&json).map_err(|e| BehaviorError::Serialization(e.to_string()))
    }

    /// Convert the value into its `serde_json` representation.
    ///
    /// JSON has no NaN or Infinity, so non-finite floats are a serialization
    /// error rather than a silent `null`.
    pub fn to_json_value(&self) -> Result<JsonValue> {
        match self {
            Self::Null => Ok(JsonValue::Null),
            Self::Integer(i) => Ok(JsonValue::from(*i)),
            Self::Float(f) => serde_json::Number::from_f64(*f)
                .map(JsonValue::Number)
                .ok_or_else(|| {
                    BehaviorError::Serialization(format!("Cannot represent {} as JSON", f))
                }),
            Self::Text(s) => Ok(JsonValue::String(s.clone())),
            Self::Boolean(b) => Ok(JsonValue::Bool(*b)),
            Self::Json(j) => Ok(j.clone()),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => {
                if a.is_nan() && b.is_nan() {
                    return true;
                }
                (a - b).abs() < f64::EPSILON
            }
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Json(a), Self::Json(b)) => a == b,
            // Автоматическое преобразование между Integer и Float
            (Self::Integer(i), Self::Float(f)) | (Self::Float(f), Self::Integer(i)) => {
                (*i as f64 - f).abs() < f64::EPSILON
            }
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "NULL"),
            Self::Integer(i) => write!(f, "{}", i),
            Self::Float(fl) => write!(f, "{}", fl),
            Self::Text(s) => write!(f, "{}", s),
            Self::Boolean(b) => write!(f, "{}", b),
            Self::Json(j) => write!(f, "{}", j),
        }
    }
}

// Реализация From для удобного создания значений
impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Integer(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<JsonValue> for Value {
    fn from(j: JsonValue) -> Self {
        Self::Json(j)
    }
}
