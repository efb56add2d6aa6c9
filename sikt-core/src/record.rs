//! ## sikt-core::record
//! **Typed record model with a strict deserialization boundary**
//!
//! The upstream data is ad hoc JSON; here every record has a declared
//! shape. Fields absent from the schema are rejected at the boundary,
//! absent optional fields are defaulted. Records are immutable once
//! built; every transform derives a new value.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::RecordError;

/// One data item. `value` stays schema-free on purpose: upstream
/// producers put anything there and the pipeline never inspects it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Record {
    pub id: u64,
    pub name: String,

    /// Opaque payload, passed through untouched.
    #[serde(default)]
    pub value: Value,

    /// Records without an `active` field are treated as inactive.
    #[serde(default)]
    pub active: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

impl Record {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            value: Value::Null,
            active: false,
            price: None,
        }
    }

    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        self.value = value.into();
        self
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }
}

/// Strict subset of a [`Record`]: exactly `{id, name, value}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Projection {
    pub id: u64,
    pub name: String,
    pub value: Value,
}

impl From<&Record> for Projection {
    fn from(record: &Record) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
            value: record.value.clone(),
        }
    }
}

/// Shallow copy of a [`Record`] annotated with a `processed` flag.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessedRecord {
    #[serde(flatten)]
    pub record: Record,
    pub processed: bool,
}

impl From<&Record> for ProcessedRecord {
    fn from(record: &Record) -> Self {
        Self {
            record: record.clone(),
            processed: true,
        }
    }
}

/// Decode a JSON array of records, enforcing the schema boundary.
pub fn records_from_json(json: &str) -> Result<Vec<Record>, RecordError> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decode_defaults_absent_fields() {
        let records = records_from_json(r#"[{"id": 1, "name": "Test"}]"#).unwrap();
        assert_eq!(records.len(), 1);
        assert!(!records[0].active);
        assert_eq!(records[0].value, Value::Null);
        assert_eq!(records[0].price, None);
    }

    #[test]
    fn decode_rejects_unknown_fields() {
        let result = records_from_json(r#"[{"id": 1, "name": "Test", "color": "red"}]"#);
        assert!(matches!(result, Err(RecordError::Decode(_))));
    }

    #[test]
    fn projection_carries_exact_subset() {
        let record = Record::new(7, "Widget").with_value(json!(5)).with_active(true);
        let projection = Projection::from(&record);

        let encoded = serde_json::to_value(&projection).unwrap();
        let fields: Vec<&String> = encoded.as_object().unwrap().keys().collect();
        assert_eq!(fields, ["id", "name", "value"]);
    }

    #[test]
    fn processed_record_keeps_source_fields() {
        let record = Record::new(1, "Test").with_active(true);
        let processed = ProcessedRecord::from(&record);

        let encoded = serde_json::to_value(&processed).unwrap();
        assert_eq!(encoded["id"], json!(1));
        assert_eq!(encoded["name"], json!("Test"));
        assert_eq!(encoded["active"], json!(true));
        assert_eq!(encoded["processed"], json!(true));
    }
}
