use serde_json::{Map, Value};
use uuid::Uuid;

/// Read view over one profile row image as carried in a change event.
///
/// The backing store is duck-typed from our side: fields may be missing, null,
/// or hold a different shape than expected. Every accessor here degrades to
/// "absent" instead of failing, so the builder never has to branch on storage
/// quirks.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileRecord {
    fields: Map<String, Value>,
}

impl ProfileRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Raw field value; `Null` when the field is absent.
    ///
    /// Returning `Null` for missing keys keeps change comparison honest: a
    /// field absent in one row image and explicitly null in the other is the
    /// same value.
    pub fn get(&self, field: &str) -> &Value {
        self.fields.get(field).unwrap_or(&Value::Null)
    }

    /// Scalar text field, trimmed. Missing, null, or non-string values all
    /// read as the empty string.
    pub fn text(&self, field: &str) -> &str {
        self.get(field).as_str().map(str::trim).unwrap_or("")
    }

    /// The record's primary key, when present and well-formed.
    pub fn id(&self) -> Option<Uuid> {
        self.get("id").as_str().and_then(|s| Uuid::parse_str(s).ok())
    }
}
