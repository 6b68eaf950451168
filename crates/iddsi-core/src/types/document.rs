//! Raw document representation exchanged with a [`DocumentStore`].
//!
//! [`DocumentStore`]: crate::traits::store::DocumentStore

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::id::DocumentId;
use crate::error::AppError;
use crate::result::AppResult;

/// Field map of a document.
pub type Fields = Map<String, Value>;

/// A document read back from a collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Store-assigned identifier.
    pub id: DocumentId,
    /// Document fields.
    pub fields: Fields,
}

impl Document {
    /// Create a document.
    pub fn new(id: DocumentId, fields: Fields) -> Self {
        Self { id, fields }
    }

    /// Deserialize the fields into a typed value.
    pub fn decode<T: serde::de::DeserializeOwned>(&self) -> AppResult<T> {
        serde_json::from_value(Value::Object(self.fields.clone())).map_err(|e| {
            AppError::with_source(
                crate::error::ErrorKind::Serialization,
                format!("Malformed document '{}': {e}", self.id),
                e,
            )
        })
    }
}

/// Payload of a create or update call.
///
/// Fields listed in `server_timestamps` are overwritten by the store with
/// its own clock at commit time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentWrite {
    /// Fields to write.
    pub fields: Fields,
    /// Names of fields the store stamps with the commit time.
    pub server_timestamps: Vec<String>,
}

impl DocumentWrite {
    /// Create a write from a field map.
    pub fn new(fields: Fields) -> Self {
        Self {
            fields,
            server_timestamps: Vec::new(),
        }
    }

    /// Serialize a value into a write. The value must serialize to a JSON object.
    pub fn from_value<T: Serialize>(value: &T) -> AppResult<Self> {
        match serde_json::to_value(value)? {
            Value::Object(fields) => Ok(Self::new(fields)),
            other => Err(AppError::serialization(format!(
                "Expected a JSON object for a document write, got {other}"
            ))),
        }
    }

    /// Mark a field to be stamped with the store's commit time.
    pub fn server_timestamp(mut self, field: impl Into<String>) -> Self {
        let field = field.into();
        self.fields.remove(&field);
        self.server_timestamps.push(field);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value_rejects_non_objects() {
        assert!(DocumentWrite::from_value(&json!(["a"])).is_err());
        let write = DocumentWrite::from_value(&json!({"name": "Jelly"})).unwrap();
        assert_eq!(write.fields["name"], "Jelly");
    }

    #[test]
    fn test_server_timestamp_replaces_field() {
        let write = DocumentWrite::from_value(&json!({"name": "Jelly", "updated_at": null}))
            .unwrap()
            .server_timestamp("updated_at");
        assert!(!write.fields.contains_key("updated_at"));
        assert_eq!(write.server_timestamps, vec!["updated_at".to_string()]);
    }
}
