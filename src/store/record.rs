//! Record type definitions
//!
//! A record is a flat JSON object: the store-assigned `id` plus any number
//! of caller-defined fields.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Synthetic record identifier, assigned by the store
pub type RecordId = u64;

/// Field name to value mapping for one record
pub type Fields = Map<String, Value>;

/// Reserved key carrying the identifier in serialized records
pub const ID_FIELD: &str = "id";

/// One stored entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Store-assigned identifier
    pub id: RecordId,
    /// Caller-defined fields, never containing `id`
    #[serde(flatten)]
    pub fields: Fields,
}

impl Record {
    /// Build a record, discarding any caller-supplied `id` key.
    pub fn new(id: RecordId, mut fields: Fields) -> Self {
        fields.remove(ID_FIELD);
        Self { id, fields }
    }

    /// Value of a single field
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Flat JSON object with `id` included
    pub fn to_value(&self) -> Value {
        let mut object = Map::with_capacity(self.fields.len() + 1);
        object.insert(ID_FIELD.to_string(), Value::from(self.id));
        for (key, value) in &self.fields {
            object.insert(key.clone(), value.clone());
        }
        Value::Object(object)
    }
}
