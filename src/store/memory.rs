//! In-memory store backed by an ordered map

use std::collections::BTreeMap;

use super::errors::{StoreError, StoreResult};
use super::record::{Fields, Record, RecordId, ID_FIELD};
use super::ResourceStore;

/// Process-lifetime store for one collection.
///
/// Records are keyed in a `BTreeMap`; since identifiers only grow, key order
/// is insertion order. `last_id` is the high-water mark of every identifier
/// ever assigned, so deleting the newest record does not free its id.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    records: BTreeMap<RecordId, Fields>,
    last_id: RecordId,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `seed`, in order
    pub fn with_records<I>(seed: I) -> Self
    where
        I: IntoIterator<Item = Fields>,
    {
        let mut store = Self::new();
        for fields in seed {
            store.create(fields);
        }
        store
    }

    /// Highest identifier ever assigned, 0 if none
    pub fn last_id(&self) -> RecordId {
        self.last_id
    }

    fn next_id(&mut self) -> RecordId {
        self.last_id += 1;
        self.last_id
    }

    fn record(id: RecordId, fields: &Fields) -> Record {
        Record {
            id,
            fields: fields.clone(),
        }
    }
}

impl ResourceStore for MemoryStore {
    fn list(&self) -> Vec<Record> {
        self.records
            .iter()
            .map(|(id, fields)| Self::record(*id, fields))
            .collect()
    }

    fn get(&self, id: RecordId) -> StoreResult<Record> {
        self.records
            .get(&id)
            .map(|fields| Self::record(id, fields))
            .ok_or(StoreError::NotFound(id))
    }

    fn create(&mut self, fields: Fields) -> Record {
        let id = self.next_id();
        let record = Record::new(id, fields);
        self.records.insert(id, record.fields.clone());
        record
    }

    fn replace(&mut self, id: RecordId, fields: Fields) -> StoreResult<Record> {
        let slot = self.records.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        let record = Record::new(id, fields);
        *slot = record.fields.clone();
        Ok(record)
    }

    fn merge(&mut self, id: RecordId, partial: Fields) -> StoreResult<Record> {
        let slot = self.records.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        for (key, value) in partial {
            if key == ID_FIELD {
                continue;
            }
            slot.insert(key, value);
        }
        Ok(Self::record(id, slot))
    }

    fn delete(&mut self, id: RecordId) -> StoreResult<()> {
        self.records
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }

    fn len(&self) -> usize {
        self.records.len()
    }

    fn contains(&self, id: RecordId) -> bool {
        self.records.contains_key(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn fields(value: Value) -> Fields {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_first_id_is_one() {
        let mut store = MemoryStore::new();
        let record = store.create(fields(json!({"name": "Alice"})));
        assert_eq!(record.id, 1);
        assert_eq!(store.last_id(), 1);
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let store = MemoryStore::with_records([
            fields(json!({"name": "Alice"})),
            fields(json!({"name": "Bob"})),
            fields(json!({"name": "Charlie"})),
        ]);

        let names: Vec<_> = store
            .list()
            .into_iter()
            .map(|r| r.fields["name"].clone())
            .collect();
        assert_eq!(names, vec![json!("Alice"), json!("Bob"), json!("Charlie")]);
    }

    #[test]
    fn test_deleting_newest_does_not_free_its_id() {
        let mut store = MemoryStore::new();
        store.create(fields(json!({"n": 1})));
        let second = store.create(fields(json!({"n": 2})));
        store.delete(second.id).unwrap();

        let third = store.create(fields(json!({"n": 3})));
        assert_eq!(third.id, 3);
    }

    #[test]
    fn test_merge_ignores_id_key() {
        let mut store = MemoryStore::new();
        let record = store.create(fields(json!({"name": "Alice"})));

        let merged = store
            .merge(record.id, fields(json!({"id": 42, "name": "Alicia"})))
            .unwrap();
        assert_eq!(merged.id, record.id);
        assert!(!store.contains(42));
        assert_eq!(merged.get("name"), Some(&json!("Alicia")));
    }

    #[test]
    fn test_failed_replace_leaves_store_untouched() {
        let mut store = MemoryStore::with_records([fields(json!({"name": "Alice"}))]);
        let before = store.list();

        assert_eq!(
            store.replace(9, fields(json!({"name": "Bob"}))),
            Err(StoreError::NotFound(9))
        );
        assert_eq!(store.list(), before);
        assert_eq!(store.last_id(), 1);
    }
}
