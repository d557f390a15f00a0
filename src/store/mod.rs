//! # Resource Store
//!
//! In-memory keyed collection of records with store-assigned identifiers.
//!
//! # Invariants
//!
//! - Identifiers are unique and strictly increasing
//! - An identifier freed by `delete` is never handed out again
//! - Every mutating operation either fully applies or has no effect
//! - The `id` key of a record is owned by the store, never by the caller

mod errors;
mod memory;
mod record;

pub use errors::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use record::{Fields, Record, RecordId, ID_FIELD};

/// Storage seam for a single collection.
///
/// The route layer only talks to this trait, so a persistent backend can
/// replace [`MemoryStore`] without touching callers.
pub trait ResourceStore: Send + Sync {
    /// All records, in insertion order.
    fn list(&self) -> Vec<Record>;

    /// The record stored under `id`.
    fn get(&self, id: RecordId) -> StoreResult<Record>;

    /// Store `fields` under a fresh identifier and return the new record.
    fn create(&mut self, fields: Fields) -> Record;

    /// Overwrite the whole record. Keys missing from `fields` are dropped.
    fn replace(&mut self, id: RecordId, fields: Fields) -> StoreResult<Record>;

    /// Write only the keys present in `partial`, leaving the rest untouched.
    ///
    /// An explicit `null` is stored as `null`. Whether a key is present is
    /// decided by the caller; the store does not know about schema defaults.
    fn merge(&mut self, id: RecordId, partial: Fields) -> StoreResult<Record>;

    /// Remove the record. Deleting an absent id is an error, not a no-op.
    fn delete(&mut self, id: RecordId) -> StoreResult<()>;

    /// Number of stored records.
    fn len(&self) -> usize;

    /// Whether the store holds no records.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether a record exists under `id`.
    fn contains(&self, id: RecordId) -> bool {
        self.get(id).is_ok()
    }
}
