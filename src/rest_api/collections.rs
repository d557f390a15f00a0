//! # Collections
//!
//! The concrete resources served by restbox and the bundle of their stores.

use std::sync::Arc;

use axum::Router;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::errors::RestResult;
use super::resource::{seed, Resource};
use super::routes::{resource_routes, CollectionState};
use crate::models::{ItemIn, ItemOut, ItemPatch, PersonIn, PersonPatch, UserIn, UserOut, UserPatch};
use crate::observability::{log_event_with_fields, Event, MetricsRegistry};
use crate::store::{MemoryStore, Record};

/// `/users`
pub struct Users;

impl Resource for Users {
    const COLLECTION: &'static str = "users";
    const LABEL: &'static str = "User";
    type Input = UserIn;
    type Patch = UserPatch;
    type Output = UserOut;
}

/// `/items`
pub struct Items;

impl Resource for Items {
    const COLLECTION: &'static str = "items";
    const LABEL: &'static str = "Item";
    type Input = ItemIn;
    type Patch = ItemPatch;
    type Output = ItemOut;
}

/// `/people`, served as raw records
pub struct People;

impl Resource for People {
    const COLLECTION: &'static str = "people";
    const LABEL: &'static str = "Person";
    type Input = PersonIn;
    type Patch = PersonPatch;
    type Output = Record;
}

/// Initial records per collection, decoded through each input model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub users: Vec<Value>,
    #[serde(default)]
    pub items: Vec<Value>,
    #[serde(default)]
    pub people: Vec<Value>,
}

/// Record counts per collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CollectionCounts {
    pub users: usize,
    pub items: usize,
    pub people: usize,
}

/// Every collection's state, sharing one metrics registry
#[derive(Clone)]
pub struct Collections {
    pub users: Arc<CollectionState<MemoryStore>>,
    pub items: Arc<CollectionState<MemoryStore>>,
    pub people: Arc<CollectionState<MemoryStore>>,
    metrics: Arc<MetricsRegistry>,
}

impl Collections {
    /// Empty collections
    pub fn new() -> Self {
        let metrics = Arc::new(MetricsRegistry::new());
        let users = Self::empty(&metrics);
        let items = Self::empty(&metrics);
        let people = Self::empty(&metrics);
        Self {
            users,
            items,
            people,
            metrics,
        }
    }

    fn empty(metrics: &Arc<MetricsRegistry>) -> Arc<CollectionState<MemoryStore>> {
        Arc::new(CollectionState::new(MemoryStore::new(), Arc::clone(metrics)))
    }

    /// Collections pre-filled from `data`
    ///
    /// Validation failures in any seed abort the whole load.
    pub fn seeded(data: &SeedData) -> RestResult<Self> {
        let collections = Self::new();
        Self::seed_one::<Users>(&collections.users, &data.users)?;
        Self::seed_one::<Items>(&collections.items, &data.items)?;
        Self::seed_one::<People>(&collections.people, &data.people)?;
        Ok(collections)
    }

    fn seed_one<R: Resource>(
        state: &CollectionState<MemoryStore>,
        values: &[Value],
    ) -> RestResult<()> {
        if values.is_empty() {
            return Ok(());
        }
        let count = seed::<R, _>(&mut *state.write()?, values)?;
        log_event_with_fields(
            Event::CollectionSeeded,
            &[("collection", R::COLLECTION), ("records", &count.to_string())],
        );
        Ok(())
    }

    /// Shared metrics registry
    pub fn metrics(&self) -> Arc<MetricsRegistry> {
        Arc::clone(&self.metrics)
    }

    /// Current record counts
    pub fn counts(&self) -> RestResult<CollectionCounts> {
        Ok(CollectionCounts {
            users: self.users.len()?,
            items: self.items.len()?,
            people: self.people.len()?,
        })
    }

    /// Router with every collection nested under its name
    pub fn router(&self) -> Router {
        Router::new()
            .nest(
                &format!("/{}", Users::COLLECTION),
                resource_routes::<Users, _>(Arc::clone(&self.users)),
            )
            .nest(
                &format!("/{}", Items::COLLECTION),
                resource_routes::<Items, _>(Arc::clone(&self.items)),
            )
            .nest(
                &format!("/{}", People::COLLECTION),
                resource_routes::<People, _>(Arc::clone(&self.people)),
            )
    }
}

impl Default for Collections {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_seeded_counts() {
        let data = SeedData {
            people: vec![
                json!({"name": "Alice", "age": 30}),
                json!({"name": "Bob", "age": 25}),
                json!({"name": "Charlie", "age": 35}),
            ],
            items: vec![json!({"name": "Lamp", "price": 20.0})],
            ..Default::default()
        };

        let collections = Collections::seeded(&data).unwrap();
        assert_eq!(
            collections.counts().unwrap(),
            CollectionCounts {
                users: 0,
                items: 1,
                people: 3
            }
        );
    }

    #[test]
    fn test_invalid_seed_is_rejected() {
        let data = SeedData {
            users: vec![json!({"name": "Ann", "user_type": "Superuser"})],
            ..Default::default()
        };
        assert!(Collections::seeded(&data).is_err());
    }

    #[test]
    fn test_collections_share_metrics() {
        let collections = Collections::new();
        collections.users.metrics().increment_created();
        assert_eq!(collections.metrics().snapshot().created, 1);
    }
}
