//! # Resource Routes
//!
//! Generic CRUD routes for any [`Resource`] over any [`ResourceStore`].
//!
//! | Method | Path    | Store op  | Success |
//! |--------|---------|-----------|---------|
//! | GET    | `/`     | `list`    | 200     |
//! | POST   | `/`     | `create`  | 201     |
//! | GET    | `/{id}` | `get`     | 200     |
//! | PUT    | `/{id}` | `replace` | 200     |
//! | PATCH  | `/{id}` | `merge`   | 200     |
//! | DELETE | `/{id}` | `delete`  | 204     |
//!
//! `GET /` takes optional `page` and `size` query parameters. Without
//! either, every record is returned.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use super::errors::{RestError, RestResult};
use super::resource::{present, to_fields, Resource};
use crate::models::Validate;
use crate::observability::{log_event_with_fields, Event, MetricsRegistry};
use crate::store::{RecordId, ResourceStore};

/// Shared state for one collection
///
/// The store has no locking of its own; this lock makes every store
/// operation atomic with respect to concurrent requests.
pub struct CollectionState<S: ResourceStore> {
    store: RwLock<S>,
    metrics: Arc<MetricsRegistry>,
}

impl<S: ResourceStore> CollectionState<S> {
    pub fn new(store: S, metrics: Arc<MetricsRegistry>) -> Self {
        Self {
            store: RwLock::new(store),
            metrics,
        }
    }

    /// Shared access to the store
    pub fn read(&self) -> RestResult<RwLockReadGuard<'_, S>> {
        self.store
            .read()
            .map_err(|_| RestError::Internal("collection lock poisoned".to_string()))
    }

    /// Exclusive access to the store
    pub fn write(&self) -> RestResult<RwLockWriteGuard<'_, S>> {
        self.store
            .write()
            .map_err(|_| RestError::Internal("collection lock poisoned".to_string()))
    }

    /// Number of records currently stored
    pub fn len(&self) -> RestResult<usize> {
        Ok(self.read()?.len())
    }

    pub fn metrics(&self) -> &MetricsRegistry {
        &self.metrics
    }

    /// Count and log a failed request, passing the error through
    fn failed<R: Resource>(&self, err: RestError) -> RestError {
        let message = err.to_string();
        match &err {
            RestError::NotFound { id, .. } => {
                self.metrics.increment_not_found();
                log_event_with_fields(
                    Event::RecordNotFound,
                    &[("collection", R::COLLECTION), ("id", &id.to_string())],
                );
            }
            e if e.is_rejection() => {
                self.metrics.increment_rejected();
                log_event_with_fields(
                    Event::RequestRejected,
                    &[("collection", R::COLLECTION), ("reason", &message)],
                );
            }
            _ => {
                log_event_with_fields(
                    Event::InternalError,
                    &[("collection", R::COLLECTION), ("reason", &message)],
                );
            }
        }
        err
    }

    fn succeeded<R: Resource>(&self, event: Event, id: RecordId) {
        match event {
            Event::RecordCreated => self.metrics.increment_created(),
            Event::RecordReplaced => self.metrics.increment_replaced(),
            Event::RecordMerged => self.metrics.increment_merged(),
            Event::RecordDeleted => self.metrics.increment_deleted(),
            _ => {}
        }
        log_event_with_fields(
            event,
            &[("collection", R::COLLECTION), ("id", &id.to_string())],
        );
    }
}

/// Page size used when only `page` is given
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Query parameters of a list request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct ListParams {
    /// Zero-based page number
    pub page: Option<usize>,
    /// Records per page, at least 1
    pub size: Option<usize>,
}

impl ListParams {
    /// Cut `records` down to the requested page
    pub fn paginate<T>(self, records: Vec<T>) -> RestResult<Vec<T>> {
        if self.page.is_none() && self.size.is_none() {
            return Ok(records);
        }
        let size = self.size.unwrap_or(DEFAULT_PAGE_SIZE);
        if size == 0 {
            return Err(RestError::InvalidQuery("size must be at least 1".to_string()));
        }
        let skip = self.page.unwrap_or(0).saturating_mul(size);
        Ok(records.into_iter().skip(skip).take(size).collect())
    }
}

/// Shared state type
type SharedState<S> = Arc<CollectionState<S>>;

/// Build the router for one collection, to be nested under `/<collection>`
pub fn resource_routes<R, S>(state: SharedState<S>) -> Router
where
    R: Resource,
    S: ResourceStore + 'static,
{
    Router::new()
        .route("/", get(list_handler::<R, S>).post(create_handler::<R, S>))
        .route(
            "/:id",
            get(get_handler::<R, S>)
                .put(replace_handler::<R, S>)
                .patch(merge_handler::<R, S>)
                .delete(delete_handler::<R, S>),
        )
        .with_state(state)
}

// ==================
// Extraction
// ==================

fn path_id(path: Result<Path<RecordId>, PathRejection>) -> RestResult<RecordId> {
    path.map(|Path(id)| id)
        .map_err(|e| RestError::InvalidPath(e.body_text()))
}

fn list_params(query: Result<Query<ListParams>, QueryRejection>) -> RestResult<ListParams> {
    query
        .map(|Query(params)| params)
        .map_err(|e| RestError::InvalidQuery(e.body_text()))
}

fn body<T: Validate>(body: Result<Json<T>, JsonRejection>) -> RestResult<T> {
    let Json(model) = body.map_err(|e| RestError::InvalidBody(e.body_text()))?;
    Ok(model.validate()?)
}

// ==================
// Operations
// ==================

fn list_records<R, S>(state: &CollectionState<S>, params: ListParams) -> RestResult<Vec<R::Output>>
where
    R: Resource,
    S: ResourceStore,
{
    let records = params.paginate(state.read()?.list())?;
    let out = records
        .iter()
        .map(present::<R>)
        .collect::<RestResult<Vec<_>>>()?;
    state.metrics.increment_reads();
    Ok(out)
}

fn get_record<R, S>(state: &CollectionState<S>, id: RecordId) -> RestResult<R::Output>
where
    R: Resource,
    S: ResourceStore,
{
    let record = state
        .read()?
        .get(id)
        .map_err(|e| RestError::from_store(R::LABEL, e))?;
    let out = present::<R>(&record)?;
    state.metrics.increment_reads();
    Ok(out)
}

fn create_record<R, S>(state: &CollectionState<S>, input: R::Input) -> RestResult<R::Output>
where
    R: Resource,
    S: ResourceStore,
{
    let fields = to_fields(&input)?;
    let record = state.write()?.create(fields);
    let out = present::<R>(&record)?;
    state.succeeded::<R>(Event::RecordCreated, record.id);
    Ok(out)
}

fn replace_record<R, S>(
    state: &CollectionState<S>,
    id: RecordId,
    input: R::Input,
) -> RestResult<R::Output>
where
    R: Resource,
    S: ResourceStore,
{
    let fields = to_fields(&input)?;
    let record = state
        .write()?
        .replace(id, fields)
        .map_err(|e| RestError::from_store(R::LABEL, e))?;
    let out = present::<R>(&record)?;
    state.succeeded::<R>(Event::RecordReplaced, id);
    Ok(out)
}

fn merge_record<R, S>(
    state: &CollectionState<S>,
    id: RecordId,
    patch: R::Patch,
) -> RestResult<R::Output>
where
    R: Resource,
    S: ResourceStore,
{
    let partial = to_fields(&patch)?;
    let record = state
        .write()?
        .merge(id, partial)
        .map_err(|e| RestError::from_store(R::LABEL, e))?;
    let out = present::<R>(&record)?;
    state.succeeded::<R>(Event::RecordMerged, id);
    Ok(out)
}

fn delete_record<R, S>(state: &CollectionState<S>, id: RecordId) -> RestResult<()>
where
    R: Resource,
    S: ResourceStore,
{
    state
        .write()?
        .delete(id)
        .map_err(|e| RestError::from_store(R::LABEL, e))?;
    state.succeeded::<R>(Event::RecordDeleted, id);
    Ok(())
}

// ==================
// Handlers
// ==================

async fn list_handler<R, S>(
    State(state): State<SharedState<S>>,
    query: Result<Query<ListParams>, QueryRejection>,
) -> RestResult<Json<Vec<R::Output>>>
where
    R: Resource,
    S: ResourceStore + 'static,
{
    list_params(query)
        .and_then(|params| list_records::<R, S>(&state, params))
        .map(Json)
        .map_err(|e| state.failed::<R>(e))
}

async fn get_handler<R, S>(
    State(state): State<SharedState<S>>,
    id: Result<Path<RecordId>, PathRejection>,
) -> RestResult<Json<R::Output>>
where
    R: Resource,
    S: ResourceStore + 'static,
{
    path_id(id)
        .and_then(|id| get_record::<R, S>(&state, id))
        .map(Json)
        .map_err(|e| state.failed::<R>(e))
}

async fn create_handler<R, S>(
    State(state): State<SharedState<S>>,
    input: Result<Json<R::Input>, JsonRejection>,
) -> RestResult<(StatusCode, Json<R::Output>)>
where
    R: Resource,
    S: ResourceStore + 'static,
{
    body(input)
        .and_then(|input| create_record::<R, S>(&state, input))
        .map(|out| (StatusCode::CREATED, Json(out)))
        .map_err(|e| state.failed::<R>(e))
}

async fn replace_handler<R, S>(
    State(state): State<SharedState<S>>,
    id: Result<Path<RecordId>, PathRejection>,
    input: Result<Json<R::Input>, JsonRejection>,
) -> RestResult<Json<R::Output>>
where
    R: Resource,
    S: ResourceStore + 'static,
{
    path_id(id)
        .and_then(|id| Ok((id, body(input)?)))
        .and_then(|(id, input)| replace_record::<R, S>(&state, id, input))
        .map(Json)
        .map_err(|e| state.failed::<R>(e))
}

async fn merge_handler<R, S>(
    State(state): State<SharedState<S>>,
    id: Result<Path<RecordId>, PathRejection>,
    patch: Result<Json<R::Patch>, JsonRejection>,
) -> RestResult<Json<R::Output>>
where
    R: Resource,
    S: ResourceStore + 'static,
{
    path_id(id)
        .and_then(|id| Ok((id, body(patch)?)))
        .and_then(|(id, patch)| merge_record::<R, S>(&state, id, patch))
        .map(Json)
        .map_err(|e| state.failed::<R>(e))
}

async fn delete_handler<R, S>(
    State(state): State<SharedState<S>>,
    id: Result<Path<RecordId>, PathRejection>,
) -> RestResult<StatusCode>
where
    R: Resource,
    S: ResourceStore + 'static,
{
    path_id(id)
        .and_then(|id| delete_record::<R, S>(&state, id))
        .map(|()| StatusCode::NO_CONTENT)
        .map_err(|e| state.failed::<R>(e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PersonIn, PersonPatch, UserOut};
    use crate::store::{MemoryStore, Record};
    use serde_json::json;

    struct People;

    impl Resource for People {
        const COLLECTION: &'static str = "people";
        const LABEL: &'static str = "Person";
        type Input = PersonIn;
        type Patch = PersonPatch;
        type Output = Record;
    }

    /// People presented through a model their records cannot decode into
    struct Mismatched;

    impl Resource for Mismatched {
        const COLLECTION: &'static str = "mismatched";
        const LABEL: &'static str = "Mismatched";
        type Input = PersonIn;
        type Patch = PersonPatch;
        type Output = UserOut;
    }

    fn state() -> CollectionState<MemoryStore> {
        CollectionState::new(MemoryStore::new(), Arc::new(MetricsRegistry::new()))
    }

    fn alice() -> PersonIn {
        PersonIn {
            name: "Alice".to_string(),
            age: 30,
        }
    }

    #[test]
    fn test_create_then_get() {
        let state = state();
        let created = create_record::<People, _>(&state, alice()).unwrap();
        let fetched = get_record::<People, _>(&state, created.id).unwrap();

        assert_eq!(created, fetched);
        assert_eq!(state.metrics().snapshot().created, 1);
        assert_eq!(state.metrics().snapshot().reads, 1);
    }

    #[test]
    fn test_merge_only_touches_sent_keys() {
        let state = state();
        let created = create_record::<People, _>(&state, alice()).unwrap();

        let patch: PersonPatch = serde_json::from_value(json!({"age": 31})).unwrap();
        let merged = merge_record::<People, _>(&state, created.id, patch).unwrap();

        assert_eq!(merged.to_value(), json!({"id": 1, "name": "Alice", "age": 31}));
    }

    #[test]
    fn test_paginate() {
        let all = ListParams::default();
        assert_eq!(all.paginate(vec![1, 2, 3]).unwrap(), vec![1, 2, 3]);

        let second = ListParams {
            page: Some(1),
            size: Some(2),
        };
        assert_eq!(second.paginate(vec![1, 2, 3]).unwrap(), vec![3]);

        let default_size = ListParams {
            page: Some(0),
            size: None,
        };
        assert_eq!(default_size.paginate((1..=12).collect()).unwrap().len(), DEFAULT_PAGE_SIZE);

        let past_end = ListParams {
            page: Some(usize::MAX),
            size: Some(5),
        };
        assert!(past_end.paginate(vec![1, 2, 3]).unwrap().is_empty());

        let zero = ListParams {
            page: None,
            size: Some(0),
        };
        assert!(matches!(zero.paginate(vec![1]), Err(RestError::InvalidQuery(_))));
    }

    #[test]
    fn test_list_pages_records() {
        let state = state();
        for _ in 0..3 {
            create_record::<People, _>(&state, alice()).unwrap();
        }
        let params = ListParams {
            page: Some(1),
            size: Some(2),
        };
        let page = list_records::<People, _>(&state, params).unwrap();
        assert_eq!(page.iter().map(|r| r.id).collect::<Vec<_>>(), vec![3]);
    }

    #[test]
    fn test_undecodable_write_not_counted() {
        let state = state();
        let err = create_record::<Mismatched, _>(&state, alice()).unwrap_err();
        assert!(matches!(err, RestError::Internal(_)));

        let err = replace_record::<Mismatched, _>(&state, 1, alice()).unwrap_err();
        assert!(matches!(err, RestError::Internal(_)));

        let snapshot = state.metrics().snapshot();
        assert_eq!(snapshot.created, 0);
        assert_eq!(snapshot.replaced, 0);
    }

    #[test]
    fn test_delete_missing_is_not_found() {
        let state = state();
        let err = delete_record::<People, _>(&state, 5).unwrap_err();
        assert!(matches!(err, RestError::NotFound { label: "Person", id: 5 }));

        let err = state.failed::<People>(err);
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(state.metrics().snapshot().not_found, 1);
    }

    #[test]
    fn test_router_builds() {
        let _router = resource_routes::<People, MemoryStore>(Arc::new(state()));
    }
}
