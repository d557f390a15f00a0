//! # REST API Module
//!
//! Maps HTTP verbs onto [`ResourceStore`](crate::store::ResourceStore)
//! operations for every collection. Request bodies are decoded by `serde`
//! and checked by [`Validate`](crate::models::Validate) before the store
//! sees them; store failures become 404 responses.

pub mod collections;
pub mod errors;
pub mod resource;
pub mod routes;

pub use collections::{CollectionCounts, Collections, Items, People, SeedData, Users};
pub use errors::{ErrorResponse, RestError, RestResult};
pub use resource::{decode, present, seed, to_fields, Resource};
pub use routes::{resource_routes, CollectionState, ListParams, DEFAULT_PAGE_SIZE};
