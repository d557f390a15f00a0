//! restbox - an in-memory REST resource server
//!
//! Collections of records served over HTTP with create, read, full
//! replace (PUT), partial merge (PATCH) and delete.
//!
//! - [`store`]: identifier assignment and merge semantics
//! - [`models`]: typed request bodies and validators
//! - [`rest_api`]: generic CRUD routes per collection
//! - [`http_server`]: router composition and serving
//! - [`observability`]: JSON logs and counters
//! - [`cli`]: `init`, `check`, `serve`

pub mod cli;
pub mod http_server;
pub mod models;
pub mod observability;
pub mod rest_api;
pub mod store;
