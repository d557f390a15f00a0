//! # HTTP Server Module
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/users`, `/items`, `/people` - Collection CRUD
//! - `/observability/*` - Health and metrics

pub mod config;
pub mod observability_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use server::HttpServer;
