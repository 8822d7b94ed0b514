//! Server crate for the ReelCatalog movie catalog.
//!
//! This crate contains the service that coordinates the catalog components
//! and the axum HTTP API built on it.

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod service;
pub mod state;

pub use config::ServerConfig;
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use service::{load_catalog, CatalogService};
pub use state::AppState;
