use std::sync::Arc;

use crate::service::CatalogService;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<CatalogService>,
}

impl AppState {
    pub fn new(service: Arc<CatalogService>) -> Self {
        Self { service }
    }
}
