//! Shared application state for all routes.

use crate::gateway::CatalogGateway;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn CatalogGateway>,
}

impl AppState {
    pub fn new<G: CatalogGateway + 'static>(catalog: G) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}
