use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::catalog::handlers;
use crate::features::catalog::services::CatalogService;

/// Create routes for the option catalog
pub fn routes(service: Arc<CatalogService>) -> Router {
    Router::new()
        .route("/api/options", get(handlers::list_options))
        .with_state(service)
}
