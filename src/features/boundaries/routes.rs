use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::boundaries::handlers;
use crate::features::boundaries::services::BoundaryService;

/// Create routes for option boundaries
pub fn routes(service: Arc<BoundaryService>) -> Router {
    Router::new()
        .route("/api/options/{name}/boundary", get(handlers::get_boundary))
        .with_state(service)
}
