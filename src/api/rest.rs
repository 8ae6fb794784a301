//! REST API endpoints for the KGL procurement service.

use axum::routing::{get, post};
use axum::Router;

use crate::api::handlers;
use crate::server::AppState;

/// Build the procurement router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/kgl/procurement", get(handlers::list_records))
        .route("/kgl/procurement", post(handlers::create_record))
}
