//! Common routes: health, info, OpenAPI document.

use crate::handlers::health::{health, info, probe};
use crate::openapi;
use crate::state::AppState;
use axum::{routing::get, Json, Router};

pub fn common_routes(state: AppState) -> Router {
    let doc = openapi::document(&state.deployment);
    Router::new()
        .route("/api/health", get(health))
        .route("/health", get(probe))
        .route("/info", get(info))
        .route("/swagger/v1/swagger.json", get(move || {
            let doc = doc.clone();
            async move { Json(doc) }
        }))
        .with_state(state)
}
