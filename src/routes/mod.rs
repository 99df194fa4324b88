//! Router assembly.

mod common;
mod data;

pub use common::common_routes;
pub use data::data_routes;

use crate::state::AppState;
use axum::Router;
use tower_http::trace::TraceLayer;

/// Full application: CRUD under /api/data, health, info and the OpenAPI document.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .nest("/api/data", data_routes(state))
        .layer(TraceLayer::new_for_http())
}
