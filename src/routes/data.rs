//! SampleData CRUD routes.

use crate::handlers::data::{create, delete, list, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn data_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(list).post(create))
        .route("/:id", get(read).put(update).delete(delete))
        .with_state(state)
}
