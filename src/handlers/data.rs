//! SampleData CRUD handlers: list, read, create, update, delete.

use crate::error::AppError;
use crate::model::{NewSampleData, SampleData, SampleDataChange, SampleDataInput};
use crate::state::AppState;
use crate::store::UpdateOutcome;
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;

/// Location of a single record, used for the `Location` header on create.
pub fn record_location(id: i32) -> String {
    format!("/api/data/{}", id)
}

#[utoipa::path(
    get,
    path = "/api/data",
    tag = "data",
    responses((status = 200, description = "All records, newest first", body = [SampleData]))
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<SampleData>>, AppError> {
    let rows = state.store.list().await?;
    Ok(Json(rows))
}

#[utoipa::path(
    get,
    path = "/api/data/{id}",
    tag = "data",
    params(("id" = i32, Path, description = "Record id")),
    responses(
        (status = 200, description = "Record found", body = SampleData),
        (status = 404, description = "No record with that id")
    )
)]
pub async fn read(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Json<SampleData>, AppError> {
    let row = state
        .store
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("sample data {}", id)))?;
    Ok(Json(row))
}

#[utoipa::path(
    post,
    path = "/api/data",
    tag = "data",
    request_body = SampleDataInput,
    responses(
        (status = 201, description = "Record created", body = SampleData),
        (status = 422, description = "Invalid record")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<SampleDataInput>,
) -> Result<impl IntoResponse, AppError> {
    body.validate()?;
    let row = state
        .store
        .create(NewSampleData {
            name: body.name,
            description: body.description,
            created_at: Utc::now(),
        })
        .await?;
    tracing::info!(id = row.id, branch = state.deployment.branch_label(), "created record");
    let location = record_location(row.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(row)))
}

#[utoipa::path(
    put,
    path = "/api/data/{id}",
    tag = "data",
    params(("id" = i32, Path, description = "Record id; must equal the body id")),
    request_body = SampleDataInput,
    responses(
        (status = 204, description = "Record updated"),
        (status = 400, description = "Path id and body id differ"),
        (status = 404, description = "No record with that id"),
        (status = 409, description = "Record was modified concurrently")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<SampleDataInput>,
) -> Result<StatusCode, AppError> {
    if body.id != Some(id) {
        return Err(AppError::BadRequest(format!(
            "path id {} does not match body id {}",
            id,
            body.id.map_or_else(|| "<missing>".to_string(), |b| b.to_string())
        )));
    }
    body.validate()?;
    let outcome = state
        .store
        .update(SampleDataChange {
            id,
            name: body.name,
            description: body.description,
            updated_at: Utc::now(),
            expected_updated_at: body.updated_at,
        })
        .await?;
    match outcome {
        UpdateOutcome::Updated => Ok(StatusCode::NO_CONTENT),
        UpdateOutcome::NotFound => Err(AppError::NotFound(format!("sample data {}", id))),
        UpdateOutcome::Conflict => Err(AppError::Conflict(format!(
            "sample data {} was modified concurrently",
            id
        ))),
    }
}

#[utoipa::path(
    delete,
    path = "/api/data/{id}",
    tag = "data",
    params(("id" = i32, Path, description = "Record id")),
    responses(
        (status = 204, description = "Record deleted"),
        (status = 404, description = "No record with that id")
    )
)]
pub async fn delete(State(state): State<AppState>, Path(id): Path<i32>) -> Result<StatusCode, AppError> {
    if !state.store.delete(id).await? {
        return Err(AppError::NotFound(format!("sample data {}", id)));
    }
    Ok(StatusCode::NO_CONTENT)
}
