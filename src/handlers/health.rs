//! Health and deployment info handlers.

use crate::config::DeploymentInfo;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub branch: String,
    pub database: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthFailure {
    pub status: String,
    pub error: String,
}

#[utoipa::path(
    get,
    path = "/api/health",
    tag = "health",
    responses(
        (status = 200, description = "Database reachable", body = HealthReport),
        (status = 503, description = "Database unreachable", body = HealthFailure)
    )
)]
pub async fn health(
    State(state): State<AppState>,
) -> Result<Json<HealthReport>, (StatusCode, Json<HealthFailure>)> {
    match state.store.ping().await {
        Ok(()) => Ok(Json(HealthReport {
            status: "Healthy".into(),
            timestamp: Utc::now(),
            branch: state.deployment.branch_label().to_string(),
            database: "Connected".into(),
        })),
        Err(e) => {
            tracing::error!(error = %e, "health check failed");
            Err((
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthFailure {
                    status: "Unhealthy".into(),
                    error: e.to_string(),
                }),
            ))
        }
    }
}

/// Plain-text probe for load balancers: `Healthy` or `Unhealthy`.
pub async fn probe(State(state): State<AppState>) -> (StatusCode, &'static str) {
    match state.store.ping().await {
        Ok(()) => (StatusCode::OK, "Healthy"),
        Err(e) => {
            tracing::warn!(error = %e, "health probe failed");
            (StatusCode::SERVICE_UNAVAILABLE, "Unhealthy")
        }
    }
}

#[utoipa::path(
    get,
    path = "/info",
    tag = "health",
    responses((status = 200, description = "Deployment metadata", body = DeploymentInfo))
)]
pub async fn info(State(state): State<AppState>) -> Json<DeploymentInfo> {
    Json(state.deployment.as_ref().clone())
}
