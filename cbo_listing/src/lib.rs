//! Diagnostic listing of the externally owned `cbos` table.
//!
//! Each request opens its own connection, runs one fixed projection query and renders
//! the rows as an HTML table. The table schema is not owned here; only the projection is.

mod page;

pub use page::render_page;

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Serialize;
use sqlx::{Connection, PgConnection};
use std::sync::Arc;
use thiserror::Error;
use tower_http::trace::TraceLayer;

/// Configuration key holding the core database connection string.
pub const CONNECTION_KEY: &str = "ESO_CORE_CONNECTION";
/// Upper bound on rendered rows.
pub const ROW_LIMIT: i64 = 100;

// "IsDeleted" may be boolean or an integer flag; the int cast accepts both.
const CBO_QUERY: &str = r#"SELECT "Id_CBO" AS id, "Code" AS code, "Name" AS name, "CBOType" AS kind
FROM cbos
WHERE "IsDeleted"::int = 0
LIMIT $1"#;

#[derive(Error, Debug)]
pub enum ListingError {
    #[error("{0} connection string not found")]
    MissingConnection(&'static str),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

impl IntoResponse for ListingError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "listing failed");
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}

/// One row of the listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct CboDto {
    pub id: i32,
    pub code: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Clone)]
pub struct ListingState {
    connection_string: Arc<str>,
}

impl ListingState {
    pub fn from_env() -> Result<Self, ListingError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ListingError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let connection_string = lookup(CONNECTION_KEY)
            .filter(|v| !v.trim().is_empty())
            .ok_or(ListingError::MissingConnection(CONNECTION_KEY))?;
        Ok(Self {
            connection_string: connection_string.into(),
        })
    }
}

/// Active rows only, at most [`ROW_LIMIT`], in whatever order storage returns them.
pub async fn fetch_cbos(conn: &mut PgConnection) -> Result<Vec<CboDto>, sqlx::Error> {
    sqlx::query_as::<_, CboDto>(CBO_QUERY)
        .bind(ROW_LIMIT)
        .fetch_all(conn)
        .await
}

async fn index(State(state): State<ListingState>) -> Result<Html<String>, ListingError> {
    let mut conn = PgConnection::connect(&state.connection_string).await?;
    let rows = fetch_cbos(&mut conn).await?;
    if let Err(e) = conn.close().await {
        tracing::warn!(error = %e, "closing listing connection failed");
    }
    tracing::debug!(rows = rows.len(), "listed cbos");
    Ok(Html(render_page(&rows)))
}

pub fn router(state: ListingState) -> Router {
    Router::new()
        .route("/", get(index))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    #[test]
    fn missing_connection_is_an_error() {
        let err = ListingState::from_lookup(|_| None).err().unwrap();
        assert_eq!(err.to_string(), "ESO_CORE_CONNECTION connection string not found");
        assert!(ListingState::from_lookup(|_| Some(" ".into())).is_err());
        assert!(ListingState::from_lookup(|_| Some("postgres://core/db".into())).is_ok());
    }

    #[test]
    fn dto_serializes_kind_as_type() {
        let dto = CboDto {
            id: 7,
            code: Some("2124-05".into()),
            name: Some("Analyst".into()),
            kind: Some("Occupation".into()),
        };
        let v = serde_json::to_value(&dto).unwrap();
        assert_eq!(v["type"], "Occupation");
        assert!(v.get("kind").is_none());
    }

    #[tokio::test]
    async fn unreachable_database_is_a_server_error() {
        let state = ListingState::from_lookup(|_| Some("postgres://nobody@127.0.0.1:1/none".into())).unwrap();
        let resp = router(state)
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
