//! In-memory `SampleDataStore` and request helpers for router tests.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use staging_api::model::{NewSampleData, SampleData, SampleDataChange};
use staging_api::{app, AppError, AppState, DeploymentInfo, SampleDataStore, UpdateOutcome};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

#[derive(Default)]
pub struct MemoryStore {
    rows: Mutex<Vec<SampleData>>,
    next_id: Mutex<i32>,
    unreachable: AtomicBool,
}

impl MemoryStore {
    pub fn set_unreachable(&self, down: bool) {
        self.unreachable.store(down, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl SampleDataStore for MemoryStore {
    async fn list(&self) -> Result<Vec<SampleData>, AppError> {
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(rows)
    }

    async fn get(&self, id: i32) -> Result<Option<SampleData>, AppError> {
        Ok(self.rows.lock().unwrap().iter().find(|r| r.id == id).cloned())
    }

    async fn create(&self, new: NewSampleData) -> Result<SampleData, AppError> {
        let id = {
            let mut next = self.next_id.lock().unwrap();
            *next += 1;
            *next
        };
        let row = SampleData {
            id,
            name: new.name,
            description: new.description,
            created_at: new.created_at,
            updated_at: None,
        };
        self.rows.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn update(&self, change: SampleDataChange) -> Result<UpdateOutcome, AppError> {
        let mut rows = self.rows.lock().unwrap();
        let Some(row) = rows.iter_mut().find(|r| r.id == change.id) else {
            return Ok(UpdateOutcome::NotFound);
        };
        if let Some(expected) = change.expected_updated_at {
            if row.updated_at != expected {
                return Ok(UpdateOutcome::Conflict);
            }
        }
        row.name = change.name;
        row.description = change.description;
        row.updated_at = Some(change.updated_at.max(row.created_at));
        Ok(UpdateOutcome::Updated)
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|r| r.id != id);
        Ok(rows.len() < before)
    }

    async fn ping(&self) -> Result<(), AppError> {
        if self.unreachable.load(Ordering::SeqCst) {
            return Err(AppError::Db(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

pub fn deployment() -> DeploymentInfo {
    DeploymentInfo {
        environment: "Staging".into(),
        branch: Some("feature/sample".into()),
        commit_sha: Some("0badc0de".into()),
        deployed_at: Some("2024-05-01T10:00:00Z".into()),
        version: "1.2.3".into(),
    }
}

pub fn test_app() -> (Router, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::default());
    let state = AppState::new(store.clone(), deployment());
    (app(state), store)
}

pub struct TestResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub text: String,
    pub json: serde_json::Value,
}

pub async fn call(router: &Router, method: &str, uri: &str, body: Option<serde_json::Value>) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header("content-type", "application/json");
    }
    let body = match body {
        Some(v) => Body::from(serde_json::to_string(&v).unwrap()),
        None => Body::empty(),
    };
    let resp = router.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = resp.status();
    let location = resp
        .headers()
        .get("location")
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = axum::body::to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let text = String::from_utf8_lossy(&bytes).into_owned();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    TestResponse {
        status,
        location,
        text,
        json,
    }
}
