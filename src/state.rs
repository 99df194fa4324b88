//! Shared application state for all routes. Immutable after startup.

use crate::config::DeploymentInfo;
use crate::store::SampleDataStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn SampleDataStore>,
    pub deployment: Arc<DeploymentInfo>,
}

impl AppState {
    pub fn new(store: Arc<dyn SampleDataStore>, deployment: DeploymentInfo) -> Self {
        Self {
            store,
            deployment: Arc::new(deployment),
        }
    }
}
