//! Staging API: SampleData CRUD over PostgreSQL, with health and deployment info endpoints.

pub mod config;
pub mod error;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod openapi;
pub mod routes;
pub mod state;
pub mod store;

pub use config::{AppConfig, DeploymentInfo};
pub use error::{AppError, ConfigError};
pub use migration::apply_migrations;
pub use model::{SampleData, SampleDataInput};
pub use routes::app;
pub use state::AppState;
pub use store::{PgSampleDataStore, SampleDataStore, UpdateOutcome};
