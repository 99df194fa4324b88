//! Staging API server: resolves config, migrates, then serves.

use staging_api::{app, apply_migrations, AppConfig, AppState, DeploymentInfo, PgSampleDataStore};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("staging_api=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::from_env()?;
    let deployment = DeploymentInfo::from_env();

    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.connection_string)
        .await?;

    if let Err(e) = apply_migrations(&pool).await {
        tracing::error!(error = %e, "error applying migrations");
        return Err(e.into());
    }
    tracing::info!("database migrations applied");

    let branch = deployment.branch_label().to_string();
    let state = AppState::new(Arc::new(PgSampleDataStore::new(pool)), deployment);

    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!(branch = %branch, addr = %listener.local_addr()?, "application started");
    axum::serve(listener, app(state)).await?;
    Ok(())
}
