//! Startup configuration read from the process environment (optionally seeded from `.env`).
//!
//! Everything here is resolved once in `main` and handed to handlers through `AppState`;
//! request handlers never read the environment themselves.

use crate::error::ConfigError;
use serde::Serialize;
use utoipa::ToSchema;

/// Primary connection string key, matching the `ConnectionStrings:DefaultConnection` convention.
pub const DEFAULT_CONNECTION_KEY: &str = "ConnectionStrings__DefaultConnection";
/// Fallback connection string key.
pub const FALLBACK_CONNECTION_KEY: &str = "DATABASE_CONNECTION_STRING";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_ENVIRONMENT: &str = "Production";
const DEFAULT_VERSION: &str = "1.0.0";
const UNKNOWN_BRANCH: &str = "unknown";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub connection_string: String,
    pub bind_addr: String,
    pub max_connections: u32,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from any key lookup. Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let connection_string = get(DEFAULT_CONNECTION_KEY)
            .or_else(|| get(FALLBACK_CONNECTION_KEY))
            .ok_or(ConfigError::MissingConnectionString)?;
        let bind_addr = get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into());
        let max_connections = match get("DATABASE_MAX_CONNECTIONS") {
            Some(v) => v.trim().parse().map_err(|_| ConfigError::Invalid {
                key: "DATABASE_MAX_CONNECTIONS",
                value: v,
            })?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(Self {
            connection_string,
            bind_addr,
            max_connections,
        })
    }
}

/// Deployment metadata, captured once at startup. Serialized as the `/info` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentInfo {
    pub environment: String,
    pub branch: Option<String>,
    pub commit_sha: Option<String>,
    pub deployed_at: Option<String>,
    pub version: String,
}

impl DeploymentInfo {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            environment: lookup("APP_ENVIRONMENT").unwrap_or_else(|| DEFAULT_ENVIRONMENT.into()),
            branch: lookup("BRANCH_NAME"),
            commit_sha: lookup("COMMIT_SHA"),
            deployed_at: lookup("DEPLOYED_AT"),
            version: lookup("APP_VERSION").unwrap_or_else(|| DEFAULT_VERSION.into()),
        }
    }

    /// Branch label for health reports and logs.
    pub fn branch_label(&self) -> &str {
        self.branch.as_deref().unwrap_or(UNKNOWN_BRANCH)
    }
}
