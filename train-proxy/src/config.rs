//! Process configuration, read from the environment.
//!
//! A `.env` file in the working directory is loaded first if present.

use crate::auth::Credentials;

const AUTH_TOKEN_URL: &str = "AUTH_TOKEN_URL";
const TRAIN_URL: &str = "TRAIN_URL";
const LOCAL_SERVER_BASE_URL: &str = "LOCAL_SERVER_BASE_URL";

/// Errors from loading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A required variable is unset or empty
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
}

/// Everything the proxy needs at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Upstream token endpoint
    pub auth_url: String,

    /// Upstream train list endpoint
    pub train_url: String,

    /// Path the proxy serves the board on, always starting with `/`
    pub route_path: String,

    /// Identity sent to the token endpoint
    pub credentials: Credentials,
}

impl AppConfig {
    /// Load from `.env` (if any) and the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Err(e) = dotenv::dotenv() {
            tracing::warn!(error = %e, "no .env file loaded, using process environment");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup.
    ///
    /// Endpoint URLs and the route path are required. Identity fields
    /// default to empty strings with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing(key))
        };
        let identity = |key: &'static str| {
            lookup(key).unwrap_or_else(|| {
                tracing::warn!(key, "identity field not set, sending empty value");
                String::new()
            })
        };

        Ok(Self {
            auth_url: required(AUTH_TOKEN_URL)?,
            train_url: required(TRAIN_URL)?,
            route_path: normalize_route(&required(LOCAL_SERVER_BASE_URL)?),
            credentials: Credentials {
                company_name: identity("companyName"),
                client_id: identity("clientID"),
                client_secret: identity("clientSecret"),
                owner_name: identity("ownerName"),
                owner_email: identity("ownerEmail"),
                roll_no: identity("rollNo"),
            },
        })
    }
}

fn normalize_route(path: &str) -> String {
    let path = path.trim();
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}
