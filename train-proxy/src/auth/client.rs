//! Client-credential exchange against the upstream auth endpoint.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::AuthError;

/// Identity fields sent with every token request.
#[derive(Clone, Default, PartialEq, Eq, Serialize)]
pub struct Credentials {
    #[serde(rename = "companyName")]
    pub company_name: String,
    #[serde(rename = "clientID")]
    pub client_id: String,
    #[serde(rename = "clientSecret")]
    pub client_secret: String,
    #[serde(rename = "ownerName")]
    pub owner_name: String,
    #[serde(rename = "ownerEmail")]
    pub owner_email: String,
    #[serde(rename = "rollNo")]
    pub roll_no: String,
}

// Keep the secret out of logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("company_name", &self.company_name)
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("owner_name", &self.owner_name)
            .field("owner_email", &self.owner_email)
            .field("roll_no", &self.roll_no)
            .finish()
    }
}

/// Token payload returned by the auth endpoint.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    /// Absolute expiry as a Unix timestamp, despite the name.
    expires_in: i64,
}

/// A freshly issued bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub access_token: String,
    /// Unix timestamp (seconds) after which the token is no longer valid.
    pub expires_at: i64,
}

/// Configuration for the auth client.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Token endpoint URL
    pub url: String,
    /// Identity sent in the request body
    pub credentials: Credentials,
}

impl AuthConfig {
    pub fn new(url: impl Into<String>, credentials: Credentials) -> Self {
        Self {
            url: url.into(),
            credentials,
        }
    }
}

/// Client for the upstream token endpoint.
#[derive(Debug, Clone)]
pub struct AuthClient {
    http: reqwest::Client,
    url: String,
    credentials: Credentials,
}

impl AuthClient {
    /// Create an auth client on top of a shared HTTP client.
    pub fn new(http: reqwest::Client, config: AuthConfig) -> Self {
        Self {
            http,
            url: config.url,
            credentials: config.credentials,
        }
    }

    /// Exchange the configured credentials for a bearer token.
    ///
    /// The returned expiry is taken as-is, even if it is already in the past.
    pub async fn issue_token(&self) -> Result<IssuedToken, AuthError> {
        let response = self
            .http
            .post(&self.url)
            .json(&self.credentials)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AuthError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let token: TokenResponse = serde_json::from_str(&body).map_err(|e| AuthError::Json {
            message: e.to_string(),
        })?;

        Ok(IssuedToken {
            access_token: token.access_token,
            expires_at: token.expires_in,
        })
    }
}
