//! Process-wide bearer token cache.

use chrono::{DateTime, Utc};
use tokio::sync::{Mutex, RwLock};

use super::client::{AuthClient, IssuedToken};
use super::error::AuthError;

/// The most recently issued bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedToken {
    token: String,
    /// Unix timestamp in seconds.
    expires_at: i64,
}

impl CachedToken {
    pub fn new(token: impl Into<String>, expires_at: i64) -> Self {
        Self {
            token: token.into(),
            expires_at,
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn expires_at(&self) -> i64 {
        self.expires_at
    }

    /// True iff the token is non-empty and expires strictly after `now`.
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        // Expiry has whole-second precision, so comparing against the
        // truncated timestamp is exact for "strictly after".
        !self.token.is_empty() && self.expires_at > now.timestamp()
    }
}

impl From<IssuedToken> for CachedToken {
    fn from(issued: IssuedToken) -> Self {
        Self::new(issued.access_token, issued.expires_at)
    }
}

/// Shared cache holding at most one bearer token.
///
/// Reads go through an `RwLock`. Refreshes are single-flight: callers that
/// find the token invalid queue on `refresh_lock`, and whoever gets there
/// second re-checks before hitting the auth endpoint again.
pub struct TokenCache {
    client: AuthClient,
    current: RwLock<Option<CachedToken>>,
    refresh_lock: Mutex<()>,
}

impl TokenCache {
    /// Create an empty cache. The first [`bearer`](Self::bearer) call fetches a token.
    pub fn new(client: AuthClient) -> Self {
        Self {
            client,
            current: RwLock::new(None),
            refresh_lock: Mutex::new(()),
        }
    }

    /// Whether a usable token is cached right now.
    pub async fn is_valid(&self) -> bool {
        self.valid_token(Utc::now()).await.is_some()
    }

    /// Snapshot of the cached token, valid or not.
    pub async fn current(&self) -> Option<CachedToken> {
        self.current.read().await.clone()
    }

    /// Fetch a new token and overwrite the cached one unconditionally.
    pub async fn refresh(&self) -> Result<(), AuthError> {
        let _flight = self.refresh_lock.lock().await;
        self.refresh_locked().await.map(|_| ())
    }

    /// Return a bearer token, refreshing first if the cached one is invalid.
    ///
    /// A token that is already expired on arrival is still returned for this
    /// call; the next call will refresh again.
    pub async fn bearer(&self) -> Result<String, AuthError> {
        if let Some(token) = self.valid_token(Utc::now()).await {
            return Ok(token);
        }

        let _flight = self.refresh_lock.lock().await;

        // Someone else may have refreshed while we waited.
        if let Some(token) = self.valid_token(Utc::now()).await {
            return Ok(token);
        }

        let fresh = self.refresh_locked().await?;
        Ok(fresh.token)
    }

    async fn valid_token(&self, now: DateTime<Utc>) -> Option<String> {
        let guard = self.current.read().await;
        guard
            .as_ref()
            .filter(|t| t.is_valid_at(now))
            .map(|t| t.token.clone())
    }

    /// Caller must hold `refresh_lock`.
    async fn refresh_locked(&self) -> Result<CachedToken, AuthError> {
        let fresh = CachedToken::from(self.client.issue_token().await?);
        tracing::info!(expires_at = fresh.expires_at, "refreshed upstream auth token");

        let mut guard = self.current.write().await;
        *guard = Some(fresh.clone());

        Ok(fresh)
    }
}
