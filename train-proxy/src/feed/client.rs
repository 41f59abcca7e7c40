//! Train feed HTTP client.

use crate::domain::Train;

use super::error::FeedError;

/// Undecodable bodies are logged up to this many characters.
const LOGGED_BODY_CHARS: usize = 500;

/// Configuration for the train feed client.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// Train list endpoint URL
    pub url: String,
}

impl FeedConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// Client for the upstream train list.
#[derive(Debug, Clone)]
pub struct TrainFeedClient {
    http: reqwest::Client,
    url: String,
}

impl TrainFeedClient {
    /// Create a feed client on top of a shared HTTP client.
    pub fn new(http: reqwest::Client, config: FeedConfig) -> Self {
        Self {
            http,
            url: config.url,
        }
    }

    /// Fetch every train the feed knows about.
    ///
    /// A `null` body is treated as an empty list. Anything else that is not
    /// an array of trains fails the whole fetch.
    pub async fn fetch(&self, token: &str) -> Result<Vec<Train>, FeedError> {
        let response = self.http.get(&self.url).bearer_auth(token).send().await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FeedError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await.map_err(FeedError::Body)?;

        let trains: Option<Vec<Train>> = serde_json::from_str(&body).map_err(|e| {
            let snippet: String = body.chars().take(LOGGED_BODY_CHARS).collect();
            tracing::warn!(error = %e, body = %snippet, "undecodable train feed body");
            FeedError::Decode {
                message: e.to_string(),
            }
        })?;

        Ok(trains.unwrap_or_default())
    }
}
