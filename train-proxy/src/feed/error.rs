//! Train feed error types.

/// Errors from fetching the upstream train list.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// HTTP request failed (connection refused, reset, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Feed returned an error status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body could not be read
    #[error("failed to read response body: {0}")]
    Body(#[source] reqwest::Error),

    /// Body was not a JSON array of trains
    #[error("JSON parse error: {message}")]
    Decode { message: String },
}
