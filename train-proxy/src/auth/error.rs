//! Authentication error types.

/// Errors from the credential exchange.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Auth endpoint returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body was not a token payload
    #[error("JSON parse error: {message}")]
    Json { message: String },
}
