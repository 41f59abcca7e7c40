//! Board pipeline errors.

use crate::auth::AuthError;
use crate::feed::FeedError;

/// Errors from building the departure board.
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    /// Could not obtain a bearer token
    #[error("authentication failed: {0}")]
    Auth(#[from] AuthError),

    /// Could not fetch or decode the train list
    #[error("train feed failed: {0}")]
    Feed(#[from] FeedError),
}
