//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::trace::TraceLayer;

use crate::board::BoardError;
use crate::domain::Train;
use crate::feed::FeedError;

use super::cors::cors;
use super::dto::ErrorResponse;
use super::state::AppState;

/// Create the application router, serving the board at `path`.
pub fn create_router(state: AppState, path: &str) -> Router {
    Router::new()
        .route(path, get(list_trains))
        .layer(middleware::from_fn(cors))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Upcoming trains, filtered and ranked.
async fn list_trains(State(state): State<AppState>) -> Result<Json<Vec<Train>>, AppError> {
    let trains = state.board.departures().await?;
    Ok(Json(trains))
}

/// Application error type.
///
/// Carries a short message for the caller and the underlying cause for the
/// logs. Every failure surfaces as a 500.
#[derive(Debug)]
pub struct AppError {
    message: &'static str,
    cause: String,
}

impl AppError {
    pub fn message(&self) -> &'static str {
        self.message
    }
}

impl From<BoardError> for AppError {
    fn from(e: BoardError) -> Self {
        let message = match &e {
            BoardError::Auth(_) => "Failed to fetch authentication token",
            BoardError::Feed(FeedError::Http(_) | FeedError::Api { .. }) => {
                "Failed to fetch train data"
            }
            BoardError::Feed(FeedError::Body(_)) => "Failed to read response body",
            BoardError::Feed(FeedError::Decode { .. }) => "Failed to parse train data",
        };

        AppError {
            message,
            cause: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(cause = %self.cause, "{}", self.message);

        let body = Json(ErrorResponse {
            error: self.message.to_string(),
        });
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

#[cfg(test)]
#[path = "routes_tests.rs"]
mod tests;
