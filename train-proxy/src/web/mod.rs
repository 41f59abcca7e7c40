//! Web layer for the train proxy.
//!
//! Serves the departure board as JSON on a single configurable route.

mod cors;
mod dto;
mod routes;
mod state;

pub use cors::cors;
pub use dto::ErrorResponse;
pub use routes::{AppError, create_router};
pub use state::AppState;
