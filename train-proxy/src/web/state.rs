//! Application state for the web layer.

use std::sync::Arc;

use crate::board::TrainBoard;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Departure board, including the shared token cache
    pub board: Arc<TrainBoard>,
}

impl AppState {
    pub fn new(board: TrainBoard) -> Self {
        Self {
            board: Arc::new(board),
        }
    }
}
