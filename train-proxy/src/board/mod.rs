//! Departure board: the fetch, filter and rank pipeline.
//!
//! Trains leaving within the departure window are dropped. The rest are
//! ordered cheapest sleeper fare first, then by most sleeper seats, then by
//! latest delay-adjusted departure.

mod config;
mod error;
mod filter;
mod rank;
mod service;

pub use config::BoardConfig;
pub use error::BoardError;
pub use filter::departing_after;
pub use rank::rank_trains;
pub use service::{Clock, TrainBoard, arrange};
