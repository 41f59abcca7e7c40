//! Upstream train-list client.
//!
//! Fetches the full list of scheduled trains with a bearer token. The feed
//! returns every train for the day; filtering and ordering happen in
//! [`crate::board`].

mod client;
mod error;

pub use client::{FeedConfig, TrainFeedClient};
pub use error::FeedError;
