//! The departure board service.

use chrono::{DateTime, TimeDelta, Utc};

use crate::auth::TokenCache;
use crate::domain::Train;
use crate::feed::TrainFeedClient;

use super::config::BoardConfig;
use super::error::BoardError;
use super::filter::departing_after;
use super::rank::rank_trains;

/// Source of "now" for the board.
pub type Clock = fn() -> DateTime<Utc>;

/// Filter then rank a fetched train list as of `now`.
///
/// Both steps share the UTC date of `now` as "today".
pub fn arrange(trains: Vec<Train>, now: DateTime<Utc>, window: TimeDelta) -> Vec<Train> {
    let upcoming = departing_after(trains, now, window);
    rank_trains(upcoming, now.date_naive())
}

/// Builds the departure board from the upstream feed.
///
/// Owns the token cache and the feed client. Each call authenticates if
/// needed, makes one fetch, and never retries.
pub struct TrainBoard {
    tokens: TokenCache,
    feed: TrainFeedClient,
    config: BoardConfig,
    clock: Clock,
}

impl TrainBoard {
    pub fn new(tokens: TokenCache, feed: TrainFeedClient, config: BoardConfig) -> Self {
        Self {
            tokens,
            feed,
            config,
            clock: Utc::now,
        }
    }

    /// Replace the wall clock (for testing).
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// The shared token cache.
    pub fn tokens(&self) -> &TokenCache {
        &self.tokens
    }

    /// Fetch, filter and rank the current departures.
    pub async fn departures(&self) -> Result<Vec<Train>, BoardError> {
        let token = self.tokens.bearer().await?;
        let trains = self.feed.fetch(&token).await?;

        let fetched = trains.len();
        let now = (self.clock)();
        let board = arrange(trains, now, self.config.departure_window());

        tracing::debug!(fetched, listed = board.len(), "built departure board");
        Ok(board)
    }
}
