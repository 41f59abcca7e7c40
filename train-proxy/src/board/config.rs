//! Board configuration.

use chrono::TimeDelta;

/// Default minimum lead time before departure, in minutes.
const DEFAULT_DEPARTURE_WINDOW_MINS: i64 = 30;

/// Configuration for building the departure board.
#[derive(Debug, Clone)]
pub struct BoardConfig {
    /// Trains must depart more than this many minutes from now to be listed.
    pub departure_window_mins: i64,
}

impl BoardConfig {
    pub fn new(departure_window_mins: i64) -> Self {
        Self {
            departure_window_mins,
        }
    }

    /// Returns the departure window as a duration.
    pub fn departure_window(&self) -> TimeDelta {
        TimeDelta::minutes(self.departure_window_mins)
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DEPARTURE_WINDOW_MINS)
    }
}
