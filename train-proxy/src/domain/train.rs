//! Train records as served by the upstream feed.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::time::{DepartureTime, shift_secs};

/// Per-fare-class figures (seat counts or prices).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct FareClasses {
    pub sleeper: i64,
    #[serde(rename = "AC")]
    pub ac: i64,
}

impl FareClasses {
    pub fn new(sleeper: i64, ac: i64) -> Self {
        Self { sleeper, ac }
    }
}

/// One scheduled departure.
///
/// Field names on the wire match the upstream feed, and the proxy serves
/// them back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Train {
    #[serde(rename = "trainName")]
    pub name: String,

    #[serde(rename = "trainNumber")]
    pub number: String,

    #[serde(rename = "departureTime")]
    pub departure: DepartureTime,

    #[serde(rename = "seatsAvailable")]
    pub seats: FareClasses,

    pub price: FareClasses,

    /// Reported delay in whole minutes.
    #[serde(rename = "delayedBy")]
    pub delay_mins: i64,
}

impl Train {
    /// Scheduled departure on `date`, ignoring any delay.
    pub fn departure_on(&self, date: NaiveDate) -> DateTime<Utc> {
        self.departure.on(date)
    }

    /// Departure on `date` with the reported delay added.
    pub fn effective_departure_on(&self, date: NaiveDate) -> DateTime<Utc> {
        shift_secs(
            self.departure_on(date),
            self.delay_mins.saturating_mul(60),
        )
    }
}
