//! Departure window filter.

use chrono::{DateTime, TimeDelta, Utc};

use crate::domain::Train;

/// Keep trains whose scheduled departure today is more than `window` after `now`.
///
/// "Today" is the UTC date of `now`. Delays are ignored here, so a train that
/// is running late is still dropped if its scheduled time is too close.
pub fn departing_after(trains: Vec<Train>, now: DateTime<Utc>, window: TimeDelta) -> Vec<Train> {
    let today = now.date_naive();
    trains
        .into_iter()
        .filter(|train| train.departure_on(today) - now > window)
        .collect()
}
