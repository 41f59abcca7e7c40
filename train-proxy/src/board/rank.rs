//! Train ranking for the departure board.

use std::cmp::Ordering;

use chrono::NaiveDate;

use crate::domain::Train;

/// Rank trains by preference.
///
/// Trains are ranked by:
/// 1. Sleeper price (cheaper first)
/// 2. Sleeper seats available (more first)
/// 3. Delay-adjusted departure on `date` (later first)
///
/// The sort is stable: trains tied on all three keep their input order.
pub fn rank_trains(mut trains: Vec<Train>, date: NaiveDate) -> Vec<Train> {
    trains.sort_by(|a, b| compare(a, b, date));
    trains
}

fn compare(a: &Train, b: &Train, date: NaiveDate) -> Ordering {
    // Primary: cheaper sleeper fare
    let price_cmp = a.price.sleeper.cmp(&b.price.sleeper);
    if price_cmp != Ordering::Equal {
        return price_cmp;
    }

    // Secondary: more sleeper seats
    let seats_cmp = b.seats.sleeper.cmp(&a.seats.sleeper);
    if seats_cmp != Ordering::Equal {
        return seats_cmp;
    }

    // Tertiary: later effective departure
    b.effective_departure_on(date)
        .cmp(&a.effective_departure_on(date))
}
