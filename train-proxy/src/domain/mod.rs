//! Domain types for the train proxy.
//!
//! The upstream feed carries no dates, so every time here is a time of day
//! that callers anchor to a calendar date explicitly.

mod time;
mod train;

pub use time::{DepartureTime, midnight, shift_secs};
pub use train::{FareClasses, Train};
